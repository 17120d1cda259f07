//! Endpoint wrappers grouped by resource.
//!
//! Each method performs exactly one HTTP call and returns the raw
//! [`ApiResponse`](crate::ApiResponse) for the caller to unwrap.
mod groups;
mod users;
mod wishes;

pub use groups::GroupsApi;
pub use users::UsersApi;
pub use wishes::WishesApi;
