//! Calling layer shared by every frontend.
//!
//! Sits between the raw [`client_api`] endpoints and whatever renders the app:
//!
//! - [`QueryCache`] keeps decoded responses keyed by [`QueryKey`] and drops
//!   them when a mutation invalidates their family.
//! - [`WishlistService`] exposes the page-level reads and the mutations; each
//!   mutation invalidates the keys the pages depend on.
//! - [`WishForm`] / [`GroupForm`] validate user input before anything is sent.
//! - [`AppView`] maps bootstrap readiness onto the screen to show.
pub mod form;
pub mod frontend;
pub mod query;
pub mod service;
pub mod view;

pub use form::{GroupForm, ValidationError, WishForm};
pub use frontend::{AppContext, Frontend};
pub use query::{QueryCache, QueryFamily, QueryKey};
pub use service::{RECENT_WISHES_LIMIT, ServiceError, WishlistService};
pub use view::AppView;
