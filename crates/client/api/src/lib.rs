//! Authenticated REST client for the wishlist backend.
//!
//! # Architecture
//!
//! ```text
//! UsersApi / WishesApi / GroupsApi   (one method per endpoint)
//!        └─→ ApiClient               (single shared reqwest client)
//!               ├─→ InitDataInterceptor  adds X-Telegram-Init-Data per request
//!               └─→ intercept_response   classifies 401 / other failures
//! ```
//!
//! The client never retries, caches, or coalesces requests; that belongs to the
//! calling layer.
pub mod client;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod models;
pub mod resources;
pub mod response;

pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use error::{ApiError, Result};
pub use interceptor::{INIT_DATA_HEADER, InitDataInterceptor};
pub use reqwest::{Method, StatusCode};
pub use resources::{GroupsApi, UsersApi, WishesApi};
pub use response::ApiResponse;
