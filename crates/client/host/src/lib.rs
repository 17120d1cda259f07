//! Host runtime integration for the wishlist mini-app.
//!
//! The mini-app runs embedded inside a chat-platform host that exposes a bridge
//! object carrying the signed init-data token, the viewer identity, and theme
//! hints. This crate models that object and the calls the app makes on it.
//!
//! # Modules
//!
//! - [`session`]: [`HostSession`] and the identity/theme records it carries
//! - [`bridge`]: [`HostBridge`] trait implemented by every host backend
//! - [`init_data`]: decoding of the URL-encoded init-data token
//! - [`mock`]: in-memory host for tests and local development
//! - [`env`]: host emulated from process environment variables
pub mod bridge;
pub mod env;
pub mod init_data;
pub mod mock;
pub mod session;

pub use bridge::{HEADER_COLOR, HostBridge, HostCall, SharedHost};
pub use env::EnvHost;
pub use init_data::{InitData, InitDataError};
pub use mock::MockHost;
pub use session::{ColorScheme, HostSession, HostUser};
