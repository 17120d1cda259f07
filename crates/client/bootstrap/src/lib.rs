//! Host-session bootstrap for the wishlist mini-app.
//!
//! Detects the host runtime object at startup, extracts the session identity,
//! configures the host once, and publishes a readiness signal the rest of the
//! application waits on before rendering its views.
//!
//! # Lifecycle
//!
//! ```text
//! Init ──resolve()──> Resolving ──host found──────────────> Detected
//!                         │
//!                         └──absent, retry after delay──┬─> Detected
//!                                                       └─> TimedOut
//! ```
//!
//! `Detected` and `TimedOut` are terminal: detection is attempted at most twice.
pub mod builder;
pub mod config;
pub mod resolver;
pub mod state;

pub use builder::BootstrapBuilder;
pub use config::{BootstrapConfig, HOST_RETRY_DELAY};
pub use resolver::SessionBootstrap;
pub use state::{BootstrapPhase, BootstrapState, Readiness};
