//! Top-level client wiring the host, bootstrap, API, and frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (composition root)
//!   ├─→ SessionBootstrap (host detection, single retry)
//!   ├─→ WishlistService  (API client + query cache)
//!   └─→ Frontend         (renders AppView, drives the service)
//! ```
//!
//! The host bridge is shared by the bootstrap and the API client: the
//! bootstrap configures the host once it is detected, while the API client
//! reads the init-data token from it on every request.
mod builder;
pub mod console;
pub mod logging;

pub use builder::ClientBuilder;
pub use client_core::Frontend;
pub use console::ConsoleFrontend;

use std::sync::Arc;

use anyhow::Result;
use client_bootstrap::SessionBootstrap;
use client_core::{AppContext, WishlistService};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` assembles the layers
/// 2. `Client::run()` starts host detection
/// 3. `Client::run()` transfers control to the frontend
/// 4. On frontend exit a pending detection retry is cancelled
pub struct Client {
    bootstrap: Arc<SessionBootstrap>,
    service: WishlistService,
    frontend: Box<dyn Frontend>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub async fn run(self) -> Result<()> {
        self.bootstrap.resolve();

        let ctx = AppContext::new(self.bootstrap.clone(), self.service);
        let mut frontend = self.frontend;
        let result = frontend.run(ctx).await;

        self.bootstrap.shutdown();
        result
    }
}
