//! Trait describing a runnable client front-end.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use client_bootstrap::SessionBootstrap;

use crate::service::WishlistService;
use crate::view::AppView;

/// Everything a frontend needs to render the app.
///
/// Frontends do not own the bootstrap lifecycle; they observe it and issue
/// data calls through the shared service.
#[derive(Clone)]
pub struct AppContext {
    bootstrap: Arc<SessionBootstrap>,
    service: WishlistService,
}

impl AppContext {
    pub fn new(bootstrap: Arc<SessionBootstrap>, service: WishlistService) -> Self {
        Self { bootstrap, service }
    }

    pub fn bootstrap(&self) -> &SessionBootstrap {
        &self.bootstrap
    }

    pub fn service(&self) -> &WishlistService {
        &self.service
    }

    /// Screen for the bootstrap state as it is now.
    pub fn view(&self) -> AppView {
        AppView::from_state(&self.bootstrap.state())
    }

    /// Wait for detection to settle, then return the screen to show.
    pub async fn settled_view(&self) -> AppView {
        AppView::from_state(&self.bootstrap.resolved().await)
    }
}

/// Frontend abstraction for UI layers.
///
/// # Implementations
///
/// - `ConsoleFrontend`: headless frontend that prints the home page data
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend until it is done.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, ctx: AppContext) -> Result<()>;
}
