//! Client builder with dependency injection pattern.
use std::sync::Arc;

use anyhow::{Context, Result};
use client_api::{ApiClient, ApiConfig};
use client_bootstrap::{BootstrapBuilder, BootstrapConfig};
use client_core::WishlistService;
use client_host::{EnvHost, HostBridge, SharedHost};

use crate::{Client, Frontend};

/// Builder for constructing a [`Client`].
///
/// The frontend is required. Host, bootstrap and API configuration fall back
/// to their environment-driven defaults.
#[derive(Default)]
pub struct ClientBuilder {
    host: Option<SharedHost>,
    bootstrap: Option<BootstrapConfig>,
    api: Option<ApiConfig>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host bridge shared by the bootstrap and the API client.
    ///
    /// Defaults to [`EnvHost::from_env`].
    pub fn host(mut self, host: impl HostBridge + 'static) -> Self {
        self.host = Some(Arc::new(host));
        self
    }

    pub fn bootstrap_config(mut self, config: BootstrapConfig) -> Self {
        self.bootstrap = Some(config);
        self
    }

    pub fn api_config(mut self, config: ApiConfig) -> Self {
        self.api = Some(config);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Frontend is not set
    /// - The HTTP client cannot be constructed
    pub fn build(self) -> Result<Client> {
        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        let host: SharedHost = match self.host {
            Some(host) => host,
            None => Arc::new(EnvHost::from_env()),
        };

        let bootstrap = BootstrapBuilder::new()
            .config(self.bootstrap.unwrap_or_else(BootstrapConfig::from_env))
            .shared_host(host.clone())
            .build();

        let api = ApiClient::new(self.api.unwrap_or_else(ApiConfig::from_env), host)
            .context("Failed to build API client")?;

        Ok(Client {
            bootstrap: Arc::new(bootstrap),
            service: WishlistService::new(api),
            frontend,
        })
    }
}
