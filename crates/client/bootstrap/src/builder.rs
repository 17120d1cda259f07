//! Assembles the host bridge and configuration into a [`SessionBootstrap`].
use std::sync::Arc;

use client_host::{EnvHost, HostBridge, SharedHost};

use crate::config::BootstrapConfig;
use crate::resolver::SessionBootstrap;

/// Builder for [`SessionBootstrap`].
///
/// Defaults to the environment-backed host and [`BootstrapConfig::default`].
#[derive(Default)]
pub struct BootstrapBuilder {
    config: Option<BootstrapConfig>,
    host: Option<SharedHost>,
}

impl BootstrapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: BootstrapConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Provide the host bridge (e.g., a mock host in tests).
    pub fn host(mut self, host: impl HostBridge + 'static) -> Self {
        self.host = Some(Arc::new(host));
        self
    }

    /// Provide an already shared host bridge.
    pub fn shared_host(mut self, host: SharedHost) -> Self {
        self.host = Some(host);
        self
    }

    pub fn build(self) -> SessionBootstrap {
        let host = self
            .host
            .unwrap_or_else(|| Arc::new(EnvHost::from_env()) as SharedHost);

        SessionBootstrap::new(host, self.config.unwrap_or_default())
    }
}
