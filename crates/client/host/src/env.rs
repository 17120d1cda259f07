//! Host emulated from process environment variables.
//!
//! Outside the embedding platform there is no host object. For local runs the
//! binary can stand one up from the environment so the rest of the app sees a
//! normal, detected session.
use std::env;
use std::sync::Arc;

use crate::bridge::HostBridge;
use crate::init_data::InitData;
use crate::session::{ColorScheme, HostSession};

/// Host backed by `TELEGRAM_INIT_DATA` / `TELEGRAM_COLOR_SCHEME`.
pub struct EnvHost {
    session: Option<Arc<HostSession>>,
}

impl EnvHost {
    /// Construct from process environment variables.
    ///
    /// Environment variables:
    /// - `TELEGRAM_INIT_DATA` - Raw init-data token; the host is absent when unset or empty
    /// - `TELEGRAM_COLOR_SCHEME` - `light` or `dark` (default: light)
    pub fn from_env() -> Self {
        let init_data = env::var("TELEGRAM_INIT_DATA").unwrap_or_default();
        let scheme = env::var("TELEGRAM_COLOR_SCHEME")
            .map(|value| ColorScheme::parse_or_default(&value))
            .unwrap_or_default();

        Self::new(&init_data, scheme)
    }

    /// A blank token leaves the host absent.
    ///
    /// A token the backend cannot authenticate is still installed, so the app
    /// reaches the same 401 path it would inside the real host.
    pub fn new(init_data: &str, color_scheme: ColorScheme) -> Self {
        let token = init_data.trim();
        if token.is_empty() {
            return Self { session: None };
        }

        match InitData::validate(token) {
            Ok(data) => tracing::info!(
                "Emulating host launch (query_id={:?}, auth_date={:?}, start_param={:?})",
                data.query_id,
                data.auth_date,
                data.start_param
            ),
            Err(e) => tracing::warn!("Emulated init data will not authenticate: {}", e),
        }

        Self {
            session: Some(Arc::new(HostSession::from_init_data(token, color_scheme))),
        }
    }
}

impl HostBridge for EnvHost {
    fn detect(&self) -> Option<Arc<HostSession>> {
        self.session.clone()
    }

    fn expand(&self) {
        tracing::debug!("host: expand");
    }

    fn enable_closing_confirmation(&self) {
        tracing::debug!("host: enable closing confirmation");
    }

    fn set_header_color(&self, color: &str) {
        tracing::debug!("host: header color {}", color);
    }

    fn ready(&self) {
        if let Some(session) = &self.session {
            session.mark_ready();
        }
        tracing::debug!("host: ready");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_means_absent() {
        assert!(EnvHost::new("", ColorScheme::Light).detect().is_none());
        assert!(EnvHost::new("   ", ColorScheme::Light).detect().is_none());
    }

    #[test]
    fn test_signed_token_carries_identity() {
        let token = "query_id=AA&user=%7B%22id%22%3A42%2C%22first_name%22%3A%22Anna%22%7D&auth_date=1700000000&hash=ab12";
        let host = EnvHost::new(&format!("  {}\n", token), ColorScheme::Light);

        let session = host.detect().expect("present");
        assert_eq!(session.init_data(), token);
        assert_eq!(session.user().map(|user| user.id), Some(42));
    }

    // Unverifiable tokens are still installed; the backend decides.
    #[test]
    fn test_token_means_present() {
        let host = EnvHost::new("hash=1", ColorScheme::Dark);
        let session = host.detect().expect("present");
        assert_eq!(session.init_data(), "hash=1");
        assert_eq!(session.color_scheme(), ColorScheme::Dark);

        host.ready();
        assert!(session.is_ready());
    }
}
