//! Abstraction over the host runtime object.
use std::sync::Arc;

use crate::session::HostSession;

/// Header color applied once the host is detected.
pub const HEADER_COLOR: &str = "#3B82F6";

/// Shared, read-mostly reference to the host bridge.
pub type SharedHost = Arc<dyn HostBridge>;

/// The host runtime object as seen from the app.
///
/// Implementations wrap whatever the embedding platform injects. Absence of the
/// object is a normal outcome reported by [`HostBridge::detect`] returning
/// `None`, not an error.
pub trait HostBridge: Send + Sync {
    /// Look up the host object. Returns the session handle if present.
    fn detect(&self) -> Option<Arc<HostSession>>;

    /// Expand the app to the full viewport.
    fn expand(&self);

    /// Ask the user to confirm before the app is closed.
    fn enable_closing_confirmation(&self);

    /// Set the host header color (hex, e.g. `#3B82F6`).
    fn set_header_color(&self, color: &str);

    /// Acknowledge that the app finished loading.
    fn ready(&self);

    /// Init-data token as it is right now; empty when the host is absent.
    fn current_init_data(&self) -> String {
        self.detect()
            .map(|session| session.init_data())
            .unwrap_or_default()
    }
}

/// Host-configuration call, recorded by test doubles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Expand,
    EnableClosingConfirmation,
    SetHeaderColor(String),
    Ready,
}
