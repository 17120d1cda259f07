//! Mock host for testing without the embedding platform.

use std::sync::{Arc, Mutex, PoisonError};

use crate::bridge::{HostBridge, HostCall};
use crate::session::{ColorScheme, HostSession};

/// In-memory host object.
///
/// Starts either present or absent; an absent host can be made present later
/// with [`MockHost::install`] to simulate the platform SDK loading late. Every
/// host-configuration call is recorded in order.
#[derive(Clone, Default)]
pub struct MockHost {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    session: Option<Arc<HostSession>>,
    calls: Vec<HostCall>,
    detect_count: usize,
}

impl MockHost {
    /// Host object not injected (yet).
    pub fn absent() -> Self {
        Self::default()
    }

    /// Host object present with the given init-data token.
    pub fn present(init_data: &str) -> Self {
        let host = Self::absent();
        host.install(HostSession::from_init_data(init_data, ColorScheme::Light));
        host
    }

    /// Inject the host object, returning the shared handle.
    pub fn install(&self, session: HostSession) -> Arc<HostSession> {
        let session = Arc::new(session);
        self.state().session = Some(session.clone());
        session
    }

    /// Session handle if installed.
    pub fn session(&self) -> Option<Arc<HostSession>> {
        self.state().session.clone()
    }

    /// Recorded host-configuration calls, oldest first.
    pub fn calls(&self) -> Vec<HostCall> {
        self.state().calls.clone()
    }

    /// Number of times the host object was looked up.
    pub fn detect_count(&self) -> usize {
        self.state().detect_count
    }

    fn record(&self, call: HostCall) {
        self.state().calls.push(call);
    }

    fn state(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HostBridge for MockHost {
    fn detect(&self) -> Option<Arc<HostSession>> {
        let mut state = self.state();
        state.detect_count += 1;
        state.session.clone()
    }

    fn expand(&self) {
        self.record(HostCall::Expand);
    }

    fn enable_closing_confirmation(&self) {
        self.record(HostCall::EnableClosingConfirmation);
    }

    fn set_header_color(&self, color: &str) {
        self.record(HostCall::SetHeaderColor(color.to_string()));
    }

    fn ready(&self) {
        if let Some(session) = self.session() {
            session.mark_ready();
        }
        self.record(HostCall::Ready);
    }

    fn current_init_data(&self) -> String {
        // Does not count as a detection attempt.
        self.session()
            .map(|session| session.init_data())
            .unwrap_or_default()
    }
}
