//! Host detection with a single scheduled retry.
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use client_host::SharedHost;

use crate::config::BootstrapConfig;
use crate::state::{BootstrapPhase, BootstrapState};

/// Owner of the host-detection lifecycle.
///
/// The bootstrap is the only component that mutates the host session's
/// lifecycle; everyone else observes it through [`SessionBootstrap::subscribe`].
/// Dropping the bootstrap cancels a pending retry.
pub struct SessionBootstrap {
    host: SharedHost,
    config: BootstrapConfig,
    state_tx: Arc<watch::Sender<BootstrapState>>,
    retry: Mutex<Option<JoinHandle<()>>>,
}

impl SessionBootstrap {
    pub fn new(host: SharedHost, config: BootstrapConfig) -> Self {
        let (state_tx, _) = watch::channel(BootstrapState::initial());
        Self {
            host,
            config,
            state_tx: Arc::new(state_tx),
            retry: Mutex::new(None),
        }
    }

    pub fn host(&self) -> &SharedHost {
        &self.host
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Current state snapshot.
    pub fn state(&self) -> BootstrapState {
        self.state_tx.borrow().clone()
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.state_tx.borrow().phase
    }

    /// Receiver notified on every phase change.
    pub fn subscribe(&self) -> watch::Receiver<BootstrapState> {
        self.state_tx.subscribe()
    }

    /// Start detection.
    ///
    /// Checks for the host immediately. If it is absent, schedules exactly one
    /// retry after [`BootstrapConfig::retry_delay`]; after that retry the
    /// bootstrap settles whatever the outcome. Calling this again after the
    /// first call has no effect.
    ///
    /// Outside a Tokio runtime the retry cannot be scheduled, so an absent
    /// host settles as timed out after the first check.
    pub fn resolve(&self) {
        let started = self.state_tx.send_if_modified(|state| {
            if state.phase != BootstrapPhase::Init {
                return false;
            }
            state.phase = BootstrapPhase::Resolving;
            true
        });

        if !started {
            tracing::debug!("Bootstrap already started: phase={:?}", self.phase());
            return;
        }

        if attempt(&self.host, &self.state_tx, &self.config.header_color) {
            return;
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!("No async runtime to schedule the host detection retry");
            time_out(&self.state_tx);
            return;
        };

        tracing::debug!(
            "Host object not present, retrying in {:?}",
            self.config.retry_delay
        );

        let host = self.host.clone();
        let state_tx = self.state_tx.clone();
        let delay = self.config.retry_delay;
        let header_color = self.config.header_color.clone();

        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;

            if !attempt(&host, &state_tx, &header_color) {
                time_out(&state_tx);
            }
        });

        *self.retry.lock().unwrap_or_else(PoisonError::into_inner) = Some(task);
    }

    /// Wait until the bootstrap leaves the resolving phases.
    ///
    /// Returns immediately if already settled. Pending forever if
    /// [`SessionBootstrap::resolve`] was never called.
    pub async fn resolved(&self) -> BootstrapState {
        let mut rx = self.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = rx.wait_for(|state| !state.is_resolving()).await;
        self.state()
    }

    /// Cancel a pending retry. The state stays where it is.
    pub fn shutdown(&self) {
        if let Some(task) = self
            .retry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            && !task.is_finished()
        {
            tracing::debug!("Cancelling pending host detection retry");
            task.abort();
        }
    }
}

impl Drop for SessionBootstrap {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// One detection attempt. On success configures the host and publishes
/// `Detected`; returns whether the host was found.
fn attempt(
    host: &SharedHost,
    state_tx: &watch::Sender<BootstrapState>,
    header_color: &str,
) -> bool {
    let Some(session) = host.detect() else {
        return false;
    };

    // A detection may only settle a bootstrap that is still resolving.
    if state_tx.borrow().phase != BootstrapPhase::Resolving {
        return false;
    }

    let identity = session.user();
    tracing::info!(
        "Host detected: user={:?}, color_scheme={}",
        identity.as_ref().map(|user| user.id),
        session.color_scheme()
    );

    host.expand();
    host.enable_closing_confirmation();
    host.set_header_color(header_color);
    host.ready();

    state_tx.send_modify(|state| {
        state.phase = BootstrapPhase::Detected;
        state.session = Some(session);
        state.identity = identity;
    });

    true
}

/// Settle a still-resolving bootstrap as timed out.
fn time_out(state_tx: &watch::Sender<BootstrapState>) {
    let settled = state_tx.send_if_modified(|state| {
        if state.phase != BootstrapPhase::Resolving {
            return false;
        }
        state.phase = BootstrapPhase::TimedOut;
        true
    });

    if settled {
        tracing::warn!("Host object not found; the app must be opened inside the host");
    }
}
