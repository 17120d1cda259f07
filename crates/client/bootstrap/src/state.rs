//! Bootstrap phases and the state published to the application.
use std::sync::Arc;

use client_host::{HostSession, HostUser};

/// Position in the detection state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapPhase {
    Init,
    Resolving,
    Detected,
    TimedOut,
}

impl BootstrapPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Detected | Self::TimedOut)
    }
}

/// Tri-state readiness signal observed by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Resolving,
    DetectedAbsent,
    DetectedPresent,
}

/// Snapshot published on every phase change.
#[derive(Debug, Clone)]
pub struct BootstrapState {
    pub phase: BootstrapPhase,
    pub session: Option<Arc<HostSession>>,
    pub identity: Option<HostUser>,
}

impl BootstrapState {
    pub(crate) fn initial() -> Self {
        Self {
            phase: BootstrapPhase::Init,
            session: None,
            identity: None,
        }
    }

    /// True until detection succeeds or the retry window closes.
    pub fn is_resolving(&self) -> bool {
        !self.phase.is_terminal()
    }

    pub fn readiness(&self) -> Readiness {
        match self.phase {
            BootstrapPhase::Init | BootstrapPhase::Resolving => Readiness::Resolving,
            BootstrapPhase::Detected => Readiness::DetectedPresent,
            BootstrapPhase::TimedOut => Readiness::DetectedAbsent,
        }
    }
}
