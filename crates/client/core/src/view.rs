//! Top-level screen selection.
use client_bootstrap::{BootstrapState, Readiness};
use client_host::{ColorScheme, HostUser};

/// Screen the app renders for a given bootstrap state.
#[derive(Debug, Clone, PartialEq)]
pub enum AppView {
    /// Host detection has not settled yet.
    Loading,
    /// The host never appeared; the app must be reopened inside the platform.
    HostRequired,
    /// Host detected; pages may issue API calls.
    Ready {
        identity: Option<HostUser>,
        color_scheme: ColorScheme,
    },
}

impl AppView {
    pub fn from_state(state: &BootstrapState) -> Self {
        match state.readiness() {
            Readiness::Resolving => Self::Loading,
            Readiness::DetectedAbsent => Self::HostRequired,
            Readiness::DetectedPresent => Self::Ready {
                identity: state.identity.clone(),
                color_scheme: state
                    .session
                    .as_ref()
                    .map(|session| session.color_scheme())
                    .unwrap_or_default(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// User-facing headline for the non-ready screens.
    pub fn headline(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Loading Telegram Web App..."),
            Self::HostRequired => Some("This app must be opened inside Telegram"),
            Self::Ready { .. } => None,
        }
    }
}

impl From<&BootstrapState> for AppView {
    fn from(state: &BootstrapState) -> Self {
        Self::from_state(state)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use client_bootstrap::BootstrapPhase;
    use client_host::HostSession;

    use super::*;

    const INIT_DATA: &str = "user=%7B%22id%22%3A42%2C%22first_name%22%3A%22Anna%22%7D&hash=ff";

    fn state(phase: BootstrapPhase, session: Option<HostSession>) -> BootstrapState {
        let session = session.map(Arc::new);
        let identity = session.as_ref().and_then(|s| s.user());
        BootstrapState {
            phase,
            session,
            identity,
        }
    }

    #[test]
    fn test_resolving_shows_loading() {
        for phase in [BootstrapPhase::Init, BootstrapPhase::Resolving] {
            let view = AppView::from_state(&state(phase, None));
            assert_eq!(view, AppView::Loading);
            assert!(view.headline().is_some());
        }
    }

    #[test]
    fn test_timeout_requires_host() {
        let view = AppView::from(&state(BootstrapPhase::TimedOut, None));
        assert_eq!(view, AppView::HostRequired);
        assert!(!view.is_ready());
    }

    #[test]
    fn test_detected_is_ready() {
        let session = HostSession::from_init_data(INIT_DATA, ColorScheme::Dark);
        let view = AppView::from_state(&state(BootstrapPhase::Detected, Some(session)));

        match view {
            AppView::Ready {
                identity,
                color_scheme,
            } => {
                assert_eq!(identity.unwrap().id, 42);
                assert_eq!(color_scheme, ColorScheme::Dark);
            }
            other => panic!("expected ready view, got {:?}", other),
        }
    }
}
