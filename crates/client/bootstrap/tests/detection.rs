use std::time::Duration;

use client_bootstrap::{BootstrapBuilder, BootstrapConfig, BootstrapPhase, Readiness};
use client_host::{ColorScheme, HostCall, HostSession, MockHost};
use tokio::time::Instant;

const INIT_DATA: &str = "query_id=AA\
    &user=%7B%22id%22%3A42%2C%22first_name%22%3A%22Ivan%22%2C%22is_premium%22%3Afalse%7D\
    &auth_date=1700000000&hash=00ff";

fn expected_calls() -> Vec<HostCall> {
    vec![
        HostCall::Expand,
        HostCall::EnableClosingConfirmation,
        HostCall::SetHeaderColor("#3B82F6".to_string()),
        HostCall::Ready,
    ]
}

/// Let spawned tasks observe the current (paused) clock.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn test_host_present_on_first_check() {
    let host = MockHost::present(INIT_DATA);
    let bootstrap = BootstrapBuilder::new().host(host.clone()).build();

    bootstrap.resolve();

    // Settled synchronously, no waiting involved.
    let state = bootstrap.state();
    assert_eq!(state.phase, BootstrapPhase::Detected);
    assert!(!state.is_resolving());
    assert_eq!(state.readiness(), Readiness::DetectedPresent);
    assert_eq!(state.identity.as_ref().map(|user| user.id), Some(42));
    assert_eq!(
        state.session.as_ref().map(|session| session.init_data()),
        Some(INIT_DATA.to_string())
    );

    assert_eq!(host.calls(), expected_calls());
    assert_eq!(host.detect_count(), 1);
    assert!(host.session().unwrap().is_ready());
}

#[tokio::test(start_paused = true)]
async fn test_host_appears_before_retry() {
    let host = MockHost::absent();
    let bootstrap = BootstrapBuilder::new().host(host.clone()).build();
    let start = Instant::now();

    bootstrap.resolve();
    assert_eq!(bootstrap.phase(), BootstrapPhase::Resolving);

    // The SDK finishes loading half-way through the retry window.
    let late = host.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(500)).await;
        late.install(HostSession::from_init_data("late-token", ColorScheme::Dark));
    });
    settle().await;

    tokio::time::advance(Duration::from_millis(999)).await;
    settle().await;
    assert_eq!(bootstrap.phase(), BootstrapPhase::Resolving);
    assert!(host.calls().is_empty());

    let state = bootstrap.resolved().await;
    assert!(start.elapsed() >= Duration::from_millis(1000));
    assert_eq!(state.phase, BootstrapPhase::Detected);
    assert_eq!(host.calls(), expected_calls());
    assert_eq!(host.detect_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_host_absent_on_both_checks() {
    let host = MockHost::absent();
    let bootstrap = BootstrapBuilder::new().host(host.clone()).build();
    let mut observed = bootstrap.subscribe();

    assert_eq!(bootstrap.phase(), BootstrapPhase::Init);
    bootstrap.resolve();
    assert_eq!(observed.borrow_and_update().phase, BootstrapPhase::Resolving);

    let state = bootstrap.resolved().await;
    assert_eq!(state.phase, BootstrapPhase::TimedOut);
    assert_eq!(state.readiness(), Readiness::DetectedAbsent);
    assert!(state.session.is_none());
    assert!(host.calls().is_empty());
    assert_eq!(host.detect_count(), 2);

    // Terminal: later calls and later host arrival change nothing.
    host.install(HostSession::from_init_data("too-late", ColorScheme::Light));
    bootstrap.resolve();
    tokio::time::advance(Duration::from_secs(10)).await;
    settle().await;

    assert_eq!(bootstrap.phase(), BootstrapPhase::TimedOut);
    assert!(host.calls().is_empty());
    assert_eq!(host.detect_count(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_side_effects_fire_once() {
    let host = MockHost::present(INIT_DATA);
    let bootstrap = BootstrapBuilder::new().host(host.clone()).build();

    bootstrap.resolve();
    bootstrap.resolve();
    bootstrap.resolve();
    let _ = bootstrap.resolved().await;

    assert_eq!(host.calls(), expected_calls());
    assert_eq!(host.detect_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_drop_cancels_pending_retry() {
    let host = MockHost::absent();
    let bootstrap = BootstrapBuilder::new().host(host.clone()).build();
    let observed = bootstrap.subscribe();

    bootstrap.resolve();
    drop(bootstrap);

    host.install(HostSession::from_init_data("abc", ColorScheme::Light));
    tokio::time::advance(Duration::from_secs(5)).await;
    settle().await;

    assert_eq!(host.detect_count(), 1);
    assert!(host.calls().is_empty());
    assert_eq!(observed.borrow().phase, BootstrapPhase::Resolving);
}

#[tokio::test(start_paused = true)]
async fn test_configured_retry_delay() {
    let host = MockHost::absent();
    let bootstrap = BootstrapBuilder::new()
        .host(host.clone())
        .config(BootstrapConfig::default().with_retry_delay(Duration::from_millis(250)))
        .build();
    let start = Instant::now();

    bootstrap.resolve();
    let state = bootstrap.resolved().await;

    assert_eq!(state.phase, BootstrapPhase::TimedOut);
    assert!(start.elapsed() >= Duration::from_millis(250));
    assert!(start.elapsed() < Duration::from_millis(1000));
}

#[test]
fn test_absent_host_without_runtime_times_out() {
    let host = MockHost::absent();
    let bootstrap = BootstrapBuilder::new().host(host.clone()).build();

    bootstrap.resolve();

    assert_eq!(bootstrap.phase(), BootstrapPhase::TimedOut);
    assert_eq!(bootstrap.state().readiness(), Readiness::DetectedAbsent);
    assert_eq!(host.detect_count(), 1);
    assert!(host.calls().is_empty());
}

#[test]
fn test_present_host_without_runtime_is_detected() {
    let host = MockHost::present(INIT_DATA);
    let bootstrap = BootstrapBuilder::new().host(host.clone()).build();

    bootstrap.resolve();

    assert_eq!(bootstrap.phase(), BootstrapPhase::Detected);
    assert_eq!(host.calls(), expected_calls());
}
