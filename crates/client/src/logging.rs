//! File logging for the client binary.
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Platform-specific log directory.
///
/// `WISHLIST_LOG_DIR` overrides the default:
/// - macOS: `~/Library/Caches/wishlist/logs`
/// - Linux: `~/.cache/wishlist/logs` (or `$XDG_CACHE_HOME/wishlist/logs`)
/// - Windows: `%LOCALAPPDATA%\wishlist\cache\logs`
/// - Fallback: `/tmp/wishlist/logs`
pub fn log_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("WISHLIST_LOG_DIR").filter(|dir| !dir.is_empty()) {
        return PathBuf::from(dir);
    }

    directories::ProjectDirs::from("", "", "wishlist")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/wishlist"))
        .join("logs")
}

/// Install a file-only subscriber writing to `<log_dir>/client.log`.
///
/// Stdout is left to the frontend. The returned guard flushes the writer when
/// dropped and must be held for the life of the process.
pub fn setup_logging() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Log file: {}/client.log", dir.display());
    Ok(guard)
}
