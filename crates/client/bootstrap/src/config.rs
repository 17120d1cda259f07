//! Bootstrap configuration structures and loaders.
use std::env;
use std::time::Duration;

use client_host::HEADER_COLOR;

/// Delay before the single detection retry.
pub const HOST_RETRY_DELAY: Duration = Duration::from_millis(1000);

/// Configuration for host detection.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    /// Wait between the immediate detection attempt and the only retry.
    pub retry_delay: Duration,
    /// Header color applied to the host after detection.
    pub header_color: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            retry_delay: HOST_RETRY_DELAY,
            header_color: HEADER_COLOR.to_string(),
        }
    }
}

impl BootstrapConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HOST_RETRY_DELAY_MS` - Delay before the detection retry (default: 1000)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(millis) = read_env::<u64>("HOST_RETRY_DELAY_MS") {
            config.retry_delay = Duration::from_millis(millis);
        }

        config
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BootstrapConfig::default();
        assert_eq!(config.retry_delay, Duration::from_millis(1000));
        assert_eq!(config.header_color, "#3B82F6");
    }
}
