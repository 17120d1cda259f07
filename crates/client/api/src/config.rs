//! API client configuration.
use std::env;

/// Backend address used when `API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Backend base URL, without trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim().trim_end_matches('/').to_string(),
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `API_URL` - Backend base URL (default: http://localhost:8000)
    pub fn from_env() -> Self {
        match env::var("API_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalization() {
        assert_eq!(ApiConfig::default().base_url, "http://localhost:8000");
        assert_eq!(
            ApiConfig::new(" https://api.example.com/backend/ ").base_url,
            "https://api.example.com/backend"
        );
    }
}
