//! Wishlist mini-app client binary.
//!
//! Composition root: loads configuration from the environment (and `.env`),
//! installs file logging, and runs the console frontend against the backend.
//!
//! Outside the chat platform the host is emulated from `TELEGRAM_INIT_DATA`;
//! without it the app reports that it must be opened inside Telegram.
//!
//! ```bash
//! API_URL=http://localhost:8000 TELEGRAM_INIT_DATA="query_id=...&user=...&hash=..." \
//!     cargo run -p wishlist-client
//! ```
use anyhow::Result;
use client_api::ApiConfig;
use client_bootstrap::BootstrapConfig;
use wishlist_client::{Client, ConsoleFrontend, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let _guard = logging::setup_logging()?;

    let api_config = ApiConfig::from_env();
    let bootstrap_config = BootstrapConfig::from_env();

    tracing::info!("Starting wishlist client");
    tracing::info!("API URL: {}", api_config.base_url);
    tracing::info!("Host retry delay: {:?}", bootstrap_config.retry_delay);

    let client = Client::builder()
        .api_config(api_config)
        .bootstrap_config(bootstrap_config)
        .frontend(ConsoleFrontend::new())
        .build()?;

    let result = client.run().await;
    if let Err(e) = &result {
        tracing::error!("Client error: {:#}", e);
    }

    tracing::info!("Client shutdown complete");
    result
}
