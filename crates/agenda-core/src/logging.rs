//! Tracing subscriber setup.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, APP_NAME, APP_VERSION};

/// Install the global fmt subscriber. `RUST_LOG` wins over the configured
/// filter. Fails if a subscriber is already installed.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .map_err(|e| anyhow!("invalid log filter {:?}: {e}", config.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::info!("{} starting v{}", APP_NAME, APP_VERSION);
    Ok(())
}
