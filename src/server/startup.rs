//! Process initialization performed once before the bot connects.

use std::{path::Path, time::Duration};

use tracing_subscriber::EnvFilter;

use crate::server::{canvas::assets::CardAssets, config::Config, error::AppError};

/// Timeout for a single request to the statistics backend.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client shared by every backend request.
///
/// Redirects are not followed so a misconfigured backend cannot bounce requests to
/// arbitrary hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(HTTP_TIMEOUT)
        .build()?;

    Ok(client)
}

/// Loads the stat card font and locates the avatar.
///
/// A missing or broken font is fatal here rather than on the first `/user` command.
pub fn load_card_assets(config: &Config) -> Result<CardAssets, AppError> {
    let assets = CardAssets::load(&config.asset_dir)?;
    tracing::info!("Loaded card assets from {}", config.asset_dir.display());

    Ok(assets)
}

/// Creates the stat card output directory if it does not exist yet.
pub async fn prepare_output_dir(dir: &Path) -> Result<(), AppError> {
    tokio::fs::create_dir_all(dir).await?;
    tracing::debug!("Stat cards are written to {}", dir.display());

    Ok(())
}
