mod model;
mod server;

use crate::server::{bot, config::Config, error::AppError, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    startup::init_tracing();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client()?;
    let card_assets = startup::load_card_assets(&config)?;
    startup::prepare_output_dir(&config.image_output_dir).await?;

    tracing::info!("Statistics backend at {}", config.api_base_url);

    let state = AppState::new(config, http_client, card_assets);

    bot::start::start_bot(state).await
}
