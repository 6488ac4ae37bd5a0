use serenity::all::{Client, GatewayIntents};

use crate::server::{bot::handler::Handler, error::AppError, state::AppState};

/// Starts the Discord bot and runs it until shutdown.
///
/// Slash commands only need the `GUILDS` intent; no privileged intents are
/// requested.
///
/// # Arguments
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok(())` if the bot ran and shut down cleanly
/// - `Err(AppError)` if bot initialization or the gateway connection fails
pub async fn start_bot(state: AppState) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS;

    let token = state.config.discord_token.clone();
    let mut client = Client::builder(&token, intents)
        .event_handler(Handler::new(state))
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
