//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The handler:
//! - Logs connection information
//! - Sets the bot's presence
//! - Registers the slash commands, per configured guild or globally

use serenity::all::{ActivityData, Command, Context, GuildId, Ready};

use crate::server::{bot::command, error::AppError, state::AppState};

pub const ACTIVITY: &str = "Mathematical Base Defenders";

/// Handles the ready event when the bot connects to Discord.
///
/// Fires again after a reconnect. Registering commands overwrites the existing set,
/// so doing it on every ready is safe.
///
/// # Arguments
/// - `state` - Shared state holding the guilds to register commands in
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching(ACTIVITY)));

    if let Err(e) = register_commands(state, &ctx).await {
        tracing::error!("Failed to register slash commands: {}", e);
    }
}

async fn register_commands(state: &AppState, ctx: &Context) -> Result<(), AppError> {
    let guild_ids = state.config.command_guild_ids();

    if guild_ids.is_empty() {
        let commands = Command::set_global_commands(&ctx.http, command::definitions()).await?;
        tracing::info!("Registered {} global slash commands", commands.len());
        return Ok(());
    }

    for guild_id in guild_ids.into_iter().map(GuildId::new) {
        let commands = guild_id
            .set_commands(&ctx.http, command::definitions())
            .await?;
        tracing::info!(
            "Registered {} slash commands in guild {}",
            commands.len(),
            guild_id
        );
    }

    Ok(())
}
