//! Slash command definitions and shared command helpers.
//!
//! Each command module exposes a `NAME`, a `register` function building its
//! definition and a `run` function executing it. Commands return `AppError` on
//! failure; the interaction handler turns that into the reply.

use serenity::all::{CommandInteraction, CreateCommand, GuildId};

use crate::server::error::AppError;

pub mod broadcast;
pub mod leaderboards;
pub mod nickname;
pub mod user;

pub const NO_OWNER: &str =
    "This bot does not have an owner.\nIf you are the owner, set the environment variable to your user ID.";
pub const NOT_OWNER: &str = "Unable to run command: You're not the owner of this bot.";
pub const NO_GUILD: &str = "Unable to run command: Guild does not exist.";

/// Definitions of every slash command the bot registers.
pub fn definitions() -> Vec<CreateCommand> {
    vec![
        user::register(),
        leaderboards::register(),
        nickname::register(),
        broadcast::register(),
    ]
}

/// Reads a required string option.
///
/// Discord enforces required options, so a missing value means the registered
/// definition and the handler disagree.
///
/// # Returns
/// - `Ok(&str)` - The option's value
/// - `Err(AppError::BadRequest)` - The option is absent or empty
pub fn string_option<'a>(command: &'a CommandInteraction, name: &str) -> Result<&'a str, AppError> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .and_then(|option| option.value.as_str())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("Unable to run command: `{}` is empty.", name)))
}

/// Checks that an owner-only command may run.
///
/// # Arguments
/// - `owner_id` - Configured bot owner, if any
/// - `caller_id` - User who invoked the command
/// - `guild_id` - Guild the command was invoked in, `None` in direct messages
///
/// # Returns
/// - `Ok(GuildId)` - The caller is the owner and the command runs in a guild
/// - `Err(AppError::BadRequest)` - No owner is configured, the caller is someone else
///   or there is no guild
pub fn check_owner(
    owner_id: Option<u64>,
    caller_id: u64,
    guild_id: Option<GuildId>,
) -> Result<GuildId, AppError> {
    let Some(owner_id) = owner_id else {
        return Err(AppError::BadRequest(NO_OWNER.to_string()));
    };
    if caller_id != owner_id {
        return Err(AppError::BadRequest(NOT_OWNER.to_string()));
    }

    guild_id.ok_or_else(|| AppError::BadRequest(NO_GUILD.to_string()))
}
