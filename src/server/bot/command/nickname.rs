//! `/nickname` - sets the bot's nickname in the current guild. Owner only.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::server::{
    bot::command::{check_owner, string_option},
    error::AppError,
    state::AppState,
};

pub const NAME: &str = "nickname";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Sets the nickname of the bot. Must be the bot's owner to use.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "nickname",
                "The nickname to set the bot to.",
            )
            .required(true)
            .min_length(3)
            .max_length(32),
        )
}

pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let guild_id = check_owner(
        state.config.discord_bot_owner_id,
        command.user.id.get(),
        command.guild_id,
    )?;
    let nickname = string_option(command, "nickname")?;

    guild_id.edit_nickname(&ctx.http, Some(nickname)).await?;
    tracing::info!("Set nickname to {} in guild {}", nickname, guild_id);

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content(format!(
                    "Successfully set the bot's nickname to `{}`!",
                    nickname
                )),
            ),
        )
        .await?;

    Ok(())
}
