//! `/broadcast` - makes the bot say a message in the current channel. Owner only.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::server::{
    bot::command::{check_owner, string_option},
    error::AppError,
    state::AppState,
};

pub const NAME: &str = "broadcast";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Makes the bot say a message. Must be the bot's owner to use.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "message",
                "The message for the bot to say.",
            )
            .required(true),
        )
}

pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    check_owner(
        state.config.discord_bot_owner_id,
        command.user.id.get(),
        command.guild_id,
    )?;
    let message = string_option(command, "message")?;

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content("Sent message!")
                    .ephemeral(true),
            ),
        )
        .await?;

    command.channel_id.say(&ctx.http, message).await?;

    Ok(())
}
