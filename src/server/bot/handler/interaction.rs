//! Slash command dispatch.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, Interaction,
};

use crate::server::{
    bot::command::{broadcast, leaderboards, nickname, user},
    error::AppError,
    state::AppState,
};

/// Runs the command behind a slash command interaction.
///
/// Interactions other than slash commands are ignored. A failing command gets its
/// error reported back to the caller.
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    tracing::debug!("{} used /{}", command.user.name, command.data.name);

    let result = match command.data.name.as_str() {
        user::NAME => user::run(state, &ctx, &command).await,
        leaderboards::NAME => leaderboards::run(state, &ctx, &command).await,
        nickname::NAME => nickname::run(state, &ctx, &command).await,
        broadcast::NAME => broadcast::run(state, &ctx, &command).await,
        name => {
            tracing::error!("No command matching {} was found", name);
            return;
        }
    };

    if let Err(err) = result {
        reply_with_error(&ctx, &command, &err).await;
    }
}

/// Sends the user-facing form of `err` as an ephemeral reply.
///
/// Commands that already responded or deferred get a follow-up instead.
async fn reply_with_error(ctx: &Context, command: &CommandInteraction, err: &AppError) {
    let message = err.user_message();

    let response = CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(&message)
            .ephemeral(true),
    );
    if command.create_response(&ctx.http, response).await.is_ok() {
        return;
    }

    let followup = CreateInteractionResponseFollowup::new()
        .content(&message)
        .ephemeral(true);
    if let Err(e) = command.create_followup(&ctx.http, followup).await {
        tracing::error!(
            "Failed to report error for /{} to {}: {}",
            command.data.name,
            command.user.name,
            e
        );
    }
}
