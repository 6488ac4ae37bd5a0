//! `/user` - a player's statistics as a stat card and a text summary.

use chrono::Utc;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateAttachment, CreateCommand,
    CreateCommandOption, EditInteractionResponse,
};

use crate::server::{
    bot::command::string_option,
    canvas::user::render_user_statistics_card,
    error::AppError,
    service::{
        stats_api::StatsApiService,
        user::{
            format_user_summary, user_not_found, validate_username, MAX_USERNAME_LENGTH,
            MIN_USERNAME_LENGTH,
        },
    },
    state::AppState,
};

pub const NAME: &str = "user";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Gets a user's information.")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "username",
                "The user to get data of.",
            )
            .required(true)
            .min_length(MIN_USERNAME_LENGTH as u16)
            .max_length(MAX_USERNAME_LENGTH as u16),
        )
}

/// Fetches the player, renders the stat card and replies with both.
///
/// The reply is deferred before the backend request since fetching and rendering
/// can take longer than Discord's initial response window. The PNG is deleted once
/// the reply was sent, whether sending succeeded or not.
pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let username = string_option(command, "username")?;
    validate_username(username)?;

    command.defer(&ctx.http).await?;

    let stats_api = StatsApiService::new(&state.http_client, &state.config.api_base_url);
    let record = stats_api
        .fetch_user(username)
        .await?
        .ok_or_else(|| user_not_found(username))?;

    let file_path = render_user_statistics_card(
        &state.card_assets,
        &state.config.image_output_dir,
        &record,
        Utc::now(),
    )
    .await?;

    let sent = send_card(ctx, command, &format_user_summary(&record), &file_path).await;

    if let Err(e) = tokio::fs::remove_file(&file_path).await {
        tracing::warn!("Failed to delete {}: {}", file_path.display(), e);
    }

    sent
}

async fn send_card(
    ctx: &Context,
    command: &CommandInteraction,
    summary: &str,
    file_path: &std::path::Path,
) -> Result<(), AppError> {
    let attachment = CreateAttachment::path(file_path).await?;
    command
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new()
                .content(summary)
                .new_attachment(attachment),
        )
        .await?;

    Ok(())
}
