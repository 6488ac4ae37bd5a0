//! `/leaderboards` - the leaderboard of a singleplayer mode.

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    EditInteractionResponse,
};

use crate::server::{
    bot::command::string_option,
    error::AppError,
    model::statistics::SingleplayerMode,
    service::{
        leaderboard::{format_leaderboard, parse_mode},
        stats_api::StatsApiService,
    },
    state::AppState,
};

pub const NAME: &str = "leaderboards";

pub fn register() -> CreateCommand {
    let mut mode = CreateCommandOption::new(
        CommandOptionType::String,
        "mode",
        "The mode to get data of.",
    )
    .required(true);
    for choice in [SingleplayerMode::Easy, SingleplayerMode::Standard] {
        mode = mode.add_string_choice(choice.name(), choice.name());
    }

    CreateCommand::new(NAME)
        .description("Shows the leaderboards for a Singleplayer mode.")
        .add_option(mode)
}

pub async fn run(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let mode = parse_mode(string_option(command, "mode")?)?;

    command.defer(&ctx.http).await?;

    let stats_api = StatsApiService::new(&state.http_client, &state.config.api_base_url);
    let entries = stats_api.fetch_leaderboard(mode).await?;

    command
        .edit_response(
            &ctx.http,
            EditInteractionResponse::new().content(format_leaderboard(&entries)),
        )
        .await?;

    Ok(())
}
