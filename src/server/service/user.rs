//! `/user` command logic: username validation and the text summary.

use crate::server::{
    error::AppError,
    model::statistics::{PersonalBest, SingleplayerMode, StatisticsRecord},
    util::{
        date_format::format_short_join_date, level::level_of, number::add_commas,
        rank::classify_rank,
    },
};

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 20;

const INVALID_USERNAME: &str = "Error: Usernames may only be 3 to 20 characters long and may only contain alphanumeric characters and/or underscores.";

/// Checks a username before it is put into a backend URL.
///
/// # Returns
/// - `Ok(())` - 3 to 20 ASCII letters, digits or underscores
/// - `Err(AppError::BadRequest)` - Anything else, with the message shown to the user
pub fn validate_username(username: &str) -> Result<(), AppError> {
    let valid_length = (MIN_USERNAME_LENGTH..=MAX_USERNAME_LENGTH).contains(&username.len());
    let valid_chars = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid_length && valid_chars {
        Ok(())
    } else {
        Err(AppError::BadRequest(INVALID_USERNAME.to_string()))
    }
}

/// Error shown when the backend has no play data for `username`.
pub fn user_not_found(username: &str) -> AppError {
    AppError::NotFound(format!(
        "Error: Play data for user {} does not exist.\nThis is probably because there is no one with that username.",
        username
    ))
}

/// Formats the Markdown summary sent alongside the stat card.
///
/// ```text
/// Moderator **mathwiz** | **Play Data**
/// Level **42** (123,456EXP)
/// Joined **Sep. 2022**
/// EZ-SP: **1,234,567** (#3) | ST-SP: **N/A**
/// MP: **40.000%** (4/10)
/// ```
pub fn format_user_summary(record: &StatisticsRecord) -> String {
    let statistics = &record.statistics;
    let rank = classify_rank(&record.membership);
    let level = level_of(statistics.total_experience_points);

    let header = if rank.is_none() {
        format!("**{}** | **Play Data**", record.username)
    } else {
        format!("{} **{}** | **Play Data**", rank.title, record.username)
    };

    let multiplayer = &statistics.multiplayer;
    let multiplayer_line = match multiplayer.win_ratio() {
        Some(ratio) => format!(
            "MP: **{:.3}%** ({}/{})",
            ratio * 100.0,
            multiplayer.games_won.unwrap_or(0),
            multiplayer.games_played.unwrap_or(0)
        ),
        None => "MP: **N/A**".to_string(),
    };

    [
        header,
        format!(
            "Level **{}** ({}EXP)",
            add_commas(level.level),
            add_commas(statistics.total_experience_points.unwrap_or(0.0))
        ),
        format!(
            "Joined **{}**",
            format_short_join_date(&record.creation_date_and_time)
        ),
        format!(
            "EZ-SP: {} | ST-SP: {}",
            personal_best_summary(statistics.personal_best(SingleplayerMode::Easy)),
            personal_best_summary(statistics.personal_best(SingleplayerMode::Standard))
        ),
        multiplayer_line,
    ]
    .join("\n")
}

/// `**score** (#rank)`, or `**N/A**` for a mode that was never played.
fn personal_best_summary(best: &PersonalBest) -> String {
    match (best.score, best.global_rank) {
        (Some(score), Some(rank)) if rank > 0 => format!("**{}** (#{})", add_commas(score), rank),
        (Some(score), _) => format!("**{}**", add_commas(score)),
        (None, _) => "**N/A**".to_string(),
    }
}
