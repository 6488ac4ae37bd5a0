//! `/leaderboards` command logic.

use crate::server::{
    error::AppError, model::leaderboard::LeaderboardEntry,
    model::statistics::SingleplayerMode, util::number::add_commas,
};

pub const EMPTY_LEADERBOARD: &str = "There is currently no one on the leaderboards.";

/// Parses the `mode` option of `/leaderboards`.
///
/// # Returns
/// - `Ok(SingleplayerMode)` - `easy` or `standard`
/// - `Err(AppError::BadRequest)` - Any other value
pub fn parse_mode(mode: &str) -> Result<SingleplayerMode, AppError> {
    SingleplayerMode::from_name(mode).ok_or_else(|| {
        AppError::BadRequest("Error: Mode can only be `easy` or `standard`.".to_string())
    })
}

/// Formats leaderboard rows as a fixed-width ANSI code block.
///
/// Ranks are right-aligned to the widest rank, usernames are padded to the longest
/// username and scores are right-aligned with thousands separators:
///
/// ```text
///  #9 alice   12,345
/// #10 bob        678
/// ```
///
/// # Returns
/// - `String` - The code block, or the empty leaderboard message without rows
pub fn format_leaderboard(entries: &[LeaderboardEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_LEADERBOARD.to_string();
    }

    let scores: Vec<String> = entries.iter().map(|e| add_commas(e.score)).collect();
    let rank_width = format!("#{}", entries.len()).len();
    let username_width = entries
        .iter()
        .map(|e| e.username.chars().count())
        .max()
        .unwrap_or(0);
    let score_width = scores.iter().map(String::len).max().unwrap_or(0);

    let mut block = String::from("```ansi\n");
    for (i, (entry, score)) in entries.iter().zip(&scores).enumerate() {
        let rank = format!("#{}", i + 1);
        block.push_str(&format!(
            "{:>rank_width$} {:<username_width$} {:>score_width$}\n",
            rank, entry.username, score
        ));
    }
    block.push_str("```");

    block
}
