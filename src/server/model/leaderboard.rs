use crate::{model::leaderboard::LeaderboardEntryDto, server::model::statistics::to_count};

/// A single leaderboard row in backend order.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: u64,
}

impl LeaderboardEntry {
    /// Converts a backend leaderboard row.
    ///
    /// Rows without a username are dropped; a missing score is shown as zero.
    ///
    /// # Returns
    /// - `Some(LeaderboardEntry)` - Converted row
    /// - `None` - Row had no username
    pub fn from_dto(dto: LeaderboardEntryDto) -> Option<Self> {
        let username = dto.username.filter(|name| !name.is_empty())?;
        let score = dto
            .statistics
            .and_then(|statistics| statistics.score)
            .and_then(to_count)
            .unwrap_or(0);

        Some(Self { username, score })
    }
}
