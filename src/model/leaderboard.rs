use serde::{Deserialize, Serialize};

/// One row of `GET /leaderboards/{mode}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntryDto {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub statistics: Option<LeaderboardStatisticsDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardStatisticsDto {
    #[serde(default)]
    pub score: Option<f64>,
}
