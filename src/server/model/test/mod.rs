use crate::{
    model::{leaderboard::LeaderboardEntryDto, user::UserDto},
    server::{
        error::AppError,
        model::{
            leaderboard::LeaderboardEntry,
            statistics::{SingleplayerMode, StatisticsRecord},
        },
    },
};
use chrono::{DateTime, TimeZone, Utc};
use test_utils::factory::{
    leaderboard::entry_json,
    user::{PersonalBestJson, UserJsonFactory},
};

mod multiplayer;

/// Deserializes a factory-built document and converts it into a record.
fn record_from(json: serde_json::Value) -> Result<StatisticsRecord, AppError> {
    let dto: UserDto = serde_json::from_value(json)?;
    StatisticsRecord::from_dto(dto)
}
