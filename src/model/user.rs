use serde::{Deserialize, Serialize};

/// Player document as returned by `GET /users/{username}`.
///
/// Every field is optional because the backend omits data for players that never
/// played a mode. Conversion into the typed domain record happens in
/// `StatisticsRecord::from_dto`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub creation_date_and_time: Option<String>,
    #[serde(default)]
    pub statistics: Option<StatisticsDto>,
    #[serde(default)]
    pub membership: Option<MembershipDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsDto {
    #[serde(default)]
    pub total_experience_points: Option<f64>,
    #[serde(default)]
    pub personal_best_score_on_easy_singleplayer_mode: Option<PersonalBestDto>,
    #[serde(default)]
    pub personal_best_score_on_standard_singleplayer_mode: Option<PersonalBestDto>,
    #[serde(default)]
    pub multiplayer: Option<MultiplayerDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalBestDto {
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub time_in_milliseconds: Option<f64>,
    #[serde(default)]
    pub actions_performed: Option<f64>,
    #[serde(default)]
    pub enemies_killed: Option<f64>,
    #[serde(default)]
    pub enemies_created: Option<f64>,
    #[serde(default)]
    pub global_rank: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplayerDto {
    #[serde(default)]
    pub games_played: Option<f64>,
    #[serde(default)]
    pub games_won: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipDto {
    #[serde(default)]
    pub is_developer: Option<bool>,
    #[serde(default)]
    pub is_administrator: Option<bool>,
    #[serde(default)]
    pub is_moderator: Option<bool>,
    #[serde(default)]
    pub is_contributor: Option<bool>,
    #[serde(default)]
    pub is_tester: Option<bool>,
    #[serde(default)]
    pub is_donator: Option<bool>,
}
