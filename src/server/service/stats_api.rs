use reqwest::StatusCode;

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

/// Body the backend sends instead of a user document for unknown usernames.
const NOT_FOUND_BODY: &str = "Not Found.";

/// Client for the game's statistics backend.
pub struct StatsApiService<'a> {
    http_client: &'a reqwest::Client,
    base_url: &'a str,
}

impl<'a> StatsApiService<'a> {
    pub fn new(http_client: &'a reqwest::Client, base_url: &'a str) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Fetches a player's statistics.
    ///
    /// # Arguments
    /// - `username` - An already validated username
    ///
    /// # Returns
    /// - `Ok(Some(StatisticsRecord))` - The player exists
    /// - `Ok(None)` - The backend has no play data for this username, either by body
    ///   or by a `404` status
    /// - `Err(AppError::ReqwestErr)` - The backend is unreachable or answered with an
    ///   error status other than `404`
    /// - `Err(AppError::JsonErr)` - The body is not a user document
    pub async fn fetch_user(&self, username: &str) -> Result<Option<StatisticsRecord>, AppError> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::debug!("Fetching user data from {}", url);

        let (status, body) = self.get_text(&url, true).await?;

        match parse_user_response(&body) {
            Err(AppError::JsonErr(e)) if status == StatusCode::NOT_FOUND => {
                tracing::debug!("{} answered 404 with a non-JSON body: {}", url, e);
                Ok(None)
            }
            result => result,
        }
    }

    /// Fetches the leaderboard of a singleplayer mode in rank order.
    pub async fn fetch_leaderboard(
        &self,
        mode: SingleplayerMode,
    ) -> Result<Vec<LeaderboardEntry>, AppError> {
        let url = format!("{}/leaderboards/{}", self.base_url, mode.name());
        tracing::debug!("Fetching leaderboard from {}", url);

        let (_, body) = self.get_text(&url, false).await?;

        parse_leaderboard_response(&body)
    }

    /// Sends a GET request and reads the body.
    ///
    /// Error statuses fail the request, except `404 Not Found` when `allow_not_found`
    /// is set. The backend answers unknown users with a 404 whose body says so.
    async fn get_text(
        &self,
        url: &str,
        allow_not_found: bool,
    ) -> Result<(StatusCode, String), AppError> {
        let response = self.http_client.get(url).send().await?;
        let status = response.status();

        let response = if allow_not_found && status == StatusCode::NOT_FOUND {
            response
        } else {
            response.error_for_status()?
        };

        Ok((status, response.text().await?))
    }
}

/// Parses the body of `GET /users/{username}`.
///
/// An empty body, JSON `null` and the string `"Not Found."` all mean the user does
/// not exist.
///
/// # Returns
/// - `Ok(Some(StatisticsRecord))` - A user document was converted
/// - `Ok(None)` - The user does not exist
/// - `Err(AppError::JsonErr)` - The body is neither a user document nor a not-found marker
/// - `Err(AppError::BadRequest)` - The document has no username
pub fn parse_user_response(body: &str) -> Result<Option<StatisticsRecord>, AppError> {
    let body = body.trim();
    if body.is_empty() {
        return Ok(None);
    }

    let value: serde_json::Value = serde_json::from_str(body)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(message) if message == NOT_FOUND_BODY => Ok(None),
        value => {
            let dto: UserDto = serde_json::from_value(value)?;
            StatisticsRecord::from_dto(dto).map(Some)
        }
    }
}

/// Parses the body of `GET /leaderboards/{mode}`.
///
/// Rows without a username are skipped with a warning.
pub fn parse_leaderboard_response(body: &str) -> Result<Vec<LeaderboardEntry>, AppError> {
    let rows: Vec<LeaderboardEntryDto> = serde_json::from_str(body)?;
    let total = rows.len();

    let entries: Vec<LeaderboardEntry> = rows
        .into_iter()
        .filter_map(LeaderboardEntry::from_dto)
        .collect();

    if entries.len() < total {
        tracing::warn!(
            "Skipped {} malformed leaderboard rows",
            total - entries.len()
        );
    }

    Ok(entries)
}
