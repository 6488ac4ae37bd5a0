//! User document factory.
//!
//! Builds `GET /users/{username}` response bodies with sensible defaults: a fresh
//! player with no experience, no personal bests, no multiplayer games and no rank.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Map, Value};

use crate::factory::helpers::next_id;

/// Builder for one singleplayer personal best object.
///
/// Fields left unset are omitted from the JSON entirely, matching what the backend
/// sends for modes a player never finished.
#[derive(Debug, Clone, Default)]
pub struct PersonalBestJson {
    fields: Map<String, Value>,
}

impl PersonalBestJson {
    /// Creates an empty personal best object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a complete personal best with plausible values for every field.
    ///
    /// # Arguments
    /// - `score` - The personal best score
    ///
    /// # Returns
    /// - `Self` - Builder with score, time, actions and enemy counts set
    pub fn played(score: f64) -> Self {
        Self::new()
            .score(score)
            .time_in_milliseconds(65_432.0)
            .actions_performed(120.0)
            .enemies_killed(42.0)
            .enemies_created(50.0)
    }

    pub fn score(self, score: f64) -> Self {
        self.set("score", json!(score))
    }

    /// Sets `score` to JSON `null`.
    pub fn null_score(self) -> Self {
        self.set("score", Value::Null)
    }

    pub fn time_in_milliseconds(self, ms: f64) -> Self {
        self.set("timeInMilliseconds", json!(ms))
    }

    pub fn actions_performed(self, actions: f64) -> Self {
        self.set("actionsPerformed", json!(actions))
    }

    pub fn enemies_killed(self, killed: f64) -> Self {
        self.set("enemiesKilled", json!(killed))
    }

    pub fn enemies_created(self, created: f64) -> Self {
        self.set("enemiesCreated", json!(created))
    }

    pub fn global_rank(self, rank: f64) -> Self {
        self.set("globalRank", json!(rank))
    }

    /// Builds the JSON object.
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }

    fn set(mut self, key: &str, value: Value) -> Self {
        self.fields.insert(key.to_string(), value);
        self
    }
}

/// Factory for backend user documents with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserJsonFactory;
///
/// let json = UserJsonFactory::new()
///     .username("mathwiz")
///     .experience(12_345.0)
///     .membership_flag("isDeveloper")
///     .multiplayer(10.0, 4.0)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct UserJsonFactory {
    username: String,
    created_at: DateTime<Utc>,
    experience: Option<f64>,
    easy: Option<PersonalBestJson>,
    standard: Option<PersonalBestJson>,
    multiplayer: Option<(f64, f64)>,
    membership_flags: Vec<String>,
}

impl UserJsonFactory {
    /// Creates a new UserJsonFactory with default values.
    ///
    /// Defaults:
    /// - username: `"player_{id}"` where id is auto-incremented
    /// - creationDateAndTime: `2023-03-14T08:00:00Z`
    /// - no experience, personal bests, multiplayer games or membership flags
    pub fn new() -> Self {
        Self {
            username: format!("player_{}", next_id()),
            created_at: Utc
                .with_ymd_and_hms(2023, 3, 14, 8, 0, 0)
                .single()
                .unwrap_or_default(),
            experience: None,
            easy: None,
            standard: None,
            multiplayer: None,
            membership_flags: Vec::new(),
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn experience(mut self, experience: f64) -> Self {
        self.experience = Some(experience);
        self
    }

    pub fn easy_best(mut self, best: PersonalBestJson) -> Self {
        self.easy = Some(best);
        self
    }

    pub fn standard_best(mut self, best: PersonalBestJson) -> Self {
        self.standard = Some(best);
        self
    }

    /// Sets multiplayer games played and won.
    pub fn multiplayer(mut self, games_played: f64, games_won: f64) -> Self {
        self.multiplayer = Some((games_played, games_won));
        self
    }

    /// Sets a membership flag such as `"isDeveloper"` to `true`.
    pub fn membership_flag(mut self, flag: impl Into<String>) -> Self {
        self.membership_flags.push(flag.into());
        self
    }

    /// Builds the user document.
    pub fn build(self) -> Value {
        let mut statistics = Map::new();
        if let Some(experience) = self.experience {
            statistics.insert("totalExperiencePoints".to_string(), json!(experience));
        }
        if let Some(easy) = self.easy {
            statistics.insert(
                "personalBestScoreOnEasySingleplayerMode".to_string(),
                easy.build(),
            );
        }
        if let Some(standard) = self.standard {
            statistics.insert(
                "personalBestScoreOnStandardSingleplayerMode".to_string(),
                standard.build(),
            );
        }
        if let Some((played, won)) = self.multiplayer {
            statistics.insert(
                "multiplayer".to_string(),
                json!({ "gamesPlayed": played, "gamesWon": won }),
            );
        }

        let membership: Map<String, Value> = self
            .membership_flags
            .into_iter()
            .map(|flag| (flag, Value::Bool(true)))
            .collect();

        json!({
            "username": self.username,
            "creationDateAndTime": self.created_at.to_rfc3339(),
            "statistics": statistics,
            "membership": membership,
        })
    }
}

impl Default for UserJsonFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a user document with default values for the given username.
///
/// Shorthand for `UserJsonFactory::new().username(username).build()`.
pub fn user_json(username: &str) -> Value {
    UserJsonFactory::new().username(username).build()
}
