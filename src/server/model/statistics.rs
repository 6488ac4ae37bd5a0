//! Player statistics domain model.
//!
//! `StatisticsRecord` is the validated, strongly typed form of a backend user
//! document. It is what the stat card renderer and the `/user` text reply consume;
//! neither ever looks at raw JSON.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{MembershipDto, MultiplayerDto, PersonalBestDto, UserDto},
    server::error::AppError,
};

/// Player statistics record, immutable for the duration of a render.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsRecord {
    pub username: String,
    pub creation_date_and_time: DateTime<Utc>,
    pub membership: Membership,
    pub statistics: Statistics,
}

/// Membership flags used to derive the presentation rank.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Membership {
    pub is_developer: bool,
    pub is_administrator: bool,
    pub is_moderator: bool,
    pub is_contributor: bool,
    pub is_tester: bool,
    pub is_donator: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    pub total_experience_points: Option<f64>,
    pub easy: PersonalBest,
    pub standard: PersonalBest,
    pub multiplayer: Multiplayer,
}

/// Personal best run for one singleplayer mode.
///
/// `score` is `None` when the player never finished a run in this mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalBest {
    pub score: Option<u64>,
    pub time_in_milliseconds: f64,
    pub actions_performed: u64,
    pub enemies_killed: u64,
    pub enemies_created: u64,
    pub global_rank: Option<u32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Multiplayer {
    pub games_played: Option<u64>,
    pub games_won: Option<u64>,
}

/// Singleplayer difficulty, selecting one of the two personal bests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SingleplayerMode {
    Easy,
    Standard,
}

impl SingleplayerMode {
    /// Parses the mode name used by the backend's leaderboard routes.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "easy" => Some(Self::Easy),
            "standard" => Some(Self::Standard),
            _ => None,
        }
    }

    /// Lower-case name used in backend URLs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Standard => "standard",
        }
    }

    /// Panel heading shown on the stat card.
    pub fn title(self) -> &'static str {
        match self {
            Self::Easy => "Easy Singleplayer",
            Self::Standard => "Standard Singleplayer",
        }
    }
}

impl Statistics {
    pub fn personal_best(&self, mode: SingleplayerMode) -> &PersonalBest {
        match mode {
            SingleplayerMode::Easy => &self.easy,
            SingleplayerMode::Standard => &self.standard,
        }
    }
}

impl Multiplayer {
    /// Fraction of games won, `None` if the player never played.
    pub fn win_ratio(&self) -> Option<f64> {
        match self.games_played {
            Some(played) if played > 0 => {
                Some(self.games_won.unwrap_or(0) as f64 / played as f64)
            }
            _ => None,
        }
    }
}

impl PersonalBest {
    /// Actions per minute over the personal best run.
    ///
    /// Returns `0.0` for a run without recorded duration instead of dividing by zero.
    pub fn actions_per_minute(&self) -> f64 {
        if self.time_in_milliseconds > 0.0 {
            self.actions_performed as f64 / self.time_in_milliseconds * 60_000.0
        } else {
            0.0
        }
    }

    fn from_dto(dto: Option<PersonalBestDto>) -> Self {
        let dto = dto.unwrap_or_default();

        Self {
            score: dto.score.and_then(to_count),
            time_in_milliseconds: dto
                .time_in_milliseconds
                .filter(|ms| ms.is_finite())
                .unwrap_or(0.0),
            actions_performed: dto.actions_performed.and_then(to_count).unwrap_or(0),
            enemies_killed: dto.enemies_killed.and_then(to_count).unwrap_or(0),
            enemies_created: dto.enemies_created.and_then(to_count).unwrap_or(0),
            global_rank: dto
                .global_rank
                .and_then(to_count)
                .and_then(|rank| u32::try_from(rank).ok()),
        }
    }
}

impl Membership {
    fn from_dto(dto: Option<MembershipDto>) -> Self {
        let dto = dto.unwrap_or_default();

        Self {
            is_developer: dto.is_developer.unwrap_or(false),
            is_administrator: dto.is_administrator.unwrap_or(false),
            is_moderator: dto.is_moderator.unwrap_or(false),
            is_contributor: dto.is_contributor.unwrap_or(false),
            is_tester: dto.is_tester.unwrap_or(false),
            is_donator: dto.is_donator.unwrap_or(false),
        }
    }
}

impl Multiplayer {
    fn from_dto(dto: Option<MultiplayerDto>) -> Self {
        let dto = dto.unwrap_or_default();

        Self {
            games_played: dto.games_played.and_then(to_count),
            games_won: dto.games_won.and_then(to_count),
        }
    }
}

impl StatisticsRecord {
    /// Converts a backend user document into a statistics record at the service boundary.
    ///
    /// Missing numeric fields are tolerated: absent scores stay absent so the card can
    /// show a never-played placeholder, while counters default to zero. A missing or
    /// malformed creation date falls back to the Unix epoch.
    ///
    /// # Arguments
    /// - `dto` - The deserialized backend document
    ///
    /// # Returns
    /// - `Ok(StatisticsRecord)` - The converted record
    /// - `Err(AppError::BadRequest)` - The document has no username
    pub fn from_dto(dto: UserDto) -> Result<Self, AppError> {
        let username = dto
            .username
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                AppError::BadRequest(
                    "The statistics backend returned a user without a name.".to_string(),
                )
            })?;

        let creation_date_and_time = match dto.creation_date_and_time.as_deref() {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map(|date| date.with_timezone(&Utc))
                .unwrap_or_else(|e| {
                    tracing::warn!("Invalid creation date '{}' for {}: {}", raw, username, e);
                    DateTime::<Utc>::UNIX_EPOCH
                }),
            None => {
                tracing::warn!("No creation date for {}", username);
                DateTime::<Utc>::UNIX_EPOCH
            }
        };

        let statistics = dto.statistics.unwrap_or_default();

        Ok(Self {
            username,
            creation_date_and_time,
            membership: Membership::from_dto(dto.membership),
            statistics: Statistics {
                total_experience_points: statistics
                    .total_experience_points
                    .filter(|xp| xp.is_finite()),
                easy: PersonalBest::from_dto(
                    statistics.personal_best_score_on_easy_singleplayer_mode,
                ),
                standard: PersonalBest::from_dto(
                    statistics.personal_best_score_on_standard_singleplayer_mode,
                ),
                multiplayer: Multiplayer::from_dto(statistics.multiplayer),
            },
        })
    }
}

/// Converts a JSON number into a non-negative integer count.
///
/// Non-finite and negative values are treated as absent.
pub(crate) fn to_count(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0).then(|| value.round() as u64)
}
