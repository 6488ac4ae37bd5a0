//! Error types and Discord reply mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors, and
//! `AppError::user_message` decides what a Discord user gets to see when a command
//! fails.

pub mod config;
pub mod render;

use thiserror::Error;

use crate::server::error::{config::ConfigError, render::RenderError};

/// Reply shown for any failure that is not the user's fault.
pub const GENERIC_COMMAND_ERROR: &str = "There was an error while executing this command!";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion so command handlers can use `?` freely.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Stat card rendering failed.
    ///
    /// No partial card is ever produced; the whole render is discarded.
    #[error(transparent)]
    RenderErr(#[from] RenderError),

    /// HTTP client request error from reqwest.
    ///
    /// Occurs when the statistics backend is unreachable or answers with an error status.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// The statistics backend answered with JSON we could not interpret.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Filesystem error outside of rendering, e.g. preparing the output directory.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// The message is shown to the user as-is.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// The message is shown to the user as-is.
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into the message shown to the Discord user.
    ///
    /// `NotFound` and `BadRequest` carry a user-facing message. Everything else is
    /// logged with full details and replaced by a generic message to avoid leaking
    /// backend or filesystem details into chat.
    ///
    /// # Returns
    /// - `String` - Message suitable for an interaction reply
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            err => {
                tracing::error!("{}", err);
                GENERIC_COMMAND_ERROR.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that user-facing variants keep their message.
    ///
    /// Expected: the original message for NotFound and BadRequest
    #[test]
    fn user_facing_errors_keep_message() {
        assert_eq!(
            AppError::NotFound("no such user".to_string()).user_message(),
            "no such user"
        );
        assert_eq!(
            AppError::BadRequest("bad mode".to_string()).user_message(),
            "bad mode"
        );
    }

    /// Tests that internal errors are hidden behind a generic message.
    ///
    /// Expected: the generic command error text
    #[test]
    fn internal_errors_are_generic() {
        let err = AppError::from(ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()));
        assert_eq!(err.user_message(), GENERIC_COMMAND_ERROR);

        let err = AppError::from(std::io::Error::other("disk full"));
        assert_eq!(err.user_message(), GENERIC_COMMAND_ERROR);
    }
}
