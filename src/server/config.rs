//! Environment configuration.
//!
//! Read once at startup and stored in [`AppState`](crate::server::state::AppState).
//! A `.env` file in the working directory is loaded first if present.

use std::path::PathBuf;

use crate::server::{
    error::{config::ConfigError, AppError},
    util::parse::{parse_u64_from_string, parse_u64_list},
};

const DEFAULT_ASSET_DIR: &str = "assets";
const DEFAULT_IMAGE_OUTPUT_DIR: &str = "image-outputs";

pub struct Config {
    pub discord_token: String,
    /// Base URL of the statistics backend without a trailing `/`.
    pub api_base_url: String,

    pub discord_guild_id: Option<u64>,
    pub discord_extra_guild_ids: Vec<u64>,
    pub discord_bot_owner_id: Option<u64>,

    pub asset_dir: PathBuf,
    pub image_output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_vars(|name| std::env::var(name).ok()).map_err(AppError::from)
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated the same as unset ones.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and all ids valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DISCORD_TOKEN` or `API_BASE_URL` is unset
    /// - `Err(ConfigError::InvalidEnvVar)` - A Discord id is not a valid integer
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let require =
            |name: &str| get(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let discord_guild_id = get("DISCORD_GUILD_ID")
            .map(|value| parse_u64_from_string("DISCORD_GUILD_ID", &value))
            .transpose()?;
        let discord_extra_guild_ids = get("DISCORD_EXTRA_GUILD_IDS")
            .map(|value| parse_u64_list("DISCORD_EXTRA_GUILD_IDS", &value))
            .transpose()?
            .unwrap_or_default();
        let discord_bot_owner_id = get("DISCORD_BOT_OWNER_ID")
            .map(|value| parse_u64_from_string("DISCORD_BOT_OWNER_ID", &value))
            .transpose()?;

        Ok(Self {
            discord_token: require("DISCORD_TOKEN")?,
            api_base_url: require("API_BASE_URL")?
                .trim()
                .trim_end_matches('/')
                .to_string(),
            discord_guild_id,
            discord_extra_guild_ids,
            discord_bot_owner_id,
            asset_dir: get("ASSET_DIR")
                .unwrap_or_else(|| DEFAULT_ASSET_DIR.to_string())
                .into(),
            image_output_dir: get("IMAGE_OUTPUT_DIR")
                .unwrap_or_else(|| DEFAULT_IMAGE_OUTPUT_DIR.to_string())
                .into(),
        })
    }

    /// Guilds to register slash commands in, primary guild first, without duplicates.
    ///
    /// An empty list means commands are registered globally.
    pub fn command_guild_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = Vec::new();
        for id in self
            .discord_guild_id
            .iter()
            .chain(&self.discord_extra_guild_ids)
        {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }

        ids
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_vars(|name| vars.get(name).cloned())
    }

    /// Tests a minimal configuration.
    ///
    /// Expected: defaults for optional values, trailing slash trimmed
    #[test]
    fn applies_defaults() {
        let config = config_from(&[
            ("DISCORD_TOKEN", "token"),
            ("API_BASE_URL", "https://api.example.com/"),
        ])
        .unwrap();

        assert_eq!(config.discord_token, "token");
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.discord_guild_id, None);
        assert!(config.discord_extra_guild_ids.is_empty());
        assert_eq!(config.discord_bot_owner_id, None);
        assert_eq!(config.asset_dir, PathBuf::from("assets"));
        assert_eq!(config.image_output_dir, PathBuf::from("image-outputs"));
        assert!(config.command_guild_ids().is_empty());
    }

    /// Tests a missing required variable.
    ///
    /// Expected: Err(ConfigError::MissingEnvVar) naming the variable
    #[test]
    fn requires_token() {
        let result = config_from(&[("API_BASE_URL", "https://api.example.com")]);

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(name)) if name == "DISCORD_TOKEN"));
    }

    /// Tests that an empty value counts as unset.
    ///
    /// Expected: Err(ConfigError::MissingEnvVar)
    #[test]
    fn treats_empty_value_as_missing() {
        let result = config_from(&[("DISCORD_TOKEN", "token"), ("API_BASE_URL", "  ")]);

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(name)) if name == "API_BASE_URL"));
    }

    /// Tests guild and owner ids.
    ///
    /// Expected: ids parsed, primary guild first and duplicates removed
    #[test]
    fn parses_discord_ids() {
        let config = config_from(&[
            ("DISCORD_TOKEN", "token"),
            ("API_BASE_URL", "https://api.example.com"),
            ("DISCORD_GUILD_ID", "100"),
            ("DISCORD_EXTRA_GUILD_IDS", "200, 100,300"),
            ("DISCORD_BOT_OWNER_ID", "42"),
        ])
        .unwrap();

        assert_eq!(config.discord_bot_owner_id, Some(42));
        assert_eq!(config.command_guild_ids(), vec![100, 200, 300]);
    }

    /// Tests an id that is not a number.
    ///
    /// Expected: Err(ConfigError::InvalidEnvVar)
    #[test]
    fn rejects_invalid_owner_id() {
        let result = config_from(&[
            ("DISCORD_TOKEN", "token"),
            ("API_BASE_URL", "https://api.example.com"),
            ("DISCORD_BOT_OWNER_ID", "me"),
        ]);

        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
    }
}
