use crate::server::error::config::ConfigError;

/// Parses a Discord snowflake id read from the environment.
///
/// # Arguments
/// - `name` - Name of the environment variable the value came from
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(ConfigError::InvalidEnvVar)` - Failed to parse the string as a u64
pub fn parse_u64_from_string(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Parses a comma separated list of Discord ids, skipping empty entries.
///
/// # Arguments
/// - `name` - Name of the environment variable the value came from
/// - `value` - Comma separated ids, e.g. `"123, 456"`
///
/// # Returns
/// - `Ok(Vec<u64>)` - All parsed ids in input order
/// - `Err(ConfigError::InvalidEnvVar)` - At least one entry is not a valid u64
pub fn parse_u64_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(|entry| parse_u64_from_string(name, entry))
        .collect()
}
