//! Leaderboard document factory.

use serde_json::{json, Value};

/// Builds one leaderboard row.
pub fn entry_json(username: &str, score: f64) -> Value {
    json!({
        "username": username,
        "statistics": { "score": score },
    })
}

/// Builds a leaderboard array from `(username, score)` pairs in rank order.
///
/// # Example
///
/// ```rust,ignore
/// let body = leaderboard_json(&[("alice", 9000.0), ("bob", 120.0)]).to_string();
/// ```
pub fn leaderboard_json(entries: &[(&str, f64)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(username, score)| entry_json(username, *score))
            .collect(),
    )
}
