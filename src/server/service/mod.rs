//! Service layer for command logic.
//!
//! Services sit between the bot's command handlers and the outside world:
//!
//! - **Backend client** (`stats_api`) - Fetches users and leaderboards from the game's
//!   statistics backend and converts them into domain models
//! - **User replies** (`user`) - Username validation and the plain-text `/user` summary
//! - **Leaderboard replies** (`leaderboard`) - The fixed-width `/leaderboards` table
//!
//! Everything that formats text is a pure function over domain models so it can be
//! tested without Discord or a network.

pub mod leaderboard;
pub mod stats_api;
pub mod user;

#[cfg(test)]
mod test;
