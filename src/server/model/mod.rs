//! Domain models for player statistics and leaderboards.
//!
//! Domain models are converted from backend DTOs at the service boundary and are the
//! only statistics types the command layer and the stat card renderer work with.

pub mod leaderboard;
pub mod statistics;

#[cfg(test)]
mod test;
