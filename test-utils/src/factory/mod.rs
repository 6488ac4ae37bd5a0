//! Factories for backend JSON payloads.

pub mod helpers;
pub mod leaderboard;
pub mod user;
