//! Wire DTOs for the game statistics backend.
//!
//! These types mirror the backend's JSON loosely: everything is optional and every
//! number is an `f64`. They never leave the service layer; `server::model` converts
//! them into strongly typed records.

pub mod leaderboard;
pub mod user;
