//! Stats Bot Test Utils
//!
//! Provides shared testing utilities for the statistics bot. The game backend is
//! never contacted in tests; instead this crate builds the JSON documents the backend
//! would return so the parsing and rendering layers can be exercised end to end.
//!
//! # Overview
//!
//! - **UserJsonFactory**: Fluent builder for `GET /users/{username}` documents
//! - **PersonalBestJson**: Builder for a single singleplayer personal best
//! - **leaderboard**: Helpers for `GET /leaderboards/{mode}` arrays
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::factory::user::{PersonalBestJson, UserJsonFactory};
//!
//! let json = UserJsonFactory::new()
//!     .username("mathwiz")
//!     .easy_best(PersonalBestJson::new().score(1_234_567.0).global_rank(3.0))
//!     .build();
//! ```

pub mod factory;
