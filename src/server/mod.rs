//! Everything that runs inside the bot process.
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Serenity client, event handlers and slash commands
//! - **Service Layer** (`service/`) - Statistics backend client and reply formatting
//! - **Canvas** (`canvas/`) - Stat card rendering
//! - **Model Layer** (`model/`) - Domain models and DTO to domain conversion
//! - **Error Layer** (`error/`) - Application error types and Discord reply mapping
//! - **Util** (`util/`) - Leveling curve, rank classification and formatting helpers
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared state handed to the event handler
//! - **Startup** (`startup`) - Tracing, HTTP client, assets and output directory
//!
//! # Command Flow
//!
//! 1. **Bot** receives an interaction and dispatches it to a command
//! 2. **Command** validates its options and calls the service layer
//! 3. **Service** fetches backend JSON and converts it into a domain model
//! 4. **Canvas** renders the model into a PNG for `/user`
//! 5. **Command** replies and removes the transient PNG

pub mod bot;
pub mod canvas;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
