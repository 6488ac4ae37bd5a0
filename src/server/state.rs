//! State shared by every event handler.
//!
//! Initialized once in `main` and cloned into the bot's event handler. All fields
//! are cheap to clone: `reqwest::Client` is reference counted internally and the
//! rest sit behind an `Arc`.

use std::sync::Arc;

use crate::server::{canvas::assets::CardAssets, config::Config};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    /// HTTP client for the statistics backend.
    ///
    /// Configured without redirect following, see `startup::setup_reqwest_client`.
    pub http_client: reqwest::Client,

    /// Font and avatar used by every stat card render.
    pub card_assets: Arc<CardAssets>,
}

impl AppState {
    pub fn new(config: Config, http_client: reqwest::Client, card_assets: CardAssets) -> Self {
        Self {
            config: Arc::new(config),
            http_client,
            card_assets: Arc::new(card_assets),
        }
    }
}
