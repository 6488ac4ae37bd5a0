//! Discord bot integration.
//!
//! The bot answers the slash commands defined in `command/`. Event handlers in
//! `handler/` register those commands once connected and dispatch incoming
//! interactions to them.
//!
//! # Gateway Intents
//!
//! Only `GUILDS` is requested. Slash command interactions are delivered regardless
//! of intents and no privileged intent is needed.

pub mod command;
pub mod handler;
pub mod start;
