//! Stat card rendering.
//!
//! Turns a validated [`StatisticsRecord`](crate::server::model::statistics::StatisticsRecord)
//! into a 1080x1080 PNG. The layering goes from generic to specific:
//!
//! - **Surface** (`surface`) - The drawing operations a card needs and the raster
//!   implementation backed by `image` and `imageproc`
//! - **Assets** (`assets`) - Font and avatar registered once at startup
//! - **Layout** (`layout`) - Background, labeled boxes, aligned text, badges and the footer
//! - **Sections** (`section`) - The singleplayer and multiplayer panels
//! - **User card** (`user`) - Draws every section in order, encodes and writes the PNG
//!
//! Drawing is synchronous and owns its surface exclusively; only reading the avatar
//! and writing the output file suspend.

pub mod assets;
pub mod layout;
pub mod section;
pub mod surface;
pub mod user;

#[cfg(test)]
mod test;
