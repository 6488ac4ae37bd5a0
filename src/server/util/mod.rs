//! Small pure helpers shared by the command layer and the stat card renderer.

pub mod date_format;
pub mod level;
pub mod number;
pub mod parse;
pub mod rank;
pub mod time_format;
