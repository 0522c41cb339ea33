//! Business rules of the silver economy.
//!
//! Services validate command input, run multi-step money movements inside a single
//! database transaction and hand domain models back to the bot layer.

pub mod account;
pub mod history;
pub mod leaderboard;
pub mod lootsplit;
pub mod treasury;
