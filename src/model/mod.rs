//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and carry
//! Discord ids as `u64`. Parameter types describe a single service operation.

pub mod account;
pub mod leaderboard;
pub mod lootsplit;
pub mod pagination;
pub mod transfer;
pub mod treasury;
