//! SeaORM entity definitions for the silver ledger.
//!
//! Table names match the schema created by the `migration` crate. Discord
//! snowflakes are stored as `i64`.

pub mod prelude;

pub mod account;
pub mod lootsplit_log;
pub mod lootsplit_recipient;
pub mod transfer_log;
pub mod treasury;
pub mod treasury_log;
