//! Database repository layer for the silver ledger.
//!
//! Each repository wraps a reference to any SeaORM connection, so the same code runs
//! directly on the pool or inside a transaction opened by the service layer.
//! Repositories take and return domain models; Discord ids cross this boundary as
//! `u64` and are stored as `i64`.

pub mod account;
pub mod lootsplit;
pub mod transfer;
pub mod treasury;
pub mod treasury_log;

#[cfg(test)]
mod test;
