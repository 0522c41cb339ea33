//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating ledger rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let account = factory::account::create_account(&db, 1).await?;
//!
//!     // Customize via the builder
//!     let rich = factory::account::AccountFactory::new(&db, 1)
//!         .user_id(42)
//!         .wallet(1_000)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `account` - Member wallets
//! - `treasury` - Guild treasury rows
//! - `lootsplit_log` - Lootsplit log rows, optionally with recipient rows
//! - `transfer_log` - Transfer log rows
//! - `treasury_log` - Treasury log rows
//! - `helpers` - Unique id generation

pub mod account;
pub mod helpers;
pub mod lootsplit_log;
pub mod transfer_log;
pub mod treasury;
pub mod treasury_log;

pub use account::{create_account, create_account_with_wallet};
pub use lootsplit_log::create_lootsplit_log;
pub use transfer_log::create_transfer_log;
pub use treasury::create_treasury;
pub use treasury_log::create_treasury_log;
