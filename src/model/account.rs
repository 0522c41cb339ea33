//! Account domain models and parameters.

use crate::{error::AppError, util::parse::from_db_id};

/// A member's wallet within one guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Guild the wallet belongs to.
    pub guild_id: u64,
    /// Discord ID of the member.
    pub user_id: u64,
    /// Current silver balance, never negative.
    pub wallet: i64,
}

impl Account {
    /// Converts an entity model to an account domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Account)` - The converted account
    /// - `Err(AppError::InternalErr(StoredIdNegative))` - A stored id is negative
    pub fn from_entity(entity: entity::account::Model) -> Result<Self, AppError> {
        Ok(Self {
            guild_id: from_db_id(entity.guild_id)?,
            user_id: from_db_id(entity.user_id)?,
            wallet: entity.wallet,
        })
    }
}

/// Parameters for an admin adjusting a member's wallet.
#[derive(Debug, Clone)]
pub struct AdjustBalanceParams {
    pub guild_id: u64,
    /// Member whose wallet changes.
    pub user_id: u64,
    /// Amount to add or remove, must be positive.
    pub amount: i64,
}

/// Parameters for a member-to-member transfer.
#[derive(Debug, Clone)]
pub struct TransferParams {
    pub guild_id: u64,
    pub sender_id: u64,
    pub receiver_id: u64,
    /// Amount moved, must be positive.
    pub amount: i64,
}
