//! Account factory for creating member wallets.

use crate::factory::helpers::next_snowflake;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test accounts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::account::AccountFactory;
///
/// let account = AccountFactory::new(&db, guild_id)
///     .user_id(123456789)
///     .wallet(500)
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    wallet: i64,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - user_id: unique generated snowflake
    /// - wallet: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `guild_id` - Guild the account belongs to
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        Self {
            db,
            guild_id,
            user_id: next_snowflake(),
            wallet: 0,
        }
    }

    /// Sets the member id of the account.
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the starting wallet balance.
    pub fn wallet(mut self, wallet: i64) -> Self {
        self.wallet = wallet;
        self
    }

    /// Builds and inserts the account into the database.
    ///
    /// # Returns
    /// - `Ok(entity::account::Model)` - Created account
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        entity::account::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            wallet: ActiveValue::Set(self.wallet),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty account for a fresh member in `guild_id`.
pub async fn create_account(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db, guild_id).build().await
}

/// Creates an account for a specific member with a starting balance.
///
/// # Example
///
/// ```rust,ignore
/// let account = create_account_with_wallet(&db, guild_id, 42, 1_000).await?;
/// ```
pub async fn create_account_with_wallet(
    db: &DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    wallet: i64,
) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db, guild_id)
        .user_id(user_id)
        .wallet(wallet)
        .build()
        .await
}
