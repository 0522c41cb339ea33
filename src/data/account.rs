//! Account data repository for member wallets.

use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{error::AppError, model::account::Account, util::parse::to_db_id};

/// Repository providing database operations for member wallets.
pub struct AccountRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccountRepository<'a, C> {
    /// Creates a new AccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the account with an empty wallet if it does not exist yet.
    ///
    /// An upsert adding nothing, so an existing wallet is left as is.
    ///
    /// # Returns
    /// - `Ok(())` - Account exists afterwards
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn ensure(&self, guild_id: u64, user_id: u64) -> Result<(), AppError> {
        self.credit(guild_id, user_id, 0).await
    }

    /// Finds the account of a member.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account exists
    /// - `Ok(None)` - Member has never been seen in this guild
    /// - `Err(AppError)` - Database error or corrupt stored id
    pub async fn find(&self, guild_id: u64, user_id: u64) -> Result<Option<Account>, AppError> {
        let entity =
            entity::prelude::Account::find_by_id((to_db_id(guild_id)?, to_db_id(user_id)?))
                .one(self.db)
                .await?;

        entity.map(Account::from_entity).transpose()
    }

    /// Reads a member's wallet, treating a missing account as empty.
    pub async fn get_wallet(&self, guild_id: u64, user_id: u64) -> Result<i64, AppError> {
        Ok(self
            .find(guild_id, user_id)
            .await?
            .map(|account| account.wallet)
            .unwrap_or(0))
    }

    /// Adds `amount` to a member's wallet, creating the account if needed.
    ///
    /// Performed as a single upsert so concurrent credits never lose an update.
    pub async fn credit(&self, guild_id: u64, user_id: u64, amount: i64) -> Result<(), AppError> {
        entity::prelude::Account::insert(entity::account::ActiveModel {
            guild_id: ActiveValue::Set(to_db_id(guild_id)?),
            user_id: ActiveValue::Set(to_db_id(user_id)?),
            wallet: ActiveValue::Set(amount),
        })
        .on_conflict(
            OnConflict::columns([
                entity::account::Column::GuildId,
                entity::account::Column::UserId,
            ])
            .value(
                entity::account::Column::Wallet,
                Expr::col((entity::prelude::Account, entity::account::Column::Wallet)).add(amount),
            )
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Subtracts `amount` from a member's wallet only if the wallet covers it.
    ///
    /// The balance check and the update are one conditional statement, so two concurrent
    /// debits can never both succeed against the same funds.
    ///
    /// # Returns
    /// - `Ok(true)` - Wallet debited
    /// - `Ok(false)` - Wallet missing or too small, nothing changed
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn debit_checked(
        &self,
        guild_id: u64,
        user_id: u64,
        amount: i64,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Account::update_many()
            .col_expr(
                entity::account::Column::Wallet,
                Expr::col(entity::account::Column::Wallet).sub(amount),
            )
            .filter(entity::account::Column::GuildId.eq(to_db_id(guild_id)?))
            .filter(entity::account::Column::UserId.eq(to_db_id(user_id)?))
            .filter(entity::account::Column::Wallet.gte(amount))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Sums all wallets of a guild.
    pub async fn total_owed(&self, guild_id: u64) -> Result<i64, AppError> {
        let total = entity::prelude::Account::find()
            .select_only()
            .column_as(
                Expr::from(Func::sum(Expr::col(entity::account::Column::Wallet))),
                "total",
            )
            .filter(entity::account::Column::GuildId.eq(to_db_id(guild_id)?))
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0))
    }

    /// Gets one page of accounts with a positive balance, richest first.
    ///
    /// Ties are ordered by member id so pages are stable.
    pub async fn get_richest(
        &self,
        guild_id: u64,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<Account>, AppError> {
        let entities = entity::prelude::Account::find()
            .filter(entity::account::Column::GuildId.eq(to_db_id(guild_id)?))
            .filter(entity::account::Column::Wallet.gt(0))
            .order_by_desc(entity::account::Column::Wallet)
            .order_by_asc(entity::account::Column::UserId)
            .limit(limit)
            .offset(offset)
            .all(self.db)
            .await?;

        entities.into_iter().map(Account::from_entity).collect()
    }

    /// Counts accounts with a positive balance.
    pub async fn count_with_balance(&self, guild_id: u64) -> Result<u64, AppError> {
        let count = entity::prelude::Account::find()
            .filter(entity::account::Column::GuildId.eq(to_db_id(guild_id)?))
            .filter(entity::account::Column::Wallet.gt(0))
            .count(self.db)
            .await?;

        Ok(count)
    }
}
