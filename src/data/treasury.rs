//! Treasury data repository.

use migration::OnConflict;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
};

use crate::{error::AppError, util::parse::to_db_id};

/// Repository for the per-guild treasury balance.
pub struct TreasuryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TreasuryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Reads the treasury balance, treating a missing row as empty.
    pub async fn get_balance(&self, guild_id: u64) -> Result<i64, AppError> {
        let entity = entity::prelude::Treasury::find_by_id(to_db_id(guild_id)?)
            .one(self.db)
            .await?;

        Ok(entity.map(|t| t.balance).unwrap_or(0))
    }

    /// Adds `amount` to the treasury, creating the row if needed.
    pub async fn deposit(&self, guild_id: u64, amount: i64) -> Result<(), AppError> {
        entity::prelude::Treasury::insert(entity::treasury::ActiveModel {
            guild_id: ActiveValue::Set(to_db_id(guild_id)?),
            balance: ActiveValue::Set(amount),
        })
        .on_conflict(
            OnConflict::column(entity::treasury::Column::GuildId)
                .value(
                    entity::treasury::Column::Balance,
                    Expr::col((entity::prelude::Treasury, entity::treasury::Column::Balance))
                        .add(amount),
                )
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Subtracts `amount` from the treasury only if the balance covers it.
    ///
    /// # Returns
    /// - `Ok(true)` - Treasury debited
    /// - `Ok(false)` - Treasury missing or too small, nothing changed
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn withdraw_checked(&self, guild_id: u64, amount: i64) -> Result<bool, AppError> {
        let result = entity::prelude::Treasury::update_many()
            .col_expr(
                entity::treasury::Column::Balance,
                Expr::col(entity::treasury::Column::Balance).sub(amount),
            )
            .filter(entity::treasury::Column::GuildId.eq(to_db_id(guild_id)?))
            .filter(entity::treasury::Column::Balance.gte(amount))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}
