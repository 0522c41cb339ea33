//! Treasury factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates the treasury row for `guild_id` with the given balance.
///
/// # Returns
/// - `Ok(entity::treasury::Model)` - Created treasury row
/// - `Err(DbErr)` - Database error during insert (e.g. the row already exists)
pub async fn create_treasury(
    db: &DatabaseConnection,
    guild_id: i64,
    balance: i64,
) -> Result<entity::treasury::Model, DbErr> {
    entity::treasury::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        balance: ActiveValue::Set(balance),
    }
    .insert(db)
    .await
}
