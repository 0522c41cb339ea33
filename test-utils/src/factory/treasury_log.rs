//! Treasury log factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_snowflake;

/// Creates a treasury log row.
///
/// # Arguments
/// - `action` - One of `add`, `take` or `transfer`
/// - `recipient_id` - Receiving member for `transfer` rows
pub async fn create_treasury_log(
    db: &DatabaseConnection,
    guild_id: i64,
    action: &str,
    amount: i64,
    recipient_id: Option<i64>,
) -> Result<entity::treasury_log::Model, DbErr> {
    entity::treasury_log::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        initiator_id: ActiveValue::Set(next_snowflake()),
        action: ActiveValue::Set(action.to_string()),
        amount: ActiveValue::Set(amount),
        recipient_id: ActiveValue::Set(recipient_id),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
