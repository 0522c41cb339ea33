//! Transfer log factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_snowflake;

/// Factory for transfer log rows.
pub struct TransferLogFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    sender_id: i64,
    receiver_id: i64,
    amount: i64,
    created_at: DateTime<Utc>,
}

impl<'a> TransferLogFactory<'a> {
    /// Defaults: generated sender and receiver, amount `100`, created now.
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        Self {
            db,
            guild_id,
            sender_id: next_snowflake(),
            receiver_id: next_snowflake(),
            amount: 100,
            created_at: Utc::now(),
        }
    }

    pub fn sender_id(mut self, sender_id: i64) -> Self {
        self.sender_id = sender_id;
        self
    }

    pub fn receiver_id(mut self, receiver_id: i64) -> Self {
        self.receiver_id = receiver_id;
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::transfer_log::Model, DbErr> {
        entity::transfer_log::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            sender_id: ActiveValue::Set(self.sender_id),
            receiver_id: ActiveValue::Set(self.receiver_id),
            amount: ActiveValue::Set(self.amount),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a transfer log row with the given amount.
pub async fn create_transfer_log(
    db: &DatabaseConnection,
    guild_id: i64,
    amount: i64,
) -> Result<entity::transfer_log::Model, DbErr> {
    TransferLogFactory::new(db, guild_id).amount(amount).build().await
}
