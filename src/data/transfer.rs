use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    error::AppError,
    model::{account::TransferParams, pagination::PageRequest, transfer::TransferLogEntry},
    util::parse::to_db_id,
};

/// Repository for the member-to-member transfer log.
pub struct TransferRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TransferRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a completed transfer.
    pub async fn create(&self, params: &TransferParams) -> Result<(), AppError> {
        entity::transfer_log::ActiveModel {
            guild_id: ActiveValue::Set(to_db_id(params.guild_id)?),
            sender_id: ActiveValue::Set(to_db_id(params.sender_id)?),
            receiver_id: ActiveValue::Set(to_db_id(params.receiver_id)?),
            amount: ActiveValue::Set(params.amount),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Gets one page of transfers newest first.
    pub async fn get_history(
        &self,
        guild_id: u64,
        page: PageRequest,
    ) -> Result<Vec<TransferLogEntry>, AppError> {
        let entities = entity::prelude::TransferLog::find()
            .filter(entity::transfer_log::Column::GuildId.eq(to_db_id(guild_id)?))
            .order_by_desc(entity::transfer_log::Column::Id)
            .limit(page.limit)
            .offset(page.offset())
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(TransferLogEntry::from_entity)
            .collect()
    }
}
