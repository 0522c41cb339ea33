use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    error::AppError,
    model::{
        pagination::PageRequest,
        treasury::{CreateTreasuryLogParams, TreasuryLogEntry},
    },
    util::parse::to_db_id,
};

/// Repository for the treasury audit log.
pub struct TreasuryLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TreasuryLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a treasury movement.
    pub async fn create(&self, params: CreateTreasuryLogParams) -> Result<(), AppError> {
        entity::treasury_log::ActiveModel {
            guild_id: ActiveValue::Set(to_db_id(params.guild_id)?),
            initiator_id: ActiveValue::Set(to_db_id(params.initiator_id)?),
            action: ActiveValue::Set(params.action.as_str().to_string()),
            amount: ActiveValue::Set(params.amount),
            recipient_id: ActiveValue::Set(params.recipient_id.map(to_db_id).transpose()?),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Gets treasury movements newest first.
    ///
    /// # Arguments
    /// - `page` - Page to fetch, or `None` for the entire history
    pub async fn get_history(
        &self,
        guild_id: u64,
        page: Option<PageRequest>,
    ) -> Result<Vec<TreasuryLogEntry>, AppError> {
        let mut query = entity::prelude::TreasuryLog::find()
            .filter(entity::treasury_log::Column::GuildId.eq(to_db_id(guild_id)?))
            .order_by_desc(entity::treasury_log::Column::Id);

        if let Some(page) = page {
            query = query.limit(page.limit).offset(page.offset());
        }

        let entities = query.all(self.db).await?;

        entities
            .into_iter()
            .map(TreasuryLogEntry::from_entity)
            .collect()
    }
}
