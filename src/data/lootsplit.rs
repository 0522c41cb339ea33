//! Lootsplit log repository.
//!
//! Each lootsplit is stored once in `lootsplit_logs` (with the recipients also kept as a
//! comma separated column) and once per recipient in `lootsplit_recipients`.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    error::AppError,
    model::{
        lootsplit::{parse_recipient_csv, recipient_csv, CreateLootsplitLogParams, LootsplitLogEntry},
        pagination::PageRequest,
    },
    util::parse::{from_db_id, to_db_id},
};

pub struct LootsplitRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LootsplitRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a lootsplit together with one row per recipient.
    ///
    /// # Returns
    /// - `Ok(i32)` - Id of the new log row
    /// - `Err(AppError)` - Database error or id out of range
    pub async fn create(&self, params: CreateLootsplitLogParams) -> Result<i32, AppError> {
        let plan = params.plan;

        let log = entity::lootsplit_log::ActiveModel {
            guild_id: ActiveValue::Set(to_db_id(params.guild_id)?),
            initiator_id: ActiveValue::Set(to_db_id(params.initiator_id)?),
            total: ActiveValue::Set(plan.total),
            tax_percent: ActiveValue::Set(plan.tax_percent),
            tax_amount: ActiveValue::Set(plan.tax_amount),
            remaining: ActiveValue::Set(plan.remaining),
            share: ActiveValue::Set(plan.share),
            recipient_count: ActiveValue::Set(params.recipients.len() as i64),
            recipient_ids: ActiveValue::Set(recipient_csv(&params.recipients)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if !params.recipients.is_empty() {
            let rows = params
                .recipients
                .iter()
                .map(|id| {
                    Ok(entity::lootsplit_recipient::ActiveModel {
                        lootsplit_id: ActiveValue::Set(log.id),
                        recipient_id: ActiveValue::Set(to_db_id(*id)?),
                    })
                })
                .collect::<Result<Vec<_>, AppError>>()?;

            entity::prelude::LootsplitRecipient::insert_many(rows)
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(log.id)
    }

    /// Gets one page of lootsplits newest first.
    ///
    /// Recipients come from `lootsplit_recipients`; rows without recipient entries fall
    /// back to the comma separated column.
    pub async fn get_history(
        &self,
        guild_id: u64,
        page: PageRequest,
    ) -> Result<Vec<LootsplitLogEntry>, AppError> {
        let logs = entity::prelude::LootsplitLog::find()
            .filter(entity::lootsplit_log::Column::GuildId.eq(to_db_id(guild_id)?))
            .order_by_desc(entity::lootsplit_log::Column::Id)
            .limit(page.limit)
            .offset(page.offset())
            .all(self.db)
            .await?;

        if logs.is_empty() {
            return Ok(Vec::new());
        }

        let log_ids: Vec<i32> = logs.iter().map(|l| l.id).collect();
        let mut recipients_by_log: HashMap<i32, Vec<u64>> = HashMap::new();
        for row in entity::prelude::LootsplitRecipient::find()
            .filter(entity::lootsplit_recipient::Column::LootsplitId.is_in(log_ids))
            .order_by_asc(entity::lootsplit_recipient::Column::LootsplitId)
            .order_by_asc(entity::lootsplit_recipient::Column::RecipientId)
            .all(self.db)
            .await?
        {
            recipients_by_log
                .entry(row.lootsplit_id)
                .or_default()
                .push(from_db_id(row.recipient_id)?);
        }

        logs.into_iter()
            .map(|log| {
                let recipient_ids = match recipients_by_log.remove(&log.id) {
                    Some(ids) => ids,
                    None => parse_recipient_csv(&log.recipient_ids),
                };

                Ok(LootsplitLogEntry {
                    initiator_id: from_db_id(log.initiator_id)?,
                    total: log.total,
                    tax_percent: log.tax_percent,
                    share: log.share,
                    recipient_ids,
                    created_at: log.created_at,
                })
            })
            .collect()
    }
}
