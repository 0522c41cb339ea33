//! Lootsplit log factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_snowflake;

/// Factory for lootsplit log rows.
///
/// Recipient rows are only written when `with_recipient_rows(true)` is set, which lets
/// tests exercise the comma separated fallback column on its own.
pub struct LootsplitLogFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    total: i64,
    tax_percent: i64,
    recipients: Vec<i64>,
    recipient_rows: bool,
}

impl<'a> LootsplitLogFactory<'a> {
    /// Defaults: total `1000`, no tax, two generated recipients, recipient rows written.
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        Self {
            db,
            guild_id,
            total: 1000,
            tax_percent: 0,
            recipients: vec![next_snowflake(), next_snowflake()],
            recipient_rows: true,
        }
    }

    pub fn total(mut self, total: i64) -> Self {
        self.total = total;
        self
    }

    pub fn tax_percent(mut self, tax_percent: i64) -> Self {
        self.tax_percent = tax_percent;
        self
    }

    pub fn recipients(mut self, recipients: Vec<i64>) -> Self {
        self.recipients = recipients;
        self
    }

    pub fn with_recipient_rows(mut self, recipient_rows: bool) -> Self {
        self.recipient_rows = recipient_rows;
        self
    }

    /// Inserts the log row, deriving tax, remainder and share from total and tax.
    pub async fn build(self) -> Result<entity::lootsplit_log::Model, DbErr> {
        let tax_amount = self.total * self.tax_percent / 100;
        let remaining = self.total - tax_amount;
        let count = self.recipients.len() as i64;
        let share = if count > 0 { remaining / count } else { 0 };
        let recipient_ids = self
            .recipients
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let log = entity::lootsplit_log::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            initiator_id: ActiveValue::Set(next_snowflake()),
            total: ActiveValue::Set(self.total),
            tax_percent: ActiveValue::Set(self.tax_percent),
            tax_amount: ActiveValue::Set(tax_amount),
            remaining: ActiveValue::Set(remaining),
            share: ActiveValue::Set(share),
            recipient_count: ActiveValue::Set(count),
            recipient_ids: ActiveValue::Set(recipient_ids),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        if self.recipient_rows {
            for recipient_id in &self.recipients {
                entity::lootsplit_recipient::ActiveModel {
                    lootsplit_id: ActiveValue::Set(log.id),
                    recipient_id: ActiveValue::Set(*recipient_id),
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(log)
    }
}

/// Creates a lootsplit log with default values and recipient rows.
pub async fn create_lootsplit_log(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::lootsplit_log::Model, DbErr> {
    LootsplitLogFactory::new(db, guild_id).build().await
}
