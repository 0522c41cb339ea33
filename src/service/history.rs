use sea_orm::DatabaseConnection;

use crate::{
    data::{
        lootsplit::LootsplitRepository, transfer::TransferRepository,
        treasury_log::TreasuryLogRepository,
    },
    error::AppError,
    model::{
        lootsplit::LootsplitLogEntry,
        pagination::{HistoryPage, PageRequest},
        transfer::TransferLogEntry,
        treasury::TreasuryLogEntry,
    },
};

/// Default page size of the history commands.
pub const DEFAULT_HISTORY_LIMIT: i64 = 5;

/// Read access to the lootsplit, transfer and treasury logs.
pub struct HistoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HistoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn lootsplits(
        &self,
        guild_id: u64,
        limit: i64,
        page: i64,
    ) -> Result<HistoryPage<LootsplitLogEntry>, AppError> {
        let request = PageRequest::new(limit, page);
        let entries = LootsplitRepository::new(self.db)
            .get_history(guild_id, request)
            .await?;

        Ok(HistoryPage {
            page: Some(request.page),
            entries,
        })
    }

    pub async fn transfers(
        &self,
        guild_id: u64,
        limit: i64,
        page: i64,
    ) -> Result<HistoryPage<TransferLogEntry>, AppError> {
        let request = PageRequest::new(limit, page);
        let entries = TransferRepository::new(self.db)
            .get_history(guild_id, request)
            .await?;

        Ok(HistoryPage {
            page: Some(request.page),
            entries,
        })
    }

    /// Gets treasury activity.
    ///
    /// Without a `limit` the whole history is returned and `page` is ignored.
    pub async fn treasury(
        &self,
        guild_id: u64,
        limit: Option<i64>,
        page: i64,
    ) -> Result<HistoryPage<TreasuryLogEntry>, AppError> {
        let request = limit.map(|limit| PageRequest::new(limit, page));
        let entries = TreasuryLogRepository::new(self.db)
            .get_history(guild_id, request)
            .await?;

        Ok(HistoryPage {
            page: request.map(|r| r.page),
            entries,
        })
    }
}
