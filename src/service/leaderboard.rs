use sea_orm::DatabaseConnection;

use crate::{
    data::{account::AccountRepository, treasury::TreasuryRepository},
    error::{economy::EconomyError, AppError},
    model::{
        leaderboard::{
            total_pages, GuildBalance, Leaderboard, LeaderboardEntry, LEADERBOARD_PAGE_SIZE,
        },
        pagination::clamp_page,
    },
};

/// Guild-wide views over all wallets.
pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of the richest members.
    ///
    /// # Returns
    /// - `Ok(Leaderboard)` - The page, with no entries if nobody holds silver
    /// - `Err(EconomyError::PageOutOfRange)` - `page` is past the last page
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn leaderboard(&self, guild_id: u64, page: i64) -> Result<Leaderboard, AppError> {
        let repo = AccountRepository::new(self.db);
        let page = clamp_page(page);

        let total_owed = repo.total_owed(guild_id).await?;
        let count = repo.count_with_balance(guild_id).await?;
        let total_pages = total_pages(count);

        if count == 0 {
            return Ok(Leaderboard {
                page,
                total_pages,
                total_owed,
                entries: Vec::new(),
            });
        }

        if page > total_pages {
            return Err(EconomyError::PageOutOfRange {
                max_page: total_pages,
            }
            .into());
        }

        let offset = (page - 1) * LEADERBOARD_PAGE_SIZE;
        let entries = repo
            .get_richest(guild_id, LEADERBOARD_PAGE_SIZE, offset)
            .await?
            .into_iter()
            .zip(offset + 1..)
            .map(|(account, rank)| LeaderboardEntry {
                rank,
                user_id: account.user_id,
                wallet: account.wallet,
            })
            .collect();

        Ok(Leaderboard {
            page,
            total_pages,
            total_owed,
            entries,
        })
    }

    /// Compares silver on hand against treasury and member wallets.
    pub async fn guild_balance(&self, guild_id: u64, on_hand: i64) -> Result<GuildBalance, AppError> {
        if on_hand < 0 {
            return Err(EconomyError::AmountNegative.into());
        }

        let treasury = TreasuryRepository::new(self.db).get_balance(guild_id).await?;
        let owed = AccountRepository::new(self.db).total_owed(guild_id).await?;

        Ok(GuildBalance::new(on_hand, treasury, owed)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    const GUILD_ID: u64 = 1;

    #[tokio::test]
    async fn ranks_continue_across_pages() -> Result<(), AppError> {
        let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        for user_id in 1..=12 {
            factory::create_account_with_wallet(db, GUILD_ID as i64, user_id, user_id * 10).await?;
        }

        let board = LeaderboardService::new(db).leaderboard(GUILD_ID, 2).await?;

        assert_eq!(board.page, 2);
        assert_eq!(board.total_pages, 2);
        assert_eq!(board.total_owed, 780);
        assert_eq!(board.entries.len(), 2);
        assert_eq!(board.entries[0].rank, 11);
        assert_eq!(board.entries[0].user_id, 2);
        assert_eq!(board.entries[1].rank, 12);

        Ok(())
    }

    #[tokio::test]
    async fn empty_guild_has_no_entries() -> Result<(), AppError> {
        let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_account_with_wallet(db, GUILD_ID as i64, 1, 0).await?;

        let board = LeaderboardService::new(db).leaderboard(GUILD_ID, 4).await?;

        assert!(board.entries.is_empty());
        assert_eq!(board.total_pages, 1);

        Ok(())
    }

    #[tokio::test]
    async fn page_past_end_is_rejected() -> Result<(), AppError> {
        let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_account_with_wallet(db, GUILD_ID as i64, 1, 10).await?;

        let result = LeaderboardService::new(db).leaderboard(GUILD_ID, 2).await;

        assert!(matches!(
            result,
            Err(AppError::EconomyErr(EconomyError::PageOutOfRange { max_page: 1 }))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn guild_balance_subtracts_treasury_and_wallets() -> Result<(), AppError> {
        let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::create_treasury(db, GUILD_ID as i64, 300).await?;
        factory::create_account_with_wallet(db, GUILD_ID as i64, 1, 200).await?;

        let balance = LeaderboardService::new(db)
            .guild_balance(GUILD_ID, 1_000)
            .await?;

        assert_eq!(balance.actual, 500);
        assert_eq!(balance.treasury, 300);
        assert_eq!(balance.owed, 200);

        Ok(())
    }

    #[tokio::test]
    async fn guild_balance_rejects_negative_amount() -> Result<(), AppError> {
        let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = LeaderboardService::new(db).guild_balance(GUILD_ID, -1).await;

        assert!(matches!(
            result,
            Err(AppError::EconomyErr(EconomyError::AmountNegative))
        ));

        Ok(())
    }
}
