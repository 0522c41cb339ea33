use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        account::AccountRepository, lootsplit::LootsplitRepository, treasury::TreasuryRepository,
    },
    error::AppError,
    model::lootsplit::{CreateLootsplitLogParams, Lootsplit, LootsplitParams, LootsplitPlan},
};

pub struct LootsplitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LootsplitService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Splits loot among the given members after tax.
    ///
    /// Every recipient is credited `share`, the tax goes to the treasury and the split
    /// is logged, all in one transaction. The undivided remainder is dropped.
    ///
    /// # Returns
    /// - `Ok(Lootsplit)` - The committed split
    /// - `Err(AppError::EconomyErr)` - Invalid total, tax or a zero share
    /// - `Err(AppError::DbErr)` - Database error, transaction rolled back
    pub async fn split(&self, params: LootsplitParams) -> Result<Lootsplit, AppError> {
        let plan = LootsplitPlan::compute(
            params.total,
            params.tax_percent,
            params.recipients.len(),
        )?;

        let txn = self.db.begin().await?;

        let accounts = AccountRepository::new(&txn);
        for recipient_id in &params.recipients {
            accounts
                .credit(params.guild_id, *recipient_id, plan.share)
                .await?;
        }

        if plan.tax_amount > 0 {
            TreasuryRepository::new(&txn)
                .deposit(params.guild_id, plan.tax_amount)
                .await?;
        }

        LootsplitRepository::new(&txn)
            .create(CreateLootsplitLogParams {
                guild_id: params.guild_id,
                initiator_id: params.initiator_id,
                plan,
                recipients: params.recipients.clone(),
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            guild_id = params.guild_id,
            initiator_id = params.initiator_id,
            total = plan.total,
            recipients = params.recipients.len(),
            "Split loot"
        );

        Ok(Lootsplit {
            plan,
            recipients: params.recipients,
        })
    }
}
