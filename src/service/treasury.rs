use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        account::AccountRepository, treasury::TreasuryRepository,
        treasury_log::TreasuryLogRepository,
    },
    error::{economy::EconomyError, AppError},
    model::treasury::{
        CreateTreasuryLogParams, TreasuryAction, TreasuryDepositParams, TreasuryWithdrawParams,
    },
    service::account::require_positive,
};

pub struct TreasuryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TreasuryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn balance(&self, guild_id: u64) -> Result<i64, AppError> {
        TreasuryRepository::new(self.db).get_balance(guild_id).await
    }

    /// Deposits silver into the treasury and records an `add` entry.
    pub async fn deposit(&self, params: TreasuryDepositParams) -> Result<(), AppError> {
        require_positive(params.amount)?;

        let txn = self.db.begin().await?;

        TreasuryRepository::new(&txn)
            .deposit(params.guild_id, params.amount)
            .await?;
        TreasuryLogRepository::new(&txn)
            .create(CreateTreasuryLogParams {
                guild_id: params.guild_id,
                initiator_id: params.initiator_id,
                action: TreasuryAction::Add,
                amount: params.amount,
                recipient_id: None,
            })
            .await?;

        txn.commit().await?;

        Ok(())
    }

    /// Withdraws silver from the treasury.
    ///
    /// With a recipient the silver is credited to that member and logged as
    /// `transfer`; without one it leaves circulation and is logged as `take`.
    ///
    /// # Returns
    /// - `Ok(())` - Withdrawal committed
    /// - `Err(EconomyError::AmountNotPositive)` - `amount <= 0`
    /// - `Err(EconomyError::InsufficientTreasury)` - Treasury cannot cover the amount
    /// - `Err(AppError::DbErr)` - Database error, transaction rolled back
    pub async fn withdraw(&self, params: TreasuryWithdrawParams) -> Result<(), AppError> {
        require_positive(params.amount)?;

        let txn = self.db.begin().await?;

        if !TreasuryRepository::new(&txn)
            .withdraw_checked(params.guild_id, params.amount)
            .await?
        {
            return Err(EconomyError::InsufficientTreasury.into());
        }

        let action = match params.recipient_id {
            Some(recipient_id) => {
                AccountRepository::new(&txn)
                    .credit(params.guild_id, recipient_id, params.amount)
                    .await?;
                TreasuryAction::Transfer
            }
            None => TreasuryAction::Take,
        };

        TreasuryLogRepository::new(&txn)
            .create(CreateTreasuryLogParams {
                guild_id: params.guild_id,
                initiator_id: params.initiator_id,
                action,
                amount: params.amount,
                recipient_id: params.recipient_id,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            guild_id = params.guild_id,
            initiator_id = params.initiator_id,
            amount = params.amount,
            %action,
            "Withdrew silver from treasury"
        );

        Ok(())
    }
}
