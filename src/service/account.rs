use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{account::AccountRepository, transfer::TransferRepository},
    error::{economy::EconomyError, AppError},
    model::account::{AdjustBalanceParams, TransferParams},
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a member's wallet, creating an empty account on first sight.
    pub async fn balance(&self, guild_id: u64, user_id: u64) -> Result<i64, AppError> {
        let repo = AccountRepository::new(self.db);

        repo.ensure(guild_id, user_id).await?;

        repo.get_wallet(guild_id, user_id).await
    }

    /// Adds silver to a member's wallet.
    pub async fn give(&self, params: AdjustBalanceParams) -> Result<(), AppError> {
        require_positive(params.amount)?;

        AccountRepository::new(self.db)
            .credit(params.guild_id, params.user_id, params.amount)
            .await
    }

    /// Removes silver from a member's wallet.
    ///
    /// # Returns
    /// - `Ok(())` - Silver removed
    /// - `Err(EconomyError::InsufficientBalance)` - Wallet does not cover the amount,
    ///   nothing was removed
    pub async fn take(&self, params: AdjustBalanceParams) -> Result<(), AppError> {
        require_positive(params.amount)?;

        let debited = AccountRepository::new(self.db)
            .debit_checked(params.guild_id, params.user_id, params.amount)
            .await?;

        if !debited {
            return Err(EconomyError::InsufficientBalance.into());
        }

        Ok(())
    }

    /// Moves silver from one member to another and records the transfer.
    ///
    /// Debit, credit and log entry are committed together or not at all.
    ///
    /// # Returns
    /// - `Ok(())` - Transfer committed
    /// - `Err(EconomyError::AmountNotPositive)` - `amount <= 0`
    /// - `Err(EconomyError::SelfTransfer)` - Sender and receiver are the same member
    /// - `Err(EconomyError::InsufficientFunds)` - Sender cannot cover the amount
    /// - `Err(AppError::DbErr)` - Database error, transaction rolled back
    pub async fn transfer(&self, params: TransferParams) -> Result<(), AppError> {
        require_positive(params.amount)?;

        if params.sender_id == params.receiver_id {
            return Err(EconomyError::SelfTransfer.into());
        }

        let txn = self.db.begin().await?;

        let accounts = AccountRepository::new(&txn);
        if !accounts
            .debit_checked(params.guild_id, params.sender_id, params.amount)
            .await?
        {
            return Err(EconomyError::InsufficientFunds.into());
        }
        accounts
            .credit(params.guild_id, params.receiver_id, params.amount)
            .await?;

        TransferRepository::new(&txn).create(&params).await?;

        txn.commit().await?;

        tracing::info!(
            guild_id = params.guild_id,
            sender_id = params.sender_id,
            receiver_id = params.receiver_id,
            amount = params.amount,
            "Transferred silver"
        );

        Ok(())
    }
}

pub(crate) fn require_positive(amount: i64) -> Result<(), EconomyError> {
    if amount <= 0 {
        return Err(EconomyError::AmountNotPositive);
    }

    Ok(())
}
