//! Treasury commands: `treasury`, `treasury_add` and `treasury_take`.

use crate::{
    bot::command::{
        options::{get_user, require_int},
        reply::Reply,
        Invocation,
    },
    error::AppError,
    model::treasury::{TreasuryDepositParams, TreasuryWithdrawParams},
    service::treasury::TreasuryService,
    util::format::{format_silver, mention},
};

pub async fn treasury(invocation: &Invocation<'_>) -> Result<Reply, AppError> {
    let balance = TreasuryService::new(invocation.db)
        .balance(invocation.guild_id)
        .await?;

    Ok(Reply::new(format!(
        "Guild treasury has **{} silver**.",
        format_silver(balance)
    )))
}

pub async fn treasury_add(invocation: &Invocation<'_>) -> Result<Reply, AppError> {
    let amount = require_int(invocation.command, "amount")?;

    TreasuryService::new(invocation.db)
        .deposit(TreasuryDepositParams {
            guild_id: invocation.guild_id,
            initiator_id: invocation.user_id,
            amount,
        })
        .await?;

    Ok(Reply::new(format!(
        "Added **{} silver** to the treasury.",
        format_silver(amount)
    )))
}

/// Removes silver from the treasury, paying it out to `member` when given.
pub async fn treasury_take(invocation: &Invocation<'_>) -> Result<Reply, AppError> {
    let amount = require_int(invocation.command, "amount")?;
    let recipient_id = get_user(invocation.command, "member");

    TreasuryService::new(invocation.db)
        .withdraw(TreasuryWithdrawParams {
            guild_id: invocation.guild_id,
            initiator_id: invocation.user_id,
            amount,
            recipient_id,
        })
        .await?;

    Ok(Reply::new(render_withdrawal(amount, recipient_id)))
}

fn render_withdrawal(amount: i64, recipient_id: Option<u64>) -> String {
    match recipient_id {
        Some(recipient_id) => format!(
            "Transferred **{} silver** from the treasury to {}.",
            format_silver(amount),
            mention(recipient_id)
        ),
        None => format!(
            "Removed **{} silver** from the treasury.",
            format_silver(amount)
        ),
    }
}
