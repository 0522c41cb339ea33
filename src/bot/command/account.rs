//! Member wallet commands: `balance`, `give_silver`, `take_silver` and `transfer`.

use crate::{
    bot::command::{
        options::{get_user, require_int, require_user},
        reply::Reply,
        Invocation,
    },
    error::AppError,
    model::account::{AdjustBalanceParams, TransferParams},
    service::account::AccountService,
    util::format::{format_silver, mention},
};

pub async fn balance(invocation: &Invocation<'_>) -> Result<Reply, AppError> {
    let target_id = get_user(invocation.command, "member").unwrap_or(invocation.user_id);

    let wallet = AccountService::new(invocation.db)
        .balance(invocation.guild_id, target_id)
        .await?;

    if target_id == invocation.user_id {
        Ok(Reply::new(render_own_balance(wallet)))
    } else {
        Ok(Reply::new(render_member_balance(target_id, wallet)).without_pings())
    }
}

pub async fn give_silver(invocation: &Invocation<'_>) -> Result<Reply, AppError> {
    let user_id = require_user(invocation.command, "member")?;
    let amount = require_int(invocation.command, "amount")?;

    AccountService::new(invocation.db)
        .give(AdjustBalanceParams {
            guild_id: invocation.guild_id,
            user_id,
            amount,
        })
        .await?;

    Ok(Reply::new(format!(
        "Added **{} silver** to {}.",
        format_silver(amount),
        mention(user_id)
    )))
}

pub async fn take_silver(invocation: &Invocation<'_>) -> Result<Reply, AppError> {
    let user_id = require_user(invocation.command, "member")?;
    let amount = require_int(invocation.command, "amount")?;

    AccountService::new(invocation.db)
        .take(AdjustBalanceParams {
            guild_id: invocation.guild_id,
            user_id,
            amount,
        })
        .await?;

    Ok(Reply::new(format!(
        "Removed **{} silver** from {}.",
        format_silver(amount),
        mention(user_id)
    )))
}

pub async fn transfer(invocation: &Invocation<'_>) -> Result<Reply, AppError> {
    let receiver_id = require_user(invocation.command, "member")?;
    let amount = require_int(invocation.command, "amount")?;

    AccountService::new(invocation.db)
        .transfer(TransferParams {
            guild_id: invocation.guild_id,
            sender_id: invocation.user_id,
            receiver_id,
            amount,
        })
        .await?;

    Ok(Reply::new(render_transfer(
        invocation.user_id,
        receiver_id,
        amount,
    )))
}

fn render_own_balance(wallet: i64) -> String {
    format!("You have **{} silver**", format_silver(wallet))
}

fn render_member_balance(user_id: u64, wallet: i64) -> String {
    format!("{} has **{} silver**", mention(user_id), format_silver(wallet))
}

fn render_transfer(sender_id: u64, receiver_id: u64, amount: i64) -> String {
    format!(
        "{} sent **{} silver** to {}.",
        mention(sender_id),
        format_silver(amount),
        mention(receiver_id)
    )
}
