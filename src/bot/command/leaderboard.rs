//! Guild-wide views: `leaderboard` and `guild_balance`.

use crate::{
    bot::command::{
        options::{get_int, require_int},
        reply::Reply,
        Invocation,
    },
    error::AppError,
    model::leaderboard::{GuildBalance, Leaderboard},
    service::leaderboard::LeaderboardService,
    util::format::{format_silver, mention},
};

pub async fn leaderboard(invocation: &Invocation<'_>) -> Result<Reply, AppError> {
    let page = get_int(invocation.command, "page").unwrap_or(1);

    let board = LeaderboardService::new(invocation.db)
        .leaderboard(invocation.guild_id, page)
        .await?;

    Ok(Reply::new(render_leaderboard(&board)).without_pings())
}

pub async fn guild_balance(invocation: &Invocation<'_>) -> Result<Reply, AppError> {
    let amount = require_int(invocation.command, "amount")?;

    let balance = LeaderboardService::new(invocation.db)
        .guild_balance(invocation.guild_id, amount)
        .await?;

    Ok(Reply::new(render_guild_balance(&balance)))
}

fn render_leaderboard(board: &Leaderboard) -> String {
    if board.entries.is_empty() {
        return "No balances yet.".to_string();
    }

    let mut lines = vec![format!(
        "Leaderboard (page {}/{}) - Total owed: {} silver",
        board.page,
        board.total_pages,
        format_silver(board.total_owed)
    )];
    lines.extend(board.entries.iter().map(|entry| {
        format!(
            "{}. {} — {} silver",
            entry.rank,
            mention(entry.user_id),
            format_silver(entry.wallet)
        )
    }));

    lines.join("\n")
}

fn render_guild_balance(balance: &GuildBalance) -> String {
    format!(
        "Actual balance: **{} silver**\nTotal on hand: **{} silver**\nTreasury: **{} silver**\nTotal owed: **{} silver**",
        format_silver(balance.actual),
        format_silver(balance.on_hand),
        format_silver(balance.treasury),
        format_silver(balance.owed)
    )
}
