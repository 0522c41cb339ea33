//! Log listing commands: `lootsplit_history`, `transfer_history` and `treasury_history`.

use crate::{
    bot::command::{options::get_int, reply::Reply, Invocation},
    error::AppError,
    model::{
        lootsplit::LootsplitLogEntry,
        pagination::HistoryPage,
        transfer::TransferLogEntry,
        treasury::{TreasuryAction, TreasuryLogEntry},
    },
    service::history::{HistoryService, DEFAULT_HISTORY_LIMIT},
    util::format::{format_silver, format_timestamp, mention},
};

pub async fn lootsplit_history(invocation: &Invocation<'_>) -> Result<Reply, AppError> {
    let limit = get_int(invocation.command, "limit").unwrap_or(DEFAULT_HISTORY_LIMIT);
    let page = get_int(invocation.command, "page").unwrap_or(1);

    let history = HistoryService::new(invocation.db)
        .lootsplits(invocation.guild_id, limit, page)
        .await?;

    Ok(Reply::new(render_lootsplits(&history)).without_pings())
}

pub async fn transfer_history(invocation: &Invocation<'_>) -> Result<Reply, AppError> {
    let limit = get_int(invocation.command, "limit").unwrap_or(DEFAULT_HISTORY_LIMIT);
    let page = get_int(invocation.command, "page").unwrap_or(1);

    let history = HistoryService::new(invocation.db)
        .transfers(invocation.guild_id, limit, page)
        .await?;

    Ok(Reply::new(render_transfers(&history)).without_pings())
}

/// Without `limit` the whole treasury log is listed.
pub async fn treasury_history(invocation: &Invocation<'_>) -> Result<Reply, AppError> {
    let limit = get_int(invocation.command, "limit");
    let page = get_int(invocation.command, "page").unwrap_or(1);

    let history = HistoryService::new(invocation.db)
        .treasury(invocation.guild_id, limit, page)
        .await?;

    Ok(Reply::new(render_treasury(&history)).without_pings())
}

fn header(title: &str, page: Option<u64>) -> String {
    match page {
        Some(page) => format!("{title} (page {page}):"),
        None => format!("{title}:"),
    }
}

fn render_lootsplits(history: &HistoryPage<LootsplitLogEntry>) -> String {
    if history.entries.is_empty() {
        return "No lootsplit history yet.".to_string();
    }

    let mut lines = vec![header("Recent lootsplits", history.page)];
    for entry in &history.entries {
        let recipients = entry
            .recipient_ids
            .iter()
            .map(|id| mention(*id))
            .collect::<Vec<_>>()
            .join(", ");

        lines.push(format!(
            "{} - {} split {} silver (tax {}%), {}, {} each",
            format_timestamp(&entry.created_at),
            mention(entry.initiator_id),
            format_silver(entry.total),
            entry.tax_percent,
            recipients,
            format_silver(entry.share)
        ));
    }

    lines.join("\n")
}

fn render_transfers(history: &HistoryPage<TransferLogEntry>) -> String {
    if history.entries.is_empty() {
        return "No transfer history yet.".to_string();
    }

    let mut lines = vec![header("Recent transfers", history.page)];
    lines.extend(history.entries.iter().map(|entry| {
        format!(
            "{} - {} -> {} : {} silver",
            format_timestamp(&entry.created_at),
            mention(entry.sender_id),
            mention(entry.receiver_id),
            format_silver(entry.amount)
        )
    }));

    lines.join("\n")
}

fn render_treasury(history: &HistoryPage<TreasuryLogEntry>) -> String {
    if history.entries.is_empty() {
        return "No treasury activity yet.".to_string();
    }

    let mut lines = vec![header("Recent treasury activity", history.page)];
    for entry in &history.entries {
        let mut line = format!(
            "{} - {} {} {} silver",
            format_timestamp(&entry.created_at),
            mention(entry.initiator_id),
            entry.action,
            format_silver(entry.amount)
        );

        if let (Some(TreasuryAction::Transfer), Some(recipient_id)) =
            (TreasuryAction::parse(&entry.action), entry.recipient_id)
        {
            line.push_str(&format!(" -> {}", mention(recipient_id)));
        }

        lines.push(line);
    }

    lines.join("\n")
}
