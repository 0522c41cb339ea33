use crate::{
    bot::{
        command::{options::require_int, options::require_str, reply::Reply, Invocation},
        recipient::{resolve_recipients, GuildMembers},
    },
    error::AppError,
    model::lootsplit::{validate_terms, Lootsplit, LootsplitParams},
    service::lootsplit::LootsplitService,
    util::{
        format::{format_silver, mention},
        mention::parse_recipients,
    },
};

/// Splits a total among the members named in `users` after taking tax.
///
/// Total and tax are validated before any member lookup so bad input never costs
/// HTTP requests.
pub async fn lootsplit(invocation: &Invocation<'_>) -> Result<Reply, AppError> {
    let total = require_int(invocation.command, "total")?;
    let tax_percent = require_int(invocation.command, "tax")?;
    let users = require_str(invocation.command, "users")?;

    validate_terms(total, tax_percent)?;

    let members = GuildMembers::new(invocation.ctx, invocation.guild_id);
    let recipients = resolve_recipients(&members, parse_recipients(users)).await?;

    let split = LootsplitService::new(invocation.db)
        .split(LootsplitParams {
            guild_id: invocation.guild_id,
            initiator_id: invocation.user_id,
            total,
            tax_percent,
            recipients,
        })
        .await?;

    Ok(Reply::new(render_lootsplit(&split)).without_pings())
}

fn render_lootsplit(split: &Lootsplit) -> String {
    let plan = &split.plan;
    let recipients = split
        .recipients
        .iter()
        .map(|id| mention(*id))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Total: **{} silver**\nTax ({}%): **{} silver**\nSplit: **{} silver** among {}\nEach received **{} silver**.",
        format_silver(plan.total),
        plan.tax_percent,
        format_silver(plan.tax_amount),
        format_silver(plan.remaining),
        recipients,
        format_silver(plan.share)
    )
}
