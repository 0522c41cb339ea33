use serenity::all::{CreateInteractionResponseFollowup, GuildId};

use crate::{
    bot::{command::Invocation, handler::ready::register_commands},
    error::AppError,
};

pub const SYNCED_MESSAGE: &str = "Commands synced.";

/// Re-registers the command set on the invoking guild.
///
/// The response is deferred first since registration can outlast the interaction
/// deadline; the outcome is sent as an ephemeral follow-up.
pub async fn sync(invocation: &Invocation<'_>) -> Result<(), AppError> {
    let http = &invocation.ctx.http;

    invocation.command.defer_ephemeral(http).await?;

    let content = match register_commands(http, GuildId::new(invocation.guild_id)).await {
        Ok(count) => {
            tracing::info!(
                guild_id = invocation.guild_id,
                "Synced {} commands on request",
                count
            );
            SYNCED_MESSAGE.to_string()
        }
        Err(err) => err.user_message(),
    };

    invocation
        .command
        .create_followup(
            http,
            CreateInteractionResponseFollowup::new()
                .content(content)
                .ephemeral(true),
        )
        .await?;

    Ok(())
}
