use serenity::all::{Command, Context, GuildId, Http, Ready};

use crate::{bot::command::create_commands, error::AppError};

/// Handles the ready event.
///
/// Clears any global commands left behind by earlier deployments and registers the
/// full command set on the dev guild, where changes apply immediately.
pub async fn handle_ready(ctx: Context, ready: Ready, dev_guild_id: u64) {
    tracing::info!("{} is connected to Discord!", ready.user.name);

    match register_commands(&ctx.http, GuildId::new(dev_guild_id)).await {
        Ok(count) => tracing::info!("Synced {} commands to dev guild", count),
        Err(e) => tracing::error!("Failed to register commands: {}", e),
    }
}

/// Replaces the global command list with nothing and the guild command list with ours.
///
/// # Returns
/// - `Ok(usize)` - Number of commands now registered on the guild
/// - `Err(AppError::DiscordErr)` - Discord rejected one of the updates
pub async fn register_commands(http: &Http, guild_id: GuildId) -> Result<usize, AppError> {
    Command::set_global_commands(http, Vec::new()).await?;

    let commands = guild_id.set_commands(http, create_commands()).await?;

    Ok(commands.len())
}
