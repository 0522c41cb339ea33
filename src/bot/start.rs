use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Starts the Discord bot and runs it until the gateway shuts down.
///
/// A Ctrl-C signal shuts down all shards, after which this function returns `Ok(())`.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and dev guild
/// - `db` - Database connection shared by all command handlers
///
/// # Returns
/// - `Ok(())` - The bot ran and shut down cleanly
/// - `Err(AppError::DiscordErr)` - Client construction or gateway connection failed
pub async fn start_bot(config: &Config, db: DatabaseConnection) -> Result<(), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(db, config.dev_guild_id);

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                tracing::info!("Received Ctrl-C, shutting down");
                shard_manager.shutdown_all().await;
            }
            Err(e) => tracing::error!("Failed to listen for Ctrl-C: {}", e),
        }
    });

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
