use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Interaction, Ready};
use serenity::async_trait;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    /// Guild the command set is registered to on startup.
    pub dev_guild_id: u64,
}

impl Handler {
    pub fn new(db: DatabaseConnection, dev_guild_id: u64) -> Self {
        Self { db, dev_guild_id }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.dev_guild_id).await;
    }

    /// Called for every interaction, slash commands among them
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.db, ctx, interaction).await;
    }
}
