//! Slash command definitions and dispatch.
//!
//! Each command handler receives an [`Invocation`] and returns the [`Reply`] to send,
//! except `sync` which defers and answers with a follow-up.
//!
//! Guild and permission checks happen before dispatch, so handlers can rely on
//! `guild_id` being the guild the command was used in.

pub mod account;
pub mod history;
pub mod leaderboard;
pub mod lootsplit;
pub mod options;
pub mod reply;
pub mod sync;
pub mod treasury;

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions,
};

use crate::{bot::command::reply::Reply, error::AppError};

/// A slash command invocation with its guild context resolved.
pub struct Invocation<'a> {
    pub ctx: &'a Context,
    pub command: &'a CommandInteraction,
    pub db: &'a DatabaseConnection,
    pub guild_id: u64,
    /// Member who invoked the command.
    pub user_id: u64,
}

/// Every slash command the bot registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashCommand {
    Balance,
    Treasury,
    Lootsplit,
    GiveSilver,
    TreasuryAdd,
    TakeSilver,
    TreasuryTake,
    Transfer,
    LootsplitHistory,
    TransferHistory,
    TreasuryHistory,
    Leaderboard,
    GuildBalance,
    Sync,
}

impl SlashCommand {
    pub const ALL: [SlashCommand; 14] = [
        Self::Balance,
        Self::Treasury,
        Self::Lootsplit,
        Self::GiveSilver,
        Self::TreasuryAdd,
        Self::TakeSilver,
        Self::TreasuryTake,
        Self::Transfer,
        Self::LootsplitHistory,
        Self::TransferHistory,
        Self::TreasuryHistory,
        Self::Leaderboard,
        Self::GuildBalance,
        Self::Sync,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Treasury => "treasury",
            Self::Lootsplit => "lootsplit",
            Self::GiveSilver => "give_silver",
            Self::TreasuryAdd => "treasury_add",
            Self::TakeSilver => "take_silver",
            Self::TreasuryTake => "treasury_take",
            Self::Transfer => "transfer",
            Self::LootsplitHistory => "lootsplit_history",
            Self::TransferHistory => "transfer_history",
            Self::TreasuryHistory => "treasury_history",
            Self::Leaderboard => "leaderboard",
            Self::GuildBalance => "guild_balance",
            Self::Sync => "sync",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Whether only members with the Administrator permission may use the command.
    pub fn requires_admin(&self) -> bool {
        !matches!(
            self,
            Self::Balance | Self::Lootsplit | Self::Transfer | Self::Leaderboard
        )
    }

    fn description(&self) -> &'static str {
        match self {
            Self::Balance => "Check a user's silver balance",
            Self::Treasury => "Check the guild treasury balance",
            Self::Lootsplit => "Split silver among mentioned users with tax",
            Self::GiveSilver => "Add silver to a user's balance",
            Self::TreasuryAdd => "Add silver to the guild treasury",
            Self::TakeSilver => "Remove silver from a user's balance",
            Self::TreasuryTake => "Remove silver from the treasury, optionally to a user",
            Self::Transfer => "Send silver to another user",
            Self::LootsplitHistory => "Show recent lootsplit history",
            Self::TransferHistory => "Show recent transfer history",
            Self::TreasuryHistory => "Show recent treasury activity",
            Self::Leaderboard => "Show richest users in the server",
            Self::GuildBalance => "Calculate the guild's actual balance",
            Self::Sync => "Sync application commands (admin only)",
        }
    }

    fn options(&self) -> Vec<CreateCommandOption> {
        match self {
            Self::Balance => vec![user_option("member", "User to check (defaults to you)", false)],
            Self::Treasury | Self::Sync => Vec::new(),
            Self::Lootsplit => vec![
                int_option("total", "Total silver", true),
                int_option("tax", "Tax percent", true),
                CreateCommandOption::new(CommandOptionType::String, "users", "Mention users")
                    .required(true),
            ],
            Self::GiveSilver => vec![
                user_option("member", "User to receive silver", true),
                int_option("amount", "Amount to add", true),
            ],
            Self::TreasuryAdd => vec![int_option("amount", "Amount to add", true)],
            Self::TakeSilver => vec![
                user_option("member", "User to remove silver from", true),
                int_option("amount", "Amount to remove", true),
            ],
            Self::TreasuryTake => vec![
                int_option("amount", "Amount to remove", true),
                user_option("member", "User to receive the silver", false),
            ],
            Self::Transfer => vec![
                user_option("member", "User to receive silver", true),
                int_option("amount", "Amount to send", true),
            ],
            Self::LootsplitHistory | Self::TransferHistory => vec![
                int_option("limit", "Number of entries per page (max 10)", false),
                int_option("page", "Page number", false),
            ],
            Self::TreasuryHistory => vec![
                int_option("limit", "Optional number of entries per page (max 10)", false),
                int_option("page", "Page number", false),
            ],
            Self::Leaderboard => vec![int_option("page", "Page number (10 per page)", false)],
            Self::GuildBalance => vec![int_option("amount", "Total silver on hand", true)],
        }
    }

    /// Builds the registration payload for this command.
    pub fn register(&self) -> CreateCommand {
        let mut command = CreateCommand::new(self.name())
            .description(self.description())
            .dm_permission(false)
            .set_options(self.options());

        if self.requires_admin() {
            command = command.default_member_permissions(Permissions::ADMINISTRATOR);
        }

        command
    }
}

/// Creates all slash commands for registration
pub fn create_commands() -> Vec<CreateCommand> {
    SlashCommand::ALL.iter().map(SlashCommand::register).collect()
}

/// Runs a command.
///
/// # Returns
/// - `Ok(Some(Reply))` - Reply to send as the interaction response
/// - `Ok(None)` - The handler already responded (deferred commands)
/// - `Err(AppError)` - Command failed, answered ephemerally by the caller
pub async fn run(
    slash: SlashCommand,
    invocation: &Invocation<'_>,
) -> Result<Option<Reply>, AppError> {
    let reply = match slash {
        SlashCommand::Balance => account::balance(invocation).await?,
        SlashCommand::GiveSilver => account::give_silver(invocation).await?,
        SlashCommand::TakeSilver => account::take_silver(invocation).await?,
        SlashCommand::Transfer => account::transfer(invocation).await?,
        SlashCommand::Treasury => treasury::treasury(invocation).await?,
        SlashCommand::TreasuryAdd => treasury::treasury_add(invocation).await?,
        SlashCommand::TreasuryTake => treasury::treasury_take(invocation).await?,
        SlashCommand::Lootsplit => lootsplit::lootsplit(invocation).await?,
        SlashCommand::LootsplitHistory => history::lootsplit_history(invocation).await?,
        SlashCommand::TransferHistory => history::transfer_history(invocation).await?,
        SlashCommand::TreasuryHistory => history::treasury_history(invocation).await?,
        SlashCommand::Leaderboard => leaderboard::leaderboard(invocation).await?,
        SlashCommand::GuildBalance => leaderboard::guild_balance(invocation).await?,
        SlashCommand::Sync => {
            sync::sync(invocation).await?;
            return Ok(None);
        }
    };

    Ok(Some(reply))
}

fn int_option(name: &str, description: &str, required: bool) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Integer, name, description).required(required)
}

fn user_option(name: &str, description: &str, required: bool) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::User, name, description).required(required)
}
