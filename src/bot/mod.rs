//! Discord gateway integration and slash commands.
//!
//! The bot connects to the gateway with a single event handler. On `ready` it replaces
//! the application's commands with the dev guild command set, and every command
//! interaction is dispatched by name to a handler in [`command`].
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild data in the cache, needed for member name lookups
//! - `GUILD_MEMBERS` - Member data for resolving lootsplit recipients (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod recipient;
pub mod start;
