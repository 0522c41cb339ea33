use thiserror::Error;

/// Misuse of a slash command that is reported back to the invoking user.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Command invoked outside of a guild (e.g. in a DM).
    #[error("This command can only be used in a server.")]
    GuildOnly,

    /// Admin command invoked by a member without the Administrator permission.
    #[error("You need the Administrator permission to use this command.")]
    AdministratorRequired,

    /// A required option was missing or had an unexpected type.
    #[error("Missing or invalid option `{0}`.")]
    InvalidOption(&'static str),

    /// Interaction for a command this bot does not register.
    #[error("Unknown command `{0}`.")]
    UnknownCommand(String),
}
