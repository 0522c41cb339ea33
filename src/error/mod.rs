//! Error types and user-facing reply mapping.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors. Command
//! handlers return it and the bot layer turns it into an ephemeral reply through
//! [`AppError::user_message`], logging anything the user cannot act on.

pub mod command;
pub mod config;
pub mod economy;
pub mod internal;

use thiserror::Error;

use crate::error::{
    command::CommandError, config::ConfigError, economy::EconomyError, internal::InternalError,
};

/// Reply shown to users when a command fails for a reason they cannot fix.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong, please try again.";

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic error conversion. User-correctable
/// failures (`EconomyErr`, `CommandErr`) carry their reply text in `Display`; the
/// remaining variants are logged and answered with a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Validation or balance failure the invoking user can correct.
    #[error(transparent)]
    EconomyErr(#[from] EconomyError),

    /// Invalid use of a slash command (wrong context, missing permission, bad options).
    #[error(transparent)]
    CommandErr(#[from] CommandError),

    /// Internal invariant violation indicating a bug or corrupt data.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Returns the text to show the invoking user for this error.
    ///
    /// Domain and command errors are shown verbatim. Everything else is logged at
    /// error level and replaced by [`GENERIC_FAILURE_MESSAGE`] so internals never leak
    /// into a channel.
    pub fn user_message(&self) -> String {
        match self {
            Self::EconomyErr(err) => err.to_string(),
            Self::CommandErr(err) => err.to_string(),
            err => {
                tracing::error!("Command failed: {}", err);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// Whether this error is expected user input rather than a failure.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::EconomyErr(_) | Self::CommandErr(_))
    }
}
