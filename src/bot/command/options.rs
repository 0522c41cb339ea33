//! Typed access to slash command options.

use serenity::all::{CommandDataOptionValue, CommandInteraction};

use crate::error::command::CommandError;

fn find<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a CommandDataOptionValue> {
    command
        .data
        .options
        .iter()
        .find(|option| option.name == name)
        .map(|option| &option.value)
}

pub fn get_int(command: &CommandInteraction, name: &str) -> Option<i64> {
    find(command, name).and_then(|value| value.as_i64())
}

pub fn get_user(command: &CommandInteraction, name: &str) -> Option<u64> {
    find(command, name)
        .and_then(|value| value.as_user_id())
        .map(|user_id| user_id.get())
}

pub fn get_str<'a>(command: &'a CommandInteraction, name: &str) -> Option<&'a str> {
    find(command, name).and_then(|value| value.as_str())
}

/// Gets a required integer option.
///
/// Discord enforces required options, so a miss means the registered command and the
/// handler disagree.
pub fn require_int(command: &CommandInteraction, name: &'static str) -> Result<i64, CommandError> {
    get_int(command, name).ok_or(CommandError::InvalidOption(name))
}

pub fn require_user(command: &CommandInteraction, name: &'static str) -> Result<u64, CommandError> {
    get_user(command, name).ok_or(CommandError::InvalidOption(name))
}

pub fn require_str<'a>(
    command: &'a CommandInteraction,
    name: &'static str,
) -> Result<&'a str, CommandError> {
    get_str(command, name).ok_or(CommandError::InvalidOption(name))
}
