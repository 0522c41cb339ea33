use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, GuildId, Interaction, Permissions,
};

use crate::{
    bot::command::{self, reply::Reply, Invocation, SlashCommand},
    error::{command::CommandError, AppError},
};

/// Handles an interaction, answering slash commands.
///
/// Other interaction kinds are ignored since the bot registers no components.
pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let Some(slash) = SlashCommand::from_name(&command.data.name) else {
        tracing::warn!("Received unknown command /{}", command.data.name);
        let err = AppError::from(CommandError::UnknownCommand(command.data.name.clone()));
        respond(&ctx, &command, Reply::ephemeral(err.user_message())).await;
        return;
    };

    let permissions = command.member.as_ref().and_then(|member| member.permissions);

    let guild_id = match authorize(slash, command.guild_id, permissions) {
        Ok(guild_id) => guild_id,
        Err(err) => {
            respond(&ctx, &command, Reply::ephemeral(err.to_string())).await;
            return;
        }
    };

    tracing::debug!(
        guild_id,
        user_id = command.user.id.get(),
        "Running /{}",
        slash.name()
    );

    let invocation = Invocation {
        ctx: &ctx,
        command: &command,
        db,
        guild_id,
        user_id: command.user.id.get(),
    };

    let reply = match command::run(slash, &invocation).await {
        Ok(Some(reply)) => reply,
        Ok(None) => return,
        Err(err) => {
            if err.is_user_error() {
                tracing::debug!("/{} rejected: {}", slash.name(), err);
            }
            Reply::ephemeral(err.user_message())
        }
    };

    respond(&ctx, &command, reply).await;
}

/// Checks that the command runs in a guild and, for admin commands, that the
/// invoking member holds the Administrator permission.
///
/// `permissions` are the resolved permissions Discord sends with the invoking member.
///
/// # Returns
/// - `Ok(u64)` - Id of the guild the command was invoked in
/// - `Err(CommandError::GuildOnly)` - Invoked outside of a guild
/// - `Err(CommandError::AdministratorRequired)` - Admin command without permission
fn authorize(
    slash: SlashCommand,
    guild_id: Option<GuildId>,
    permissions: Option<Permissions>,
) -> Result<u64, CommandError> {
    let guild_id = guild_id.ok_or(CommandError::GuildOnly)?;

    if slash.requires_admin() {
        let is_admin = permissions.is_some_and(|permissions| permissions.administrator());

        if !is_admin {
            return Err(CommandError::AdministratorRequired);
        }
    }

    Ok(guild_id.get())
}

async fn respond(ctx: &Context, command: &CommandInteraction, reply: Reply) {
    if let Err(e) = command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(reply.into_message()),
        )
        .await
    {
        tracing::error!("Failed to respond to /{}: {}", command.data.name, e);
    }
}
