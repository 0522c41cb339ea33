//! Resolution of lootsplit recipients to guild members.

use std::collections::BTreeSet;
use std::num::NonZeroU64;

use serenity::all::{Context, GuildId, HttpError, UserId};
use serenity::async_trait;

use crate::{error::economy::EconomyError, util::mention::RecipientQuery};

/// Ids shown in the "no valid users" reply.
const PREVIEW_IDS: usize = 5;

/// Why a user id could not be resolved to a guild member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupFailure {
    /// Discord answered 404, the user is not in the guild.
    NotFound,
    /// Discord answered 403.
    Forbidden,
    /// Any other HTTP or transport error.
    Http,
}

impl LookupFailure {
    pub fn from_error(err: &serenity::Error) -> Self {
        match err {
            serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
                match response.status_code.as_u16() {
                    404 => Self::NotFound,
                    403 => Self::Forbidden,
                    _ => Self::Http,
                }
            }
            _ => Self::Http,
        }
    }
}

/// Source of guild membership used to resolve recipients.
#[async_trait]
pub trait MemberLookup: Send + Sync {
    /// Checks that `user_id` is a member of the guild.
    async fn find_member(&self, user_id: u64) -> Result<(), LookupFailure>;

    /// Finds a member by user name, global name or nickname.
    fn find_member_named(&self, name: &str) -> Option<u64>;
}

/// Converts a parsed id to a [`UserId`]; `0` is no valid snowflake.
fn to_user_id(user_id: u64) -> Result<UserId, LookupFailure> {
    NonZeroU64::new(user_id)
        .map(UserId::from)
        .ok_or(LookupFailure::NotFound)
}

/// Member lookup against the serenity cache, falling back to the HTTP API.
pub struct GuildMembers<'a> {
    ctx: &'a Context,
    guild_id: GuildId,
}

impl<'a> GuildMembers<'a> {
    pub fn new(ctx: &'a Context, guild_id: u64) -> Self {
        Self {
            ctx,
            guild_id: GuildId::new(guild_id),
        }
    }
}

#[async_trait]
impl MemberLookup for GuildMembers<'_> {
    async fn find_member(&self, user_id: u64) -> Result<(), LookupFailure> {
        let user_id = to_user_id(user_id)?;

        let cached = self
            .ctx
            .cache
            .guild(self.guild_id)
            .is_some_and(|guild| guild.members.contains_key(&user_id));
        if cached {
            return Ok(());
        }

        match self.ctx.http.get_member(self.guild_id, user_id).await {
            Ok(_) => Ok(()),
            Err(e) => {
                let failure = LookupFailure::from_error(&e);
                tracing::debug!("Failed to fetch member {}: {:?} ({})", user_id, failure, e);
                Err(failure)
            }
        }
    }

    fn find_member_named(&self, name: &str) -> Option<u64> {
        let guild = self.ctx.cache.guild(self.guild_id)?;
        let user_id = guild.member_named(name).map(|member| member.user.id.get());

        user_id
    }
}

/// Resolves parsed recipients to the ids of guild members.
///
/// Ids are checked in ascending order; names keep their input order. The result holds
/// no duplicates.
///
/// # Returns
/// - `Ok(Vec<u64>)` - At least one resolved member
/// - `Err(EconomyError::NoRecipientsResolved)` - Ids given, none are members
/// - `Err(EconomyError::NoNamedRecipients)` - Names given, none matched
/// - `Err(EconomyError::NoRecipientsGiven)` - Nothing usable in the input
pub async fn resolve_recipients(
    members: &impl MemberLookup,
    query: RecipientQuery,
) -> Result<Vec<u64>, EconomyError> {
    match query {
        RecipientQuery::Ids { ids, oversized } => resolve_ids(members, &ids, &oversized).await,
        RecipientQuery::Names(names) => {
            let mut resolved: Vec<u64> = Vec::new();
            for name in &names {
                if let Some(user_id) = members.find_member_named(name) {
                    if !resolved.contains(&user_id) {
                        resolved.push(user_id);
                    }
                }
            }

            if resolved.is_empty() {
                return Err(EconomyError::NoNamedRecipients);
            }

            Ok(resolved)
        }
        RecipientQuery::Empty => Err(EconomyError::NoRecipientsGiven),
    }
}

async fn resolve_ids(
    members: &impl MemberLookup,
    ids: &BTreeSet<u64>,
    oversized: &[String],
) -> Result<Vec<u64>, EconomyError> {
    let mut resolved = Vec::new();
    // Discord rejects ids outside the snowflake range with a 400
    let (mut not_found, mut forbidden, mut http) = (0, 0, oversized.len());

    for &user_id in ids {
        match members.find_member(user_id).await {
            Ok(()) => resolved.push(user_id),
            Err(LookupFailure::NotFound) => not_found += 1,
            Err(LookupFailure::Forbidden) => forbidden += 1,
            Err(LookupFailure::Http) => http += 1,
        }
    }

    if resolved.is_empty() {
        let preview = ids
            .iter()
            .map(|id| id.to_string())
            .chain(oversized.iter().cloned())
            .take(PREVIEW_IDS)
            .collect::<Vec<_>>()
            .join(", ");

        return Err(EconomyError::NoRecipientsResolved {
            preview,
            not_found,
            forbidden,
            http,
        });
    }

    Ok(resolved)
}
