//! Treasury domain models and parameters.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::from_db_id};

/// Kind of treasury movement recorded in the treasury log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreasuryAction {
    /// Admin deposited silver into the treasury.
    Add,
    /// Admin removed silver from the treasury without a recipient.
    Take,
    /// Admin moved silver from the treasury to a member.
    Transfer,
}

impl TreasuryAction {
    /// Value stored in the `action` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Take => "take",
            Self::Transfer => "transfer",
        }
    }

    /// Parses a stored `action` value, `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "add" => Some(Self::Add),
            "take" => Some(Self::Take),
            "transfer" => Some(Self::Transfer),
            _ => None,
        }
    }
}

impl fmt::Display for TreasuryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the treasury history.
///
/// `action` keeps the raw stored value so rows written by other tools still display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreasuryLogEntry {
    pub initiator_id: u64,
    pub action: String,
    pub amount: i64,
    pub recipient_id: Option<u64>,
    pub created_at: DateTime<Utc>,
}

impl TreasuryLogEntry {
    pub fn from_entity(entity: entity::treasury_log::Model) -> Result<Self, AppError> {
        Ok(Self {
            initiator_id: from_db_id(entity.initiator_id)?,
            action: entity.action,
            amount: entity.amount,
            recipient_id: entity.recipient_id.map(from_db_id).transpose()?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for writing a treasury log row.
#[derive(Debug, Clone)]
pub struct CreateTreasuryLogParams {
    pub guild_id: u64,
    pub initiator_id: u64,
    pub action: TreasuryAction,
    pub amount: i64,
    pub recipient_id: Option<u64>,
}

/// Parameters for an admin deposit into the treasury.
#[derive(Debug, Clone)]
pub struct TreasuryDepositParams {
    pub guild_id: u64,
    pub initiator_id: u64,
    pub amount: i64,
}

/// Parameters for an admin withdrawal from the treasury.
#[derive(Debug, Clone)]
pub struct TreasuryWithdrawParams {
    pub guild_id: u64,
    pub initiator_id: u64,
    pub amount: i64,
    /// Member receiving the silver; `None` removes it from circulation.
    pub recipient_id: Option<u64>,
}
