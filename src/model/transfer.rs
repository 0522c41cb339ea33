use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::from_db_id};

/// One row of the transfer history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferLogEntry {
    pub sender_id: u64,
    pub receiver_id: u64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

impl TransferLogEntry {
    pub fn from_entity(entity: entity::transfer_log::Model) -> Result<Self, AppError> {
        Ok(Self {
            sender_id: from_db_id(entity.sender_id)?,
            receiver_id: from_db_id(entity.receiver_id)?,
            amount: entity.amount,
            created_at: entity.created_at,
        })
    }
}
