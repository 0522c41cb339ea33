//! Lootsplit domain models, parameters and the split arithmetic.

use chrono::{DateTime, Utc};

use crate::error::economy::EconomyError;

/// Amounts of a lootsplit derived from total, tax and recipient count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LootsplitPlan {
    pub total: i64,
    /// Tax percentage between 0 and 100.
    pub tax_percent: i64,
    /// `floor(total * tax_percent / 100)`, credited to the treasury.
    pub tax_amount: i64,
    /// `total - tax_amount`, the amount divided among recipients.
    pub remaining: i64,
    /// `floor(remaining / recipients)`, credited to each recipient.
    pub share: i64,
}

impl LootsplitPlan {
    /// Validates the input and computes the split.
    ///
    /// The remainder of `remaining / recipients` is not distributed.
    ///
    /// # Returns
    /// - `Ok(LootsplitPlan)` - Every recipient receives a positive share
    /// - `Err(EconomyError::TotalNotPositive)` - `total <= 0`
    /// - `Err(EconomyError::TaxOutOfRange)` - tax outside `0..=100`
    /// - `Err(EconomyError::NoRecipientsGiven)` - no recipients
    /// - `Err(EconomyError::NothingToSplit)` - the share would be zero
    pub fn compute(
        total: i64,
        tax_percent: i64,
        recipients: usize,
    ) -> Result<Self, EconomyError> {
        validate_terms(total, tax_percent)?;

        if recipients == 0 {
            return Err(EconomyError::NoRecipientsGiven);
        }

        // i128 keeps total * 100 from overflowing; the quotient never exceeds total
        let tax_amount = (i128::from(total) * i128::from(tax_percent) / 100) as i64;
        let remaining = total - tax_amount;
        let share = remaining / recipients as i64;

        if share <= 0 {
            return Err(EconomyError::NothingToSplit);
        }

        Ok(Self {
            total,
            tax_percent,
            tax_amount,
            remaining,
            share,
        })
    }
}

/// Checks total and tax before any recipient lookup is attempted.
pub fn validate_terms(total: i64, tax_percent: i64) -> Result<(), EconomyError> {
    if total <= 0 {
        return Err(EconomyError::TotalNotPositive);
    }

    if !(0..=100).contains(&tax_percent) {
        return Err(EconomyError::TaxOutOfRange);
    }

    Ok(())
}

/// Parameters for splitting loot among resolved guild members.
#[derive(Debug, Clone)]
pub struct LootsplitParams {
    pub guild_id: u64,
    pub initiator_id: u64,
    pub total: i64,
    pub tax_percent: i64,
    /// Distinct member ids receiving a share, in display order.
    pub recipients: Vec<u64>,
}

/// Result of a completed lootsplit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lootsplit {
    pub plan: LootsplitPlan,
    pub recipients: Vec<u64>,
}

/// Parameters for writing a lootsplit log row and its recipient rows.
#[derive(Debug, Clone)]
pub struct CreateLootsplitLogParams {
    pub guild_id: u64,
    pub initiator_id: u64,
    pub plan: LootsplitPlan,
    pub recipients: Vec<u64>,
}

/// One row of the lootsplit history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LootsplitLogEntry {
    pub initiator_id: u64,
    pub total: i64,
    pub tax_percent: i64,
    pub share: i64,
    pub recipient_ids: Vec<u64>,
    pub created_at: DateTime<Utc>,
}

/// Parses the comma separated recipient column, skipping blank or malformed items.
pub fn parse_recipient_csv(value: &str) -> Vec<u64> {
    value
        .split(',')
        .filter_map(|item| item.trim().parse::<u64>().ok())
        .collect()
}

/// Renders recipient ids for the comma separated recipient column.
pub fn recipient_csv(recipients: &[u64]) -> String {
    recipients
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
