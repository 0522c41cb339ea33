use crate::error::internal::InternalError;

/// Entries shown per leaderboard page.
pub const LEADERBOARD_PAGE_SIZE: u64 = 10;

/// One ranked wallet on the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// One-based rank across all pages.
    pub rank: u64,
    pub user_id: u64,
    pub wallet: i64,
}

/// A page of the leaderboard.
///
/// `entries` is empty when no member holds a positive balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard {
    pub page: u64,
    pub total_pages: u64,
    /// Sum of all wallets in the guild.
    pub total_owed: i64,
    pub entries: Vec<LeaderboardEntry>,
}

/// Number of pages needed for `count` entries, at least 1.
pub fn total_pages(count: u64) -> u64 {
    count.div_ceil(LEADERBOARD_PAGE_SIZE).max(1)
}

/// The guild's real position once treasury and member wallets are accounted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuildBalance {
    /// Silver physically on hand, as reported by the admin.
    pub on_hand: i64,
    pub treasury: i64,
    /// Sum of all member wallets.
    pub owed: i64,
    /// `on_hand - treasury - owed`.
    pub actual: i64,
}

impl GuildBalance {
    /// # Returns
    /// - `Ok(GuildBalance)` - Balance with `actual` computed
    /// - `Err(InternalError::BalanceOverflow)` - `actual` does not fit into an `i64`
    pub fn new(on_hand: i64, treasury: i64, owed: i64) -> Result<Self, InternalError> {
        let actual = on_hand
            .checked_sub(treasury)
            .and_then(|rest| rest.checked_sub(owed))
            .ok_or(InternalError::BalanceOverflow {
                on_hand,
                treasury,
                owed,
            })?;

        Ok(Self {
            on_hand,
            treasury,
            owed,
            actual,
        })
    }
}
