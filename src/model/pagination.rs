/// Upper bound for history page sizes.
pub const MAX_PAGE_SIZE: u64 = 10;

/// A clamped page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// One-based page number, at least 1.
    pub page: u64,
    /// Entries per page, between 1 and [`MAX_PAGE_SIZE`].
    pub limit: u64,
}

impl PageRequest {
    /// Builds a page request from raw command input.
    ///
    /// `limit` is clamped to `1..=MAX_PAGE_SIZE` and `page` to at least 1.
    pub fn new(limit: i64, page: i64) -> Self {
        Self {
            page: clamp_page(page),
            limit: limit.clamp(1, MAX_PAGE_SIZE as i64) as u64,
        }
    }

    /// Number of entries to skip.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Clamps a raw page number to at least 1.
pub fn clamp_page(page: i64) -> u64 {
    page.max(1) as u64
}

/// A page of history entries, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPage<T> {
    /// Requested page, `None` when the whole history was returned.
    pub page: Option<u64>,
    pub entries: Vec<T>,
}
