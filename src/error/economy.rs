use thiserror::Error;

/// Validation and balance failures of ledger operations.
///
/// The `Display` output of each variant is the exact reply shown to the user.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EconomyError {
    #[error("Amount must be positive.")]
    AmountNotPositive,

    #[error("Amount must be 0 or positive.")]
    AmountNegative,

    #[error("Total must be positive.")]
    TotalNotPositive,

    #[error("Tax must be 0-100.")]
    TaxOutOfRange,

    #[error("You can't pay yourself.")]
    SelfTransfer,

    /// Sender of a transfer does not hold the amount.
    #[error("Not enough silver.")]
    InsufficientFunds,

    /// Admin removal would drive a wallet negative.
    #[error("Insufficient balance; no silver was removed.")]
    InsufficientBalance,

    #[error("Treasury has insufficient funds.")]
    InsufficientTreasury,

    /// Share per recipient after tax rounds down to zero.
    #[error("Not enough silver to split.")]
    NothingToSplit,

    /// Neither mentions, ids nor `@name` tokens were found.
    #[error("Provide mentions or user IDs. Example: @User1 @User2 or 123... 456...")]
    NoRecipientsGiven,

    /// Ids were given but none resolved to a member of the guild.
    #[error(
        "No valid users found. Make sure the users are in this server. IDs: {preview} | NotFound: {not_found} Forbidden: {forbidden} HTTP: {http}"
    )]
    NoRecipientsResolved {
        /// Up to five of the given ids, comma separated
        preview: String,
        not_found: usize,
        forbidden: usize,
        http: usize,
    },

    /// `@name` tokens were given but none matched a cached member.
    #[error("No valid users found. Make sure the users are in this server.")]
    NoNamedRecipients,

    #[error("Page out of range. Max page is {max_page}.")]
    PageOutOfRange { max_page: u64 },
}
