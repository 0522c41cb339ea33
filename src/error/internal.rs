use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A Discord snowflake does not fit into the signed 64-bit column it is stored in.
    #[error("Discord ID {value} does not fit into a database integer")]
    IdOutOfRange {
        /// The snowflake that failed to convert
        value: u64,
    },

    /// A stored Discord ID is negative and cannot be turned back into a snowflake.
    #[error("Stored Discord ID {value} is negative")]
    StoredIdNegative {
        /// The value read from the database
        value: i64,
    },

    /// The guild's actual balance does not fit into a signed 64-bit integer.
    #[error("Actual balance of {on_hand} - {treasury} - {owed} overflows")]
    BalanceOverflow {
        on_hand: i64,
        treasury: i64,
        owed: i64,
    },
}
