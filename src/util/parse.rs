use crate::error::internal::InternalError;

/// Converts a Discord snowflake into the `i64` stored in the database.
///
/// # Returns
/// - `Ok(i64)` - The id as a database integer
/// - `Err(InternalError::IdOutOfRange)` - The snowflake exceeds `i64::MAX`
pub fn to_db_id(value: u64) -> Result<i64, InternalError> {
    i64::try_from(value).map_err(|_| InternalError::IdOutOfRange { value })
}

/// Converts a stored database integer back into a Discord snowflake.
///
/// # Returns
/// - `Ok(u64)` - The snowflake
/// - `Err(InternalError::StoredIdNegative)` - The stored value is negative
pub fn from_db_id(value: i64) -> Result<u64, InternalError> {
    u64::try_from(value).map_err(|_| InternalError::StoredIdNegative { value })
}
