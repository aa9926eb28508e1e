//! Error type for query-intent encoding.

/// Raised when query intent cannot be written into a locator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// `with_limit` was given zero or a negative row count.
    #[error("cannot create a locator based on {locator} with limit={limit}")]
    InvalidLimit { limit: i64, locator: String },
    /// A textual limit did not parse as an integer.
    #[error("limit {raw:?} is not an integer")]
    MalformedLimit { raw: String },
}
