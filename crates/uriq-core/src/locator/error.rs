//! Error type for locator parsing.

/// Raised when a string cannot be parsed as an absolute URI.
#[derive(Debug, thiserror::Error)]
pub enum LocatorError {
    #[error("invalid locator {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: url::ParseError,
    },
}
