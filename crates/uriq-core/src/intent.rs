//! Query intent: limit, where-clause and where-arguments as one value.

use serde::{Deserialize, Serialize};

use crate::codec::{self, CodecError};
use crate::locator::ResourceLocator;

/// Everything a locator can say about the rows a caller wants.
///
/// `limit` is kept as the raw query string on the decode side; it is only
/// checked when the intent is applied to a locator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryIntent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(default, rename = "where", skip_serializing_if = "Option::is_none")]
    pub where_clause: Option<String>,
    #[serde(default)]
    pub where_args: Vec<String>,
}

impl QueryIntent {
    /// Reads limit, where-clause and where-arguments from `locator`.
    pub fn from_locator(locator: &ResourceLocator) -> Self {
        Self {
            limit: codec::get_limit(locator),
            where_clause: codec::get_where(locator),
            where_args: codec::get_where_args(locator),
        }
    }

    /// Writes this intent onto `source`: where-clause, then arguments, then
    /// limit.
    pub fn apply(&self, source: &ResourceLocator) -> Result<ResourceLocator, CodecError> {
        let mut out = codec::with_where(source, self.where_clause.as_deref());
        out = codec::with_where_args(&out, &self.where_args);
        if let Some(raw) = &self.limit {
            let limit: i64 = raw
                .trim()
                .parse()
                .map_err(|_| CodecError::MalformedLimit { raw: raw.clone() })?;
            out = codec::with_limit(&out, limit)?;
        }
        Ok(out)
    }

    pub fn is_empty(&self) -> bool {
        self.limit.is_none() && self.where_clause.is_none() && self.where_args.is_empty()
    }
}
