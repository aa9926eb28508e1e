//! Immutable resource locator: an absolute URI plus its query parameters.
//!
//! Thin wrapper over `url::Url`. Every mutation produces a new value, so a
//! locator handed to the codec is never changed behind the caller's back.
//! Keys and values are form-encoded on write and decoded on read.

mod error;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

pub use error::LocatorError;

/// An absolute URI such as `content://items?limit=10`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceLocator {
    url: Url,
}

impl ResourceLocator {
    /// Parses an absolute URI.
    pub fn parse(input: &str) -> Result<Self, LocatorError> {
        let url = Url::parse(input).map_err(|source| LocatorError::Parse {
            input: input.to_string(),
            source,
        })?;
        Ok(Self { url })
    }

    /// Serialized form of the locator.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.url
    }

    /// Returns a new locator with `key=value` appended after any existing
    /// parameters. `self` is left untouched.
    pub fn with_query_param(&self, key: &str, value: &str) -> Self {
        self.with_query_params(std::iter::once((key, value)))
    }

    /// Returns a new locator with every pair appended in iteration order.
    ///
    /// An empty iterator yields an identical copy (no dangling `?` is added).
    pub fn with_query_params<'a, I>(&self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut pairs = pairs.into_iter().peekable();
        if pairs.peek().is_none() {
            return self.clone();
        }
        let mut url = self.url.clone();
        {
            let mut serializer = url.query_pairs_mut();
            for (key, value) in pairs {
                serializer.append_pair(key, value);
            }
        }
        Self { url }
    }

    /// First value stored under `key`, if any.
    pub fn query_param(&self, key: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Every value stored under `key`, in the order they appear in the query.
    pub fn query_params(&self, key: &str) -> Vec<String> {
        self.url
            .query_pairs()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .collect()
    }
}

impl From<Url> for ResourceLocator {
    fn from(url: Url) -> Self {
        Self { url }
    }
}

impl From<ResourceLocator> for Url {
    fn from(locator: ResourceLocator) -> Self {
        locator.url
    }
}

impl FromStr for ResourceLocator {
    type Err = LocatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ResourceLocator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResourceLocator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
