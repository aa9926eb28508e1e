//! Encode and decode limit, where-clause and where-arguments as URI query
//! parameters.
//!
//! All functions are pure: encoders return a new [`ResourceLocator`] and
//! never touch their input. Absent or empty inputs are no-ops rather than
//! errors; the only failure is a non-positive limit.

mod error;

use crate::locator::ResourceLocator;

pub use error::CodecError;

/// Key holding the maximum number of rows wanted in the response.
pub const KEY_LIMIT: &str = "limit";
/// Key holding the opaque filter predicate.
pub const KEY_WHERE: &str = "where";
/// Repeatable key holding positional filter arguments.
pub const KEY_WHERE_ARG: &str = "where_arg";

/// Appends `limit=<n>`.
///
/// # Errors
///
/// [`CodecError::InvalidLimit`] when `limit <= 0`.
///
/// # Examples
///
/// - `with_limit(content://items, 10)` → `content://items?limit=10`
/// - `with_limit(content://items, 0)` → `Err(InvalidLimit)`
pub fn with_limit(source: &ResourceLocator, limit: i64) -> Result<ResourceLocator, CodecError> {
    if limit <= 0 {
        tracing::debug!(locator = %source, limit, "rejecting non-positive limit");
        return Err(CodecError::InvalidLimit {
            limit,
            locator: source.to_string(),
        });
    }
    Ok(source.with_query_param(KEY_LIMIT, &limit.to_string()))
}

/// Raw limit value, or `None` when the key is missing.
///
/// The value is not parsed; `limit=abc` yields `Some("abc")`.
pub fn get_limit(locator: &ResourceLocator) -> Option<String> {
    locator.query_param(KEY_LIMIT)
}

/// Like [`get_limit`] but returns `fallback` when the key is missing.
pub fn get_limit_or(locator: &ResourceLocator, fallback: impl Into<String>) -> String {
    get_limit(locator).unwrap_or_else(|| fallback.into())
}

/// Appends `where=<clause>` unless `clause` is `None` or empty.
pub fn with_where(source: &ResourceLocator, clause: Option<&str>) -> ResourceLocator {
    with_param(source, KEY_WHERE, clause)
}

/// Appends `key=value` unless `value` is `None` or empty, in which case an
/// unchanged copy of `source` is returned.
pub fn with_param(source: &ResourceLocator, key: &str, value: Option<&str>) -> ResourceLocator {
    match value {
        Some(value) if !value.is_empty() => {
            tracing::trace!(locator = %source, key, "appending query parameter");
            source.with_query_param(key, value)
        }
        _ => source.clone(),
    }
}

/// First value stored under `key`.
pub fn get_param(locator: &ResourceLocator, key: &str) -> Option<String> {
    locator.query_param(key)
}

/// Where-clause, or `None` when it is missing or empty.
pub fn get_where(locator: &ResourceLocator) -> Option<String> {
    locator.query_param(KEY_WHERE).filter(|w| !w.is_empty())
}

/// Like [`get_where`] but returns `fallback` when the clause is missing or
/// empty.
pub fn get_where_or(locator: &ResourceLocator, fallback: impl Into<String>) -> String {
    get_where(locator).unwrap_or_else(|| fallback.into())
}

/// Appends each argument under `where_arg`, in order.
///
/// No arguments means no change. Individual empty strings are kept so that
/// positional placeholders stay aligned.
pub fn with_where_args<I, S>(source: &ResourceLocator, args: I) -> ResourceLocator
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    if args.is_empty() {
        return source.clone();
    }
    tracing::trace!(locator = %source, count = args.len(), "appending where arguments");
    source.with_query_params(args.iter().map(|arg| (KEY_WHERE_ARG, arg.as_ref())))
}

/// Every `where_arg` value in append order; empty when there are none.
pub fn get_where_args(locator: &ResourceLocator) -> Vec<String> {
    locator.query_params(KEY_WHERE_ARG)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ResourceLocator {
        ResourceLocator::parse("content://items").unwrap()
    }

    #[test]
    fn limit_round_trip() {
        let loc = with_limit(&base(), 10).unwrap();
        assert_eq!(loc.as_str(), "content://items?limit=10");
        assert_eq!(get_limit(&loc).as_deref(), Some("10"));
    }

    #[test]
    fn limit_rejects_zero_and_negative() {
        for bad in [0, -1, i64::MIN] {
            match with_limit(&base(), bad) {
                Err(CodecError::InvalidLimit { limit, locator }) => {
                    assert_eq!(limit, bad);
                    assert_eq!(locator, "content://items");
                }
                other => panic!("expected InvalidLimit, got {other:?}"),
            }
        }
    }

    #[test]
    fn invalid_limit_message_names_locator() {
        let err = with_limit(&base(), -3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot create a locator based on content://items with limit=-3"
        );
    }

    #[test]
    fn limit_missing_uses_fallback() {
        assert_eq!(get_limit(&base()), None);
        assert_eq!(get_limit_or(&base(), "25"), "25");
    }

    #[test]
    fn limit_is_returned_raw() {
        let loc = ResourceLocator::parse("content://items?limit=abc").unwrap();
        assert_eq!(get_limit(&loc).as_deref(), Some("abc"));
        let empty = ResourceLocator::parse("content://items?limit=").unwrap();
        assert_eq!(get_limit_or(&empty, "5"), "");
    }

    #[test]
    fn where_round_trip() {
        let loc = with_where(&base(), Some("status=?"));
        assert_eq!(get_where(&loc).as_deref(), Some("status=?"));
    }

    #[test]
    fn where_empty_or_absent_is_noop() {
        let loc = base();
        assert_eq!(with_where(&loc, Some("")), loc);
        assert_eq!(with_where(&loc, None), loc);
        assert_eq!(with_where(&loc, None).as_str(), "content://items");
    }

    #[test]
    fn where_empty_value_reads_as_fallback() {
        let loc = ResourceLocator::parse("content://items?where=").unwrap();
        assert_eq!(get_where(&loc), None);
        assert_eq!(get_where_or(&loc, "1=1"), "1=1");
        assert_eq!(get_where_or(&base(), "1=1"), "1=1");
    }

    #[test]
    fn generic_param() {
        let loc = with_param(&base(), "sort", Some("name ASC"));
        assert_eq!(get_param(&loc, "sort").as_deref(), Some("name ASC"));
        assert_eq!(get_param(&loc, "missing"), None);
        assert_eq!(with_param(&loc, "sort", Some("")), loc);
        assert_eq!(with_param(&loc, "sort", None), loc);
    }

    #[test]
    fn where_args_keep_order_and_duplicates() {
        let loc = with_where_args(&base(), ["A", "B", "A", "C"]);
        assert_eq!(get_where_args(&loc), vec!["A", "B", "A", "C"]);
    }

    #[test]
    fn where_args_empty_is_noop() {
        let loc = base();
        let none: [&str; 0] = [];
        assert_eq!(with_where_args(&loc, none), loc);
        assert!(get_where_args(&loc).is_empty());
    }

    #[test]
    fn where_args_accept_owned_strings() {
        let args = vec![String::from("x"), String::new()];
        let loc = with_where_args(&base(), &args);
        assert_eq!(get_where_args(&loc), vec!["x", ""]);
    }

    #[test]
    fn where_and_limit_combined() {
        let loc = with_limit(&with_where(&base(), Some("status=?")), 10).unwrap();
        assert_eq!(get_limit(&loc).as_deref(), Some("10"));
        assert_eq!(get_where(&loc).as_deref(), Some("status=?"));
    }

    #[test]
    fn encoding_does_not_mutate_input() {
        let loc = base();
        let _ = with_limit(&loc, 5).unwrap();
        let _ = with_where(&loc, Some("a=?"));
        let _ = with_where_args(&loc, ["1"]);
        assert_eq!(loc.as_str(), "content://items");
    }
}
