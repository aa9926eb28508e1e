//! Build and read resource URIs carrying simple query intent.
//!
//! A row limit, a filter predicate and its positional arguments travel as the
//! `limit`, `where` and `where_arg` query parameters of a [`ResourceLocator`].
//!
//! ```
//! use uriq_core::codec;
//! use uriq_core::ResourceLocator;
//!
//! let base = ResourceLocator::parse("content://items").unwrap();
//! let uri = codec::with_where(&base, Some("status=?"));
//! let uri = codec::with_where_args(&uri, ["open"]);
//! let uri = codec::with_limit(&uri, 10).unwrap();
//!
//! assert_eq!(codec::get_limit(&uri).as_deref(), Some("10"));
//! assert_eq!(codec::get_where(&uri).as_deref(), Some("status=?"));
//! assert_eq!(codec::get_where_args(&uri), vec!["open"]);
//! ```

pub mod config;
pub mod logging;

pub mod codec;
pub mod intent;
pub mod locator;

pub use codec::CodecError;
pub use intent::QueryIntent;
pub use locator::{LocatorError, ResourceLocator};
