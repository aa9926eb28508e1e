//! `uriq get <uri> <key>` – print a raw query parameter.

use anyhow::Result;
use uriq_core::codec;
use uriq_core::ResourceLocator;

pub fn run_get(uri: &str, key: &str, all: bool) -> Result<()> {
    let locator = ResourceLocator::parse(uri)?;
    for value in lookup(&locator, key, all)? {
        println!("{value}");
    }
    Ok(())
}

/// First value for `key`, or every value in append order when `all` is set.
/// Errors when the key is absent.
pub(crate) fn lookup(locator: &ResourceLocator, key: &str, all: bool) -> Result<Vec<String>> {
    let values = if all {
        locator.query_params(key)
    } else {
        codec::get_param(locator, key).into_iter().collect()
    };
    if values.is_empty() {
        anyhow::bail!("no value for key {key:?} in {locator}");
    }
    Ok(values)
}
