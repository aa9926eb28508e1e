//! `uriq encode [base]` – append query intent to a base URI.

use anyhow::{Context, Result};
use uriq_core::codec;
use uriq_core::config::UriqConfig;
use uriq_core::ResourceLocator;

use crate::cli::EncodeArgs;

pub fn run_encode(cfg: &UriqConfig, args: &EncodeArgs) -> Result<()> {
    let uri = build_locator(cfg, args)?;
    println!("{uri}");
    Ok(())
}

/// Resolves the base locator, then appends where, args, extra params and limit.
pub(crate) fn build_locator(cfg: &UriqConfig, args: &EncodeArgs) -> Result<ResourceLocator> {
    let base = match (&args.base, &cfg.default_base) {
        (Some(raw), _) => ResourceLocator::parse(raw)?,
        (None, Some(default)) => default.clone(),
        (None, None) => anyhow::bail!("no base URI given and no default_base in config"),
    };

    let mut uri = codec::with_where(&base, args.where_clause.as_deref());
    uri = codec::with_where_args(&uri, &args.args);
    for (key, value) in &args.params {
        uri = codec::with_param(&uri, key, Some(value.as_str()));
    }
    if let Some(limit) = args.limit {
        uri = codec::with_limit(&uri, limit).context("encode limit")?;
    }
    tracing::debug!(base = %base, uri = %uri, "encoded query locator");
    Ok(uri)
}
