//! `uriq decode <uri>` – print the query intent carried by a URI.

use anyhow::Result;
use uriq_core::codec;
use uriq_core::config::{OutputFormat, UriqConfig};
use uriq_core::{QueryIntent, ResourceLocator};

pub fn run_decode(cfg: &UriqConfig, uri: &str, json: bool) -> Result<()> {
    let locator = ResourceLocator::parse(uri)?;
    let intent = decode_with_fallbacks(cfg, &locator);
    print!("{}", render(&intent, choose_format(cfg, json))?);
    Ok(())
}

/// `--json` wins; otherwise the configured default.
pub(crate) fn choose_format(cfg: &UriqConfig, json: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else {
        cfg.output
    }
}

pub(crate) fn render(intent: &QueryIntent, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(intent)?),
        OutputFormat::Text => render_text(intent),
    })
}

/// Decodes `locator`, substituting the configured fallbacks for a missing
/// limit or where-clause.
pub(crate) fn decode_with_fallbacks(cfg: &UriqConfig, locator: &ResourceLocator) -> QueryIntent {
    let mut intent = QueryIntent::from_locator(locator);
    if let Some(fallback) = &cfg.fallback_limit {
        intent.limit = Some(codec::get_limit_or(locator, fallback.as_str()));
    }
    if let Some(fallback) = &cfg.fallback_where {
        intent.where_clause = Some(codec::get_where_or(locator, fallback.as_str()));
    }
    intent
}

pub(crate) fn render_text(intent: &QueryIntent) -> String {
    let mut out = String::new();
    if let Some(limit) = &intent.limit {
        out.push_str(&format!("{}: {}\n", codec::KEY_LIMIT, limit));
    }
    if let Some(clause) = &intent.where_clause {
        out.push_str(&format!("{}: {}\n", codec::KEY_WHERE, clause));
    }
    for arg in &intent.where_args {
        out.push_str(&format!("{}: {}\n", codec::KEY_WHERE_ARG, arg));
    }
    out
}
