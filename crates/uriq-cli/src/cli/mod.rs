//! CLI for building and reading query URIs.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use uriq_core::config;

use commands::{run_decode, run_encode, run_get};

/// Top-level CLI for uriq.
#[derive(Debug, Parser)]
#[command(name = "uriq")]
#[command(about = "uriq: encode limit/where/where_arg query intent into URIs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Append query intent to a base URI and print the result.
    Encode(EncodeArgs),

    /// Print the limit, where-clause and where-arguments carried by a URI.
    Decode {
        /// URI to inspect.
        uri: String,
        /// Print JSON instead of `key: value` lines.
        #[arg(long)]
        json: bool,
    },

    /// Print the value stored under an arbitrary query key.
    Get {
        /// URI to inspect.
        uri: String,
        /// Query parameter key.
        key: String,
        /// Print every value for a repeated key, one per line.
        #[arg(long)]
        all: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct EncodeArgs {
    /// Base URI (defaults to `default_base` from config.toml).
    pub base: Option<String>,

    /// Maximum number of rows; must be positive.
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Filter predicate, e.g. "status=?".
    #[arg(long = "where", value_name = "CLAUSE")]
    pub where_clause: Option<String>,

    /// Positional filter argument; repeat for each placeholder, in order.
    #[arg(long = "arg", value_name = "VALUE")]
    pub args: Vec<String>,

    /// Extra query parameter as KEY=VALUE; empty values are skipped.
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got {raw:?}")),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = if cli.command.needs_config() {
            load_config()?
        } else {
            config::UriqConfig::default()
        };

        match cli.command {
            CliCommand::Encode(args) => run_encode(&cfg, &args)?,
            CliCommand::Decode { uri, json } => run_decode(&cfg, &uri, json)?,
            CliCommand::Get { uri, key, all } => run_get(&uri, &key, all)?,
        }

        Ok(())
    }

    /// True for commands that read `config.toml`; `get` never touches it.
    pub fn needs_config(&self) -> bool {
        !matches!(self, CliCommand::Get { .. })
    }
}

fn load_config() -> Result<config::UriqConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
