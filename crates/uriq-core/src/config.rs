use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::locator::ResourceLocator;

/// How `decode` prints a query intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/uriq/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UriqConfig {
    /// Locator used by `encode` when no base is given on the command line.
    #[serde(default)]
    pub default_base: Option<ResourceLocator>,
    /// Value reported by `decode` when a locator carries no limit.
    #[serde(default)]
    pub fallback_limit: Option<String>,
    /// Value reported by `decode` when a locator carries no (or an empty) where-clause.
    #[serde(default)]
    pub fallback_where: Option<String>,
    /// Default `decode` output: "text" or "json".
    #[serde(default)]
    pub output: OutputFormat,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("uriq")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UriqConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`], for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<UriqConfig> {
    if !path.exists() {
        let default_cfg = UriqConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<UriqConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UriqConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
