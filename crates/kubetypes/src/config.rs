//! Configuration system for kubetypes.
//!
//! Loads config from:
//! 1. Global: ~/.config/kubetypes/config.toml
//! 2. Per-project: .kubetypes/config.toml (overrides global, key by key)
//!
//! Example config.toml:
//! ```toml
//! [source]
//! url_template = "https://mirror.example.com/kubernetes/{version}/swagger.json"
//! timeout_secs = 120
//!
//! [output]
//! dir = "types"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Where the upstream schema document is fetched from.
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://raw.githubusercontent.com/kubernetes/kubernetes/{version}/api/openapi-spec/swagger.json";

/// Schema source configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// URL of the schema document; `{version}` is replaced by the API version.
    pub url_template: String,
    /// HTTP timeout for the whole request.
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            timeout_secs: 60,
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving one `v<release>` package per run.
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("types"),
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KubetypesConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
}

impl KubetypesConfig {
    /// Load configuration for a project.
    ///
    /// Loads global config from ~/.config/kubetypes/config.toml,
    /// then merges with per-project config from .kubetypes/config.toml.
    pub fn load(root: &Path) -> Result<Self> {
        Self::load_from(Self::global_config_path().as_deref(), root)
    }

    /// Load configuration from an explicit global config path.
    pub fn load_from(global: Option<&Path>, root: &Path) -> Result<Self> {
        let mut table = toml::Table::new();

        if let Some(global) = global.and_then(|path| Self::load_file(path).transpose()) {
            merge(&mut table, global?);
        }

        let project_path = root.join(".kubetypes").join("config.toml");
        if let Some(project) = Self::load_file(&project_path)? {
            merge(&mut table, project);
        }

        toml::Value::Table(table)
            .try_into()
            .context("invalid kubetypes configuration")
    }

    /// Get the global config path.
    fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("kubetypes").join("config.toml"))
    }

    /// Load a config file as a raw table; a missing file is not an error.
    fn load_file(path: &Path) -> Result<Option<toml::Table>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let table = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(Some(table))
    }
}

/// Merge `other` into `base`; nested tables merge, other values replace.
fn merge(base: &mut toml::Table, other: toml::Table) {
    for (key, value) in other {
        match value {
            toml::Value::Table(incoming) => match base.get_mut(&key) {
                Some(toml::Value::Table(existing)) => merge(existing, incoming),
                _ => {
                    base.insert(key, toml::Value::Table(incoming));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}
