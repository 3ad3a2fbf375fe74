//! Configuration for the Folio CLI.
//!
//! [`FolioConfig`] is assembled by `confyg` from the first config file found
//! in this order, falling back to built-in defaults:
//!
//! 1. the `--config <path>` flag
//! 2. the `FOLIO_CONFIG` variable
//! 3. `<config dir>/folio/config.toml`
//!
//! Values from `FOLIO_API_*`, `FOLIO_CONTENT_*` and `FOLIO_ASSETS_*`
//! environment variables overlay the file.

use confyg::{Confygery, env};
use folio_core::traits::{ConfigProvider, DEFAULT_PLACEHOLDER_IMAGE};
use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Prefix of every configuration environment variable.
const ENV_PREFIX: &str = "FOLIO";

/// Top-level config sections, each overridable from the environment.
const SECTIONS: [&str; 3] = ["api", "content", "assets"];

/// API host used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the Folio CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Portfolio API configuration.
    pub api: ApiConfig,

    /// Site content configuration.
    pub content: ContentConfig,

    /// Static asset configuration.
    pub assets: AssetsConfig,
}

/// Portfolio API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL requests are issued against.
    pub base_url: String,
}

/// Site content configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// JSON document replacing the bundled site content.
    pub path: Option<String>,
}

/// Static asset configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Image substituted when a record image fails to load.
    pub placeholder_image: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl FolioConfig {
    /// Build the effective configuration.
    ///
    /// The file named by [`resolve_config_path`](Self::resolve_config_path)
    /// is read when it exists, then `FOLIO_*` variables are applied on top.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        match Self::resolve_config_path(config_path) {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "reading config file");
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
            _ => debug!("no config file, using defaults"),
        }

        let mut overlay = env::Options::with_top_level(ENV_PREFIX);
        for section in SECTIONS {
            overlay.add_section(section);
        }
        builder
            .add_env(overlay)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))
    }

    /// Replace the API base URL, e.g. from `--api-url`.
    pub fn with_api_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Config file to read: the explicit path, else `FOLIO_CONFIG`, else the
    /// per-user default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        explicit
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("FOLIO_CONFIG").map(PathBuf::from))
            .or_else(Self::default_config_path)
    }

    /// `<config dir>/folio/config.toml`, when the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("config.toml"))
    }

    /// This config as a TOML document tree.
    pub fn to_toml_value(&self) -> Result<toml::Value> {
        toml::Value::try_from(self).map_err(|e| Error::config(e.to_string()))
    }

    /// This config as pretty-printed TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Every set value as a `FOLIO_SECTION_KEY` variable.
    ///
    /// Unset optional values produce no variable.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let mut vars = Vec::new();
        let mut pending = vec![(ENV_PREFIX.to_string(), self.to_toml_value()?)];
        while let Some((name, value)) = pending.pop() {
            match value {
                toml::Value::Table(table) => pending.extend(
                    table
                        .into_iter()
                        .rev()
                        .map(|(key, child)| (format!("{name}_{}", key.to_uppercase()), child)),
                ),
                other => vars.push((name, scalar_text(&other))),
            }
        }
        Ok(vars)
    }
}

/// Text of a TOML value as shown to users and exported to the environment.
///
/// Arrays and tables are rendered as TOML.
pub(crate) fn scalar_text(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

impl ConfigProvider for FolioConfig {
    fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn content_path(&self) -> Option<PathBuf> {
        self.content.path.as_ref().map(PathBuf::from)
    }

    fn placeholder_image(&self) -> &str {
        &self.assets.placeholder_image
    }
}

// ============================================================================
// Tests
// ============================================================================
