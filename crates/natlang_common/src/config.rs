//! Natlang Configuration
//!
//! Optional TOML file. Every field has a default, so an empty or missing
//! default file is a valid configuration.
//!
//! Resolution order:
//! 1. Explicit path (`--config`)
//! 2. $NATLANG_CONFIG environment variable
//! 3. ./natlang.toml

use crate::error::Result;
use crate::template::DEFAULT_TEMPLATE_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "natlang.toml";

/// Environment override for the config path
pub const CONFIG_ENV_VAR: &str = "NATLANG_CONFIG";

/// Prompt template settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Template file path
    #[serde(default = "default_template_path")]
    pub path: PathBuf,
}

fn default_template_path() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE_FILE)
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            path: default_template_path(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Complete Natlang configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NatlangConfig {
    #[serde(default)]
    pub template: TemplateConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl NatlangConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from an explicit file. Missing or malformed files are errors.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    /// Config file to read, if any.
    ///
    /// An explicit path (argument or environment) is returned whether or not
    /// it exists; the implicit `natlang.toml` only when present.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        default_path.exists().then(|| default_path.to_path_buf())
    }

    /// Resolve and load the configuration. Defaults when no file is found.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::locate(explicit) {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }
}
