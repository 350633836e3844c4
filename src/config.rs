use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Defaults shipped with the binary; validated by `build.rs`.
const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
}

/// Where the site's inputs live and where the output goes.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub static_dir: PathBuf,
    pub content_dir: PathBuf,
    pub output_dir: PathBuf,
    pub template: PathBuf,
    /// Prefix substituted for root-relative `href="/` and `src="/` links.
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("docs"),
            template: PathBuf::from("template.html"),
            base_path: "/".to_string(),
        }
    }
}

impl Config {
    /// The embedded `default_config.toml`.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
            warn!("Embedded default config is invalid, using built-in values: {e}");
            Self::default()
        })
    }

    /// Load config from a TOML file, or return the compiled defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::compiled_default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
