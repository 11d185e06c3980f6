//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` path, or the default location)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default option values for `construct generate`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Default testing framework when `--test` is omitted.
    pub test: Option<String>,
    /// Default license when `--license` is omitted.
    pub license: Option<String>,
    /// Default namespace when `--namespace` is omitted.
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from `config_file` (the `--config` value) or the
    /// default location.  A missing file yields the built-in defaults; a
    /// present-but-broken file is an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);

        if !path.exists() {
            // Only an explicitly requested file is required to exist.
            if config_file.is_some() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.construct.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "construct", "construct")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".construct.toml"))
    }
}
