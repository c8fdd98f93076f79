//! Configuration types for leadx.
//!
//! [`Config::load`] reads `~/.config/leadx/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] reads an
//! explicit file that must exist. [`Config::defaults`] returns the built-in
//! defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::LeadError;
use crate::export::ExportFormat;
use crate::types::NaMatch;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[policy]
organic_label = "Organic"
text_na_match = "exact"
row_na_match  = "case_insensitive"

[output]
format = "table"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub policy: PolicyConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[policy]` section: how UTM mediums are normalised on each path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PolicyConfig {
    #[serde(default = "default_organic_label")]
    pub organic_label: String,
    #[serde(default = "default_text_na_match")]
    pub text_na_match: NaMatch,
    #[serde(default = "default_row_na_match")]
    pub row_na_match: NaMatch,
}

fn default_organic_label() -> String { "Organic".to_string() }
fn default_text_na_match() -> NaMatch { NaMatch::Exact }
fn default_row_na_match() -> NaMatch { NaMatch::CaseInsensitive }

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            organic_label: default_organic_label(),
            text_na_match: default_text_na_match(),
            row_na_match: default_row_na_match(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: ExportFormat,
}

fn default_format() -> ExportFormat { ExportFormat::Table }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/leadx/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> Result<Self, LeadError> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::layered(&path, false)
    }

    /// Load an explicit config file, layered on top of the built-in defaults.
    /// The file must exist.
    pub fn load_from(path: &Path) -> Result<Self, LeadError> {
        Self::layered(path, true)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn layered(path: &Path, required: bool) -> Result<Self, LeadError> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    config_path_from(
        std::env::var("XDG_CONFIG_HOME").ok(),
        std::env::var("HOME").ok(),
    )
}

/// Empty variables count as unset, as the XDG base directory rules require.
fn config_path_from(xdg_config_home: Option<String>, home: Option<String>) -> PathBuf {
    let non_empty = |v: Option<String>| v.filter(|s| !s.is_empty());
    non_empty(xdg_config_home)
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            PathBuf::from(non_empty(home).unwrap_or_else(|| ".".to_string())).join(".config")
        })
        .join("leadx")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
