//! User configuration, stored as TOML.
//!
//! The file lives at `$CLIPCLEAN_CONFIG` when set, otherwise at
//! `<config dir>/clipclean/config.toml`. A missing file means defaults, and
//! every field may be omitted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clippings::{CleanConfig, KeyOptions, DEFAULT_SHORT_TEXT_THRESHOLD};
use crate::render::MarkdownOptions;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "CLIPCLEAN_CONFIG";

/// Default input file name, as written by the device.
pub const DEFAULT_INPUT: &str = "My Clippings.txt";

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "Clipping_cleaned.md";

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dedup: DedupConfig,
    pub grouping: GroupingConfig,
    pub output: OutputConfig,
}

/// `[dedup]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    /// Bodies shorter than this many characters keep only their latest copy
    pub short_text_threshold: usize,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            short_text_threshold: DEFAULT_SHORT_TEXT_THRESHOLD,
        }
    }
}

/// `[grouping]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Treat runs of whitespace in title/author as a single space
    pub collapse_whitespace: bool,
    /// Treat titles/authors differing only in case as the same book
    pub case_insensitive: bool,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        let key = KeyOptions::default();
        Self {
            collapse_whitespace: key.collapse_whitespace,
            case_insensitive: key.case_insensitive,
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Input path used when none is given on the command line
    pub default_input: PathBuf,
    /// Output path used when none is given on the command line
    pub default_output: PathBuf,
    /// Start the markdown file with a UTF-8 byte order mark
    pub write_bom: bool,
    /// Add kind, location and date under each clipping
    pub include_metadata: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_input: PathBuf::from(DEFAULT_INPUT),
            default_output: PathBuf::from(DEFAULT_OUTPUT),
            write_bom: true,
            include_metadata: false,
        }
    }
}

impl Config {
    /// Resolve the config file path.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("clipclean").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config file, falling back to defaults when it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            // No home directory at all: nothing to load
            Err(ConfigError::NoConfigDir) => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }

    /// Load from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse TOML content.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Pipeline settings derived from this config.
    pub fn clean_config(&self) -> CleanConfig {
        CleanConfig {
            short_text_threshold: self.dedup.short_text_threshold,
            key_options: KeyOptions {
                collapse_whitespace: self.grouping.collapse_whitespace,
                case_insensitive: self.grouping.case_insensitive,
            },
        }
    }

    /// Renderer settings derived from this config.
    pub fn markdown_options(&self) -> MarkdownOptions {
        MarkdownOptions {
            include_metadata: self.output.include_metadata,
        }
    }
}
