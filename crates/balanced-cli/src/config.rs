use std::{
    fs, io,
    path::{Path, PathBuf},
};

use glob::Pattern;
use serde::Deserialize;
use thiserror::Error;

/// Config file picked up from the current directory when `--config` is absent.
pub const CONFIG_FILE: &str = "balanced.toml";

/// Configuration loading or validation error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The config file is not valid TOML or has unknown keys.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// An `exclude` entry is not a valid glob pattern.
    #[error("invalid exclude pattern {pattern:?}: {source}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// Why it failed to compile.
        source: glob::PatternError,
    },
}

/// Checker configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Glob patterns for paths to skip.
    pub exclude: Vec<String>,
    /// Whether verdicts are colored.
    pub color: bool,
}

impl Config {
    /// Parse and validate a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Load `explicit` if given, else `balanced.toml` in `dir` if present,
    /// else the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if any `exclude` entry is not a valid glob pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.exclude_patterns().map(|_| ())
    }

    /// Compile the `exclude` entries.
    pub fn exclude_patterns(&self) -> Result<Vec<Pattern>, ConfigError> {
        self.exclude
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| ConfigError::Pattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            color: true,
        }
    }
}
