//! Game configuration
//!
//! Settings live in a TOML file in the platform config directory:
//! - macOS: ~/Library/Application Support/com.word-scramble.Word-Scramble/
//! - Windows: %APPDATA%/word-scramble/Word Scramble/config/
//! - Linux: ~/.config/wordscramble/
//!
//! A missing file means defaults. Command-line flags override file values.
//!
//! ```toml
//! state_path = "/tmp/round.json"
//! seed = 7
//!
//! [rules]
//! min_length_threshold = 3
//! language = "en"
//! ```

use crate::validation::RuleConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "word-scramble";
const APP_NAME: &str = "Word Scramble";
const CONFIG_FILENAME: &str = "config.toml";
const STATE_FILENAME: &str = "round.json";

/// Configuration file error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Everything the game can be configured with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Where the round snapshot is stored (default: platform data dir)
    pub state_path: Option<PathBuf>,
    /// Root word pool file (default: built-in list)
    pub pool_path: Option<PathBuf>,
    /// Spell checker word list (default: built-in list)
    pub dictionary_path: Option<PathBuf>,
    /// Fixed seed for root selection
    pub seed: Option<u64>,
    pub rules: RuleConfig,
}

impl GameConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
    }

    /// Path of the default config file, if the platform has a config dir
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// tried and defaults are used if nothing is there.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a config file exists but cannot be read or
    /// parsed, or if an explicit `path` is missing.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::read(path);
        }

        let Some(path) = Self::default_path() else {
            tracing::warn!("Could not determine config directory, using defaults");
            return Ok(Self::default());
        };

        if path.exists() {
            Self::read(&path)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns the TOML parse error.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns the TOML serialization error.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Where the round snapshot lives: `state_path` or the platform data dir
    #[must_use]
    pub fn resolved_state_path(&self) -> Option<PathBuf> {
        self.state_path.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_dir().join(STATE_FILENAME))
        })
    }
}
