//! Persisted preferences - the only state that survives a restart.
//!
//! Exactly two values are stored: the theme flag and the interface
//! language. Everything else resets to the seed data on every launch.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding where the preferences file lives.
pub const PREFS_PATH_VAR: &str = "TOIPLAN_PREFS";

/// Default preferences file next to the working directory.
const DEFAULT_PREFS_FILE: &str = "prefs.toml";

/// Light or dark interface theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light theme (default)
    #[default]
    Light,
    /// Dark theme
    Dark,
}

/// Interface language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Russian (default)
    #[default]
    Ru,
    /// Kyrgyz
    Kg,
    /// English
    En,
}

/// The two persisted preference values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefs {
    /// Interface theme
    #[serde(default)]
    pub theme: Theme,
    /// Interface language
    #[serde(default)]
    pub language: Language,
}

impl Prefs {
    /// Loads preferences from a TOML file. A missing file is not an
    /// error: first launch starts from the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(?path, "no preferences file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("Failed to read preferences file {path:?}: {e}"),
        })?;
        toml::from_str(&contents).map_err(|e| Error::Config {
            message: format!("Failed to parse preferences file {path:?}: {e}"),
        })
    }

    /// Writes preferences out, overwriting any previous file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string(self).map_err(|e| Error::Config {
            message: format!("Failed to serialize preferences: {e}"),
        })?;
        std::fs::write(path.as_ref(), contents)?;
        Ok(())
    }
}

/// Resolves the preferences file path: `TOIPLAN_PREFS` when set, the
/// default file otherwise.
#[must_use]
pub fn default_path() -> PathBuf {
    std::env::var(PREFS_PATH_VAR)
        .map_or_else(|_| PathBuf::from(DEFAULT_PREFS_FILE), PathBuf::from)
}
