//! Raw configuration file types.
//!
//! [`ConfigFile`] is the unvalidated view of `rulegate.toml`. Every key is kept
//! as a TOML value, in source order: the order of `select`/`ignore` keys and of
//! override blocks is significant, and the shape of each value is checked by
//! the validator so that shape errors are reported with everything else.

use crate::catalog::Catalog;
use crate::model::LintConfig;
use crate::validate::{validate, ValidationErrors};

use std::path::{Path, PathBuf};

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    /// `target-version`: language/runtime version hint (e.g. `py311`).
    pub target_version: Option<toml::Value>,

    /// `exclude`: root-relative patterns of paths excluded from analysis.
    pub exclude: Option<toml::Value>,

    /// `extend-exclude`: additional exclude patterns, appended to `exclude`.
    pub extend_exclude: Option<toml::Value>,

    /// `[lint]` section.
    pub lint: Option<toml::Value>,

    /// Top-level keys the schema does not know, in source order.
    pub unknown: toml::Table,
}

impl ConfigFile {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML. Unknown or wrongly
    /// shaped keys are left for [`ConfigFile::validate`].
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;

        let mut file = Self::default();
        for (key, value) in table {
            match key.as_str() {
                "target-version" => file.target_version = Some(value),
                "exclude" => file.exclude = Some(value),
                "extend-exclude" => file.extend_exclude = Some(value),
                "lint" => file.lint = Some(value),
                _ => {
                    file.unknown.insert(key, value);
                }
            }
        }
        Ok(file)
    }

    /// Returns the `[lint]` table, if present and a table.
    #[must_use]
    pub fn lint_table(&self) -> Option<&toml::Table> {
        self.lint.as_ref().and_then(toml::Value::as_table)
    }

    /// Validates this file against a catalog.
    ///
    /// # Errors
    ///
    /// Returns every validation problem found.
    pub fn validate(&self, catalog: &Catalog) -> Result<LintConfig, ValidationErrors> {
        validate(self, catalog)
    }
}

/// Parses and validates configuration text in one step.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed TOML and
/// [`ConfigError::Invalid`] with all validation errors otherwise.
pub fn load_config(content: &str, catalog: &Catalog) -> Result<LintConfig, ConfigError> {
    let file = ConfigFile::parse(content)?;
    Ok(file.validate(catalog)?)
}

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// The file parsed but failed validation.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}
