//! Optional `soapstone.toml` configuration for catalog exports.
//!
//! The file is small on purpose: which modules to export and where the
//! JSON lands. Everything else about an export is a property of the
//! catalog itself.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error as ThisError;

///
/// CONSTANTS
///

/// File name probed in the working directory when no path is given.
pub const DEFAULT_FILE: &str = "soapstone.toml";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("could not read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

///
/// CliConfig
///
/// Deserialized `soapstone.toml`. Every section is optional; an absent
/// file behaves exactly like an empty one.
///

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Locate and load the effective config.
    ///
    /// An explicit path must exist and parse. Without one, [`DEFAULT_FILE`]
    /// in the working directory is used when present, defaults otherwise.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let fallback = Path::new(DEFAULT_FILE);
        if fallback.exists() {
            return Self::load(fallback);
        }

        Ok(Self::default())
    }

    fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

///
/// CatalogConfig
///

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Module names to export; empty means every module.
    #[serde(default)]
    pub include: Vec<String>,

    /// Module names dropped after `include` applies.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Output path; stdout when absent.
    pub output: Option<PathBuf>,
}

impl CatalogConfig {
    /// Whether a module survives the include and exclude filters.
    #[must_use]
    pub fn selects(&self, module: &str) -> bool {
        let included = self.include.is_empty() || self.include.iter().any(|m| m == module);

        included && !self.exclude.iter().any(|m| m == module)
    }
}

///
/// TESTS
///
