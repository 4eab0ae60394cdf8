//! Demo run configuration loading from config.toml
//!
//! The binary reads a small TOML file describing which dataset to emit and
//! how many records to generate. A missing file is not an error: the
//! defaults reproduce the original demo (1000 sales records to stdout).

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Which dataset the demo binary emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    /// Synthetic sales transactions.
    Sales,
    /// The fixed 500-record sales table sized for aggregation demos.
    Aggregation,
    /// Market snapshots from the 50-entry stock catalog.
    Finance,
}

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset to generate.
    pub dataset: Dataset,
    /// Record count for `sales`, stock count for `finance`. Ignored by
    /// `aggregation`, which is fixed at 500 records.
    pub records: usize,
    /// Output file path; stdout when absent.
    pub output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: Dataset::Sales,
            records: 1000,
            output: None,
        }
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref)
        .map_err(|e| Error::Config(format!("Failed to read config file {path_ref:?}: {e}")))?;
    toml::from_str(&contents).map_err(|e| {
        Error::Config(format!(
            "Failed to parse TOML from config file {path_ref:?}: {e}"
        ))
    })
}

/// Loads configuration from `path`, falling back to defaults when the file
/// does not exist. A file that exists but fails to parse is still an error.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<Config> {
    if path.as_ref().exists() {
        load_config(path)
    } else {
        tracing::debug!("No config file at {:?}, using defaults", path.as_ref());
        Ok(Config::default())
    }
}
