//! Runtime configuration, read from the environment.
//!
//! | Variable              | Meaning                                   | Default |
//! |-----------------------|-------------------------------------------|---------|
//! | `CATALOG_BUFFER_SIZE` | request queue capacity of the store actor | `32`    |
//! | `CATALOG_SEED`        | JSON file of products to load at startup  | none    |

use crate::model::ProductFields;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const BUFFER_SIZE_VAR: &str = "CATALOG_BUFFER_SIZE";
pub const SEED_VAR: &str = "CATALOG_SEED";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    InvalidValue {
        key: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub buffer_size: usize,
    pub seed_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            seed_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let buffer_size = match value(BUFFER_SIZE_VAR) {
            None => defaults.buffer_size,
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: BUFFER_SIZE_VAR,
                    expected: "a positive integer",
                    value: raw,
                })?,
        };

        Ok(Self {
            buffer_size,
            seed_path: value(SEED_VAR).map(PathBuf::from),
        })
    }
}

/// Reads a JSON array of product fields, e.g.
/// `[{"id": "0001", "productName": "Bananas", "brand": "Dole", "price": "$0.49"}]`.
pub fn load_seed(path: &Path) -> Result<Vec<ProductFields>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::SeedParse {
        path: path.to_path_buf(),
        source,
    })
}
