//! Configuration and catalog error types.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors shaping upstream character payloads.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("failed to read character file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed character payload: {0}")]
    Json(#[from] serde_json::Error),
}
