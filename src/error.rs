//! Error types for linux-distros

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    /// The database file could not be created or opened.
    #[error("Could not open database at {}: {reason}", path.display())]
    StoreOpen { path: PathBuf, reason: String },

    /// A statement failed to prepare.
    #[error("Query prepare error: {0}")]
    QueryPrepare(duckdb::Error),

    /// A prepared statement failed while stepping through rows.
    #[error("Query step error: {0}")]
    QueryStep(duckdb::Error),

    #[error("Database error: {0}")]
    Database(#[from] duckdb::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a store-open error for `path`
    pub fn store_open(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::StoreOpen {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether this error means the store never became available.
    #[must_use]
    pub const fn is_store_open(&self) -> bool {
        matches!(self, Self::StoreOpen { .. })
    }
}
