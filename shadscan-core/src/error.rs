//! Error types for corpus analysis

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing or analysing a collection
#[derive(Error, Debug)]
pub enum Error {
    /// The input directory is missing or is not a directory
    #[error("input directory not found: {}", path.display())]
    InputDirectory {
        /// The offending path
        path: PathBuf,
    },

    /// I/O failure on a specific path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Cache entry could not be read or written
    #[error("cache error for '{key}': {reason}")]
    Cache {
        /// Cache key (input directory name)
        key: String,
        /// What went wrong
        reason: String,
    },

    /// Serialization of the intermediate representation failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A search pattern could not be compiled
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Wrap an I/O error together with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, Error>;
