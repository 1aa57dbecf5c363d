//! Error handling for the CLI application

use std::fmt;
use std::path::PathBuf;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input directory missing
    InputNotFound(PathBuf),
    /// Refusing to overwrite an existing file
    AlreadyExists(PathBuf),
    /// Configuration error
    ConfigError(String),
    /// Unknown report format
    UnknownFormat(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InputNotFound(path) => {
                write!(f, "Input directory not found: {}", path.display())
            }
            CliError::AlreadyExists(path) => {
                write!(f, "File already exists: {} (use --force)", path.display())
            }
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::UnknownFormat(format) => {
                write!(f, "Unknown report format: {format} (expected text or csv)")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
