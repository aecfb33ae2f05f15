//! Error types for log file operations

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by log file operations
///
/// Every failure is returned synchronously to the caller; there are no
/// retries and no internal fallback paths.
#[derive(Debug, Error)]
pub enum LogError {
    /// The resolved log directory exists but is not writable
    #[error("log directory is not writable: '{}'", .0.display())]
    DirectoryNotWritable(PathBuf),

    /// The log file targeted by a search or clear does not exist
    #[error("log file does not exist: '{}'", .0.display())]
    FileNotFound(PathBuf),

    /// The caller-supplied search needle is not a valid regex fragment
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// An underlying filesystem operation failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, LogError>;
