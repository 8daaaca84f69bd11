//! Path-related error types.
//!
//! Provides semantic errors for path operations without exposing
//! implementation details or adapter-specific concerns.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path resolution and directory operations.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the system data directory.
    #[error("Cannot determine system data directory")]
    NoDataDir,

    /// A path was expected to be a directory but was not.
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// Failed to create a directory.
    #[error("Failed to create directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}
