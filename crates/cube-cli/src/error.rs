//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from core errors to exit codes and user-facing messages.

use cube_core::{CommandError, PathError, StorageError};
use rustyline::error::ReadlineError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A command was rejected by the food list (missing food, duplicate
    /// name, not enough stock).
    #[error("{0}")]
    Core(String),

    /// Argument parsing or parameter validation error.
    #[error("{0}")]
    Arguments(String),

    /// The food list could not be loaded or saved.
    #[error("{0}")]
    Storage(String),

    /// The terminal could not be read from or set up.
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,            // EX_USAGE
            Self::Storage(_) | Self::Io(_) => 74, // EX_IOERR
            Self::Config(_) => 78,              // EX_CONFIG
        }
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::InvalidParameter(_) => Self::Arguments(err.to_string()),
            CommandError::Storage(_) => Self::Storage(err.to_string()),
            CommandError::FoodNotExists
            | CommandError::FoodAlreadyExists(_)
            | CommandError::InsufficientStock { .. } => Self::Core(err.to_string()),
        }
    }
}

impl From<StorageError> for CliError {
    fn from(err: StorageError) -> Self {
        Self::Storage(format!("Could not load the food list: {err}"))
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        match err {
            ReadlineError::Io(io) => io.into(),
            other => Self::Io(other.to_string()),
        }
    }
}
