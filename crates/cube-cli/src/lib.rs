//! Terminal front end for the cube food inventory tracker.
//!
//! Parses arguments or interactive lines into core commands, runs them
//! against a food list loaded through the storage adapter and prints the
//! results.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod repl;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::Commands;
pub use error::CliError;
pub use parser::{Cli, ReplCommand, ReplLine};
