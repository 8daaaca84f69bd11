//! Main CLI parser and top-level argument handling.
//!
//! [`Cli`] parses process arguments. [`ReplLine`] parses one line typed in
//! the interactive session with the same command grammar.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::Commands;

/// Command-line interface definition for the food inventory tracker.
///
/// Without a subcommand an interactive session is started.
#[derive(Debug, Parser)]
#[command(name = "cube")]
#[command(about = "Track food stock, prices and sales")]
#[command(version)]
pub struct Cli {
    /// Food list file to use instead of the default location
    #[arg(long = "data-file", env = "CUBE_DATA_FILE", global = true)]
    pub data_file: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// One line of the interactive session.
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCommand,
}

#[derive(Debug, Subcommand)]
pub enum ReplCommand {
    #[command(flatten)]
    Food(Commands),

    /// Leave the session
    #[command(alias = "bye")]
    Exit,
}
