//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, sets up logging and bootstraps the
//! context. A subcommand runs once; without one the interactive session
//! starts.

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cube_cli::{Cli, CliConfig, CliError, bootstrap, handlers, repl};

fn main() {
    // Load environment variables before clap reads CUBE_DATA_FILE
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{err:#}");
        process::exit(err.downcast_ref::<CliError>().map_or(1, CliError::exit_code));
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::from_override(cli.data_file)?;
    let mut ctx = bootstrap(config)?;

    match cli.command {
        Some(command) => {
            let output = handlers::execute(&mut ctx, command)?;
            println!("{output}");
        }
        None => repl::run(&mut ctx)?,
    }
    Ok(())
}
