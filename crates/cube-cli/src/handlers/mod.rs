//! Command handlers that delegate to the core commands.
//!
//! Handlers are thin wrappers that:
//! 1. Turn parsed arguments into a core [`Command`](cube_core::Command)
//! 2. Run it against the [`CliContext`]
//! 3. Format the result for the terminal
//!
//! Validation and persistence stay in the core.

pub mod convert;

use tracing::debug;

use crate::bootstrap::CliContext;
use crate::commands::Commands;
use crate::error::CliError;
use crate::presentation::render_result;

pub use convert::to_command;

/// Execute one parsed command and return the text to print.
pub fn execute(ctx: &mut CliContext, command: Commands) -> Result<String, CliError> {
    let command = to_command(command)?;
    let with_table = !command.is_mutating();
    debug!(command = command.name(), "executing");

    let result = ctx.run(command)?;
    Ok(render_result(&result, with_table))
}
