//! Interactive session.
//!
//! Each line is split into words, parsed with the same command grammar as
//! the process arguments and executed against the session's list. Errors
//! are printed and the session carries on.

use anyhow::Result;
use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers;
use crate::parser::{ReplCommand, ReplLine};
use crate::utils::split_words;

pub const PROMPT: &str = "cube> ";

const GREETING: &str = "Hello! What would you like to do with your food list?\nType 'help' to see the commands.";

const FAREWELL: &str = "Bye. Hope to see you again soon!";

/// What the session does after one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Print the text (if any) and read the next line.
    Continue(String),
    Exit,
}

/// Parse and execute one input line.
pub fn handle_line(ctx: &mut CliContext, line: &str) -> LineOutcome {
    let words = match split_words(line) {
        Ok(words) if words.is_empty() => return LineOutcome::Continue(String::new()),
        Ok(words) => words,
        Err(err) => return LineOutcome::Continue(err.to_string()),
    };

    match ReplLine::try_parse_from(words) {
        Ok(ReplLine {
            command: ReplCommand::Exit,
        }) => LineOutcome::Exit,
        Ok(ReplLine {
            command: ReplCommand::Food(command),
        }) => match handlers::execute(ctx, command) {
            Ok(output) => LineOutcome::Continue(output),
            Err(err) => {
                debug!(code = err.exit_code(), "command failed");
                LineOutcome::Continue(err.to_string())
            }
        },
        // Help and usage errors both arrive here.
        Err(err) => LineOutcome::Continue(err.render().to_string().trim_end().to_string()),
    }
}

/// Add a non-blank line to the session history.
fn remember(editor: &mut DefaultEditor, line: &str) {
    if line.trim().is_empty() {
        return;
    }
    if let Err(err) = editor.add_history_entry(line) {
        debug!(error = %err, "could not record history entry");
    }
}

/// Run the session until `exit`, Ctrl-C or end of input.
pub fn run(ctx: &mut CliContext) -> Result<()> {
    let mut editor = DefaultEditor::new().map_err(CliError::from)?;
    println!("{GREETING}");

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                remember(&mut editor, &line);
                match handle_line(ctx, &line) {
                    LineOutcome::Exit => break,
                    LineOutcome::Continue(output) if output.is_empty() => {}
                    LineOutcome::Continue(output) => println!("{output}"),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(CliError::from(err).into()),
        }
    }

    println!("{FAREWELL}");
    Ok(())
}
