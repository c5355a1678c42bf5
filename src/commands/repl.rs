//! Line-based interactive mode
//!
//! Reads commands from any `BufRead` and writes to any `Write`, so the same
//! loop serves a terminal and tests.

use super::command::{Command, HELP};
use crate::core::HelperError;
use crate::helper::Session;
use crate::output::display::{write_history, write_suggestions};
use crate::wordlists::WordSource;
use std::io::{BufRead, Write};

/// Settings for the REPL
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Where `reload` re-reads the dictionary from
    pub source: WordSource,
    /// Number of suggestions printed
    pub limit: usize,
}

impl ReplConfig {
    #[must_use]
    pub const fn new(source: WordSource, limit: usize) -> Self {
        Self { source, limit }
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self::new(WordSource::Embedded, 15)
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Run the REPL until `quit` or end of input
///
/// Command failures are reported on `output` and the loop continues.
///
/// # Errors
///
/// Returns `HelperError::Io` if reading input or writing output fails.
pub fn run_repl<R: BufRead, W: Write>(
    session: &mut Session,
    config: &ReplConfig,
    input: &mut R,
    output: &mut W,
) -> Result<(), HelperError> {
    writeln!(output, "Wordle helper: {} words loaded.", session.dictionary().len())?;
    writeln!(output, "Type 'help' for commands.")?;

    while let Some(line) = prompt(input, output, "Enter a command")? {
        if line.is_empty() {
            continue;
        }

        let result = Command::parse(&line)
            .and_then(|command| execute(command, session, config, input, output));

        match result {
            Ok(Flow::Quit) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(e) => {
                log::debug!("command '{line}' failed: {e}");
                writeln!(output, "Error: {e}")?;
            }
        }
    }

    Ok(())
}

fn execute<R: BufRead, W: Write>(
    command: Command,
    session: &mut Session,
    config: &ReplConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Flow, HelperError> {
    match command {
        Command::Quit => return Ok(Flow::Quit),
        Command::Help => writeln!(output, "{HELP}")?,
        Command::Reload => {
            let words = config
                .source
                .load()
                .map_err(|e| HelperError::Io(format!("{}: {e}", config.source)))?;
            let count = words.len();
            session.set_dictionary(words);
            writeln!(output, "Word list reloaded from {} ({count} words).", config.source)?;
        }
        Command::History => write_history(output, session.history(), &session.constraints())?,
        Command::Reset => {
            session.reset();
            writeln!(output, "Guess history cleared.")?;
        }
        Command::Add { word, feedback } => {
            let Some(word) = ask(word, input, output, "Enter the word you guessed")? else {
                return Ok(Flow::Quit);
            };
            let Some(feedback) = ask(feedback, input, output, "Enter the result of your guess")?
            else {
                return Ok(Flow::Quit);
            };
            session.add(&word, &feedback)?;
            writeln!(
                output,
                "Recorded {} {}: {} candidates remain.",
                word.to_lowercase(),
                feedback.to_uppercase(),
                session.candidates().len()
            )?;
        }
        Command::Suggest(mode) => {
            let ranked = session.suggest(mode)?;
            let candidates = session.candidates().len();
            write_suggestions(output, mode, &ranked, candidates, config.limit)?;
        }
    }

    Ok(Flow::Continue)
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>, HelperError> {
    write!(output, "{message}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Use `given` if present, otherwise prompt for it
fn ask<R: BufRead, W: Write>(
    given: Option<String>,
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<Option<String>, HelperError> {
    match given {
        Some(value) => Ok(Some(value)),
        None => prompt(input, output, message),
    }
}
