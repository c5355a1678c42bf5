//! Command-line parsing for the interactive front ends
//!
//! The REPL and the TUI accept the same commands; matching is
//! case-insensitive and whitespace-separated.

use crate::core::HelperError;
use crate::helper::Mode;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    /// Re-read the dictionary from its source
    Reload,
    /// Show recorded guesses and the derived constraints
    History,
    Reset,
    /// Record a guess; missing parts are prompted for
    Add {
        word: Option<String>,
        feedback: Option<String>,
    },
    Suggest(Mode),
}

impl Command {
    /// Parse a line of input
    ///
    /// # Errors
    /// Returns `HelperError::UnknownCommand` with the original text when the
    /// line matches no command.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::commands::Command;
    /// use wordle_helper::helper::Mode;
    ///
    /// assert_eq!(Command::parse("SUGGEST info").unwrap(), Command::Suggest(Mode::Info));
    /// assert!(Command::parse("dance").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, HelperError> {
        let lowered = line.trim().to_lowercase();
        let tokens: Vec<&str> = lowered.split_whitespace().collect();
        let unknown = || HelperError::UnknownCommand(line.trim().to_string());

        let command = match tokens.as_slice() {
            ["quit" | "exit" | "q"] => Self::Quit,
            ["help" | "h" | "?"] => Self::Help,
            ["reload"] => Self::Reload,
            ["history" | "masks"] => Self::History,
            ["reset"] => Self::Reset,
            ["add"] => Self::Add {
                word: None,
                feedback: None,
            },
            ["add", word] => Self::Add {
                word: Some((*word).to_string()),
                feedback: None,
            },
            ["add", word, feedback] => Self::Add {
                word: Some((*word).to_string()),
                feedback: Some((*feedback).to_string()),
            },
            ["suggest"] => Self::Suggest(Mode::Solve),
            ["suggest", mode] => Self::Suggest(Mode::from_name(mode).ok_or_else(unknown)?),
            _ => return Err(unknown()),
        };

        Ok(command)
    }
}

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  add [WORD [FEEDBACK]]   record a guess; feedback is five of G/Y/B
                          (G = right spot, Y = wrong spot, B = no more copies)
  suggest [solve|info]    rank words: likely answers, or probes for new letters
  history | masks         show recorded guesses and what they imply
  reset                   forget every guess
  reload                  re-read the word list
  help | h                show this help
  quit | exit | q         leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_commands() {
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(Command::parse("  EXIT ").unwrap(), Command::Quit);
        assert_eq!(Command::parse("h").unwrap(), Command::Help);
        assert_eq!(Command::parse("masks").unwrap(), Command::History);
        assert_eq!(Command::parse("reset").unwrap(), Command::Reset);
        assert_eq!(Command::parse("reload").unwrap(), Command::Reload);
    }

    #[test]
    fn parses_add_forms() {
        assert_eq!(
            Command::parse("add").unwrap(),
            Command::Add {
                word: None,
                feedback: None
            }
        );
        assert_eq!(
            Command::parse("add SLATE ggBBy").unwrap(),
            Command::Add {
                word: Some("slate".to_string()),
                feedback: Some("ggbby".to_string())
            }
        );
        assert_eq!(
            Command::parse("add slate").unwrap(),
            Command::Add {
                word: Some("slate".to_string()),
                feedback: None
            }
        );
    }

    #[test]
    fn parses_suggest_modes() {
        assert_eq!(
            Command::parse("suggest solve").unwrap(),
            Command::Suggest(Mode::Solve)
        );
        assert_eq!(
            Command::parse("suggest info").unwrap(),
            Command::Suggest(Mode::Info)
        );
        assert_eq!(
            Command::parse("suggest").unwrap(),
            Command::Suggest(Mode::Solve)
        );
    }

    #[test]
    fn rejects_unknown_input() {
        assert_eq!(
            Command::parse("suggest fast"),
            Err(HelperError::UnknownCommand("suggest fast".to_string()))
        );
        assert_eq!(
            Command::parse("add a b c"),
            Err(HelperError::UnknownCommand("add a b c".to_string()))
        );
        assert!(Command::parse("").is_err());
    }
}
