//! Error type shared by the helper's operations

use super::feedback::FeedbackError;
use super::word::WordError;
use std::fmt;

/// Failures reported to the command layer
///
/// None of these are fatal: the caller reports them and keeps the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelperError {
    /// Guess word is not exactly five letters
    InvalidWord(WordError),
    /// Feedback is not exactly five marks over G/Y/B
    InvalidFeedback(FeedbackError),
    /// No dictionary word satisfies the recorded feedback
    EmptyCandidateSet,
    /// Input line did not match any command
    UnknownCommand(String),
    /// Reading input or a word list failed
    Io(String),
}

impl fmt::Display for HelperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "invalid word: {e}"),
            Self::InvalidFeedback(e) => write!(f, "invalid feedback: {e}"),
            Self::EmptyCandidateSet => write!(
                f,
                "no candidates remain; the recorded feedback is contradictory (try 'reset')"
            ),
            Self::UnknownCommand(input) => {
                write!(f, "unknown command: '{input}' (type 'help' for commands)")
            }
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for HelperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            Self::InvalidFeedback(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for HelperError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

impl From<FeedbackError> for HelperError {
    fn from(e: FeedbackError) -> Self {
        Self::InvalidFeedback(e)
    }
}

impl From<std::io::Error> for HelperError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
