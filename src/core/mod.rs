//! Core domain types for the helper
//!
//! Words, feedback marks, recorded guesses and the error type. Everything here
//! is pure validation and bookkeeping; no ranking logic lives in this module.

mod error;
mod feedback;
mod history;
mod word;

pub use error::HelperError;
pub use feedback::{Feedback, FeedbackError, Mark};
pub use history::{Guess, GuessHistory};
pub use word::{WORD_LENGTH, Word, WordError};
