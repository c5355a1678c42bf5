//! Recorded guesses for one session

use super::error::HelperError;
use super::feedback::Feedback;
use super::word::Word;

/// A guessed word together with the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    feedback: Feedback,
}

impl Guess {
    #[must_use]
    pub const fn new(word: Word, feedback: Feedback) -> Self {
        Self { word, feedback }
    }

    /// Validate raw text and build a guess
    ///
    /// # Errors
    /// Returns `HelperError::InvalidWord` or `HelperError::InvalidFeedback`
    /// when either part fails validation. The word is checked first.
    pub fn parse(word: &str, feedback: &str) -> Result<Self, HelperError> {
        let word = Word::new(word)?;
        let feedback = Feedback::parse(feedback)?;
        Ok(Self::new(word, feedback))
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Ordered log of guesses, append-only until reset
///
/// The same word may be recorded more than once; every entry is kept and
/// contributes to constraint derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    guesses: Vec<Guess>,
}

impl GuessHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a guess
    ///
    /// Validation runs before anything is stored, so a failed call leaves
    /// the history untouched.
    ///
    /// # Errors
    /// Returns `HelperError::InvalidWord` or `HelperError::InvalidFeedback`.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{GuessHistory, HelperError};
    ///
    /// let mut history = GuessHistory::new();
    /// history.add("slate", "ggbby").unwrap();
    /// assert!(matches!(history.add("slat", "ggbby"), Err(HelperError::InvalidWord(_))));
    /// assert_eq!(history.len(), 1);
    /// ```
    pub fn add(&mut self, word: &str, feedback: &str) -> Result<(), HelperError> {
        let guess = Guess::parse(word, feedback)?;
        self.push(guess);
        Ok(())
    }

    /// Append an already validated guess
    pub fn push(&mut self, guess: Guess) {
        log::debug!(
            "recorded guess #{}: {} {}",
            self.guesses.len() + 1,
            guess.word(),
            guess.feedback()
        );
        self.guesses.push(guess);
    }

    /// Remove every guess, restoring the initial empty state
    pub fn reset(&mut self) {
        self.guesses.clear();
    }

    #[must_use]
    pub fn all(&self) -> &[Guess] {
        &self.guesses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    /// True if `letter` appeared in any recorded guess
    #[must_use]
    pub fn has_tried(&self, letter: u8) -> bool {
        self.guesses.iter().any(|g| g.word().has_letter(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackError, WordError};

    #[test]
    fn add_appends_in_order() {
        let mut history = GuessHistory::new();
        history.add("slate", "ggbby").unwrap();
        history.add("SLEEK", "GGgyB").unwrap();

        let words: Vec<&str> = history.all().iter().map(|g| g.word().text()).collect();
        assert_eq!(words, vec!["slate", "sleek"]);
        assert_eq!(history.all()[1].feedback().to_string(), "GGGYB");
    }

    #[test]
    fn add_rejects_invalid_word_without_mutation() {
        let mut history = GuessHistory::new();
        history.add("crane", "bbbbb").unwrap();

        let result = history.add("slat", "ggbby");
        assert_eq!(
            result,
            Err(HelperError::InvalidWord(WordError::InvalidLength(4)))
        );
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn add_rejects_invalid_feedback_without_mutation() {
        let mut history = GuessHistory::new();

        assert_eq!(
            history.add("slate", "ggbb"),
            Err(HelperError::InvalidFeedback(FeedbackError::InvalidLength(4)))
        );
        assert_eq!(
            history.add("slate", "ggbbx"),
            Err(HelperError::InvalidFeedback(FeedbackError::InvalidMark('x')))
        );
        assert!(history.is_empty());
    }

    #[test]
    fn duplicate_guesses_are_kept() {
        let mut history = GuessHistory::new();
        history.add("crane", "bybbg").unwrap();
        history.add("crane", "bybbg").unwrap();
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn reset_clears_everything() {
        let mut history = GuessHistory::new();
        history.add("crane", "bybbg").unwrap();
        history.reset();
        assert_eq!(history, GuessHistory::new());
    }

    #[test]
    fn has_tried_tracks_guessed_letters() {
        let mut history = GuessHistory::new();
        history.add("crane", "bybbg").unwrap();
        assert!(history.has_tried(b'c'));
        assert!(history.has_tried(b'e'));
        assert!(!history.has_tried(b's'));
    }
}
