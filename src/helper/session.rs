//! Per-session state: one dictionary, one guess log

use super::constraints::Constraints;
use super::filter::filter;
use super::ranker::{InfoWeights, Mode, Ranker, Suggestion};
use crate::core::{GuessHistory, HelperError, Word};

/// Owns the dictionary and guess history for a single player
///
/// Nothing is shared between sessions; a host juggling several players keeps
/// one `Session` per player.
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::helper::{Mode, Session};
///
/// let dictionary: Vec<Word> = ["plane", "sleek", "sleep", "slept"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let mut session = Session::new(dictionary);
/// session.add("slate", "ggbby").unwrap();
///
/// let ranked = session.suggest(Mode::Solve).unwrap();
/// assert_eq!(ranked.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    dictionary: Vec<Word>,
    history: GuessHistory,
    ranker: Ranker,
}

impl Session {
    #[must_use]
    pub fn new(dictionary: Vec<Word>) -> Self {
        Self::with_weights(dictionary, InfoWeights::default())
    }

    /// Create a session with a custom info-mode weighting
    #[must_use]
    pub fn with_weights(dictionary: Vec<Word>, weights: InfoWeights) -> Self {
        log::info!("session started with {} dictionary words", dictionary.len());
        let ranker = Ranker::with_weights(&dictionary, weights);
        Self {
            dictionary,
            history: GuessHistory::new(),
            ranker,
        }
    }

    /// Record a guess and its feedback
    ///
    /// # Errors
    /// Returns `HelperError::InvalidWord` or `HelperError::InvalidFeedback`;
    /// the history is unchanged on error.
    pub fn add(&mut self, word: &str, feedback: &str) -> Result<(), HelperError> {
        self.history.add(word, feedback)
    }

    /// Forget every recorded guess
    pub fn reset(&mut self) {
        log::info!("session reset after {} guesses", self.history.len());
        self.history.reset();
    }

    /// Swap in a new dictionary, keeping the guess history
    pub fn set_dictionary(&mut self, dictionary: Vec<Word>) {
        log::info!(
            "dictionary replaced: {} -> {} words",
            self.dictionary.len(),
            dictionary.len()
        );
        self.ranker = Ranker::with_weights(&dictionary, self.ranker.weights());
        self.dictionary = dictionary;
    }

    #[inline]
    #[must_use]
    pub const fn history(&self) -> &GuessHistory {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    #[must_use]
    pub fn constraints(&self) -> Constraints {
        Constraints::derive(&self.history)
    }

    /// Dictionary words consistent with every recorded guess
    #[must_use]
    pub fn candidates(&self) -> Vec<&Word> {
        filter(&self.dictionary, &self.constraints())
    }

    /// Ranked suggestions under `mode`
    ///
    /// # Errors
    /// Returns `HelperError::EmptyCandidateSet` when no dictionary word is
    /// consistent with the history, in either mode.
    pub fn suggest(&self, mode: Mode) -> Result<Vec<Suggestion<'_>>, HelperError> {
        let candidates = self.candidates();
        if candidates.is_empty() {
            return Err(HelperError::EmptyCandidateSet);
        }
        Ok(self
            .ranker
            .rank(&self.dictionary, &candidates, mode, &self.history))
    }
}
