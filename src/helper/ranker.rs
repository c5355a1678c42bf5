//! Suggestion ranking
//!
//! Two objectives share one entry point:
//! - Solve: guess words that are likely to be the answer, scored by how common
//!   each of their letters is at its position among the surviving candidates.
//! - Info: probe unknowns. Any dictionary word is eligible except those that
//!   repeat a known green letter in its known square. Words earn credit for
//!   moving a present-but-unplaced letter to an untried square and for using
//!   common letters no guess has tried yet.

use super::constraints::Constraints;
use super::frequency::{LetterFrequencies, PositionalFrequencies};
use crate::core::{GuessHistory, WORD_LENGTH, Word};
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Ranking objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Maximize the chance of hitting the answer now
    #[default]
    Solve,
    /// Maximize what the next guess reveals about unresolved letters
    Info,
}

impl Mode {
    /// Parse a mode name ("solve" or "info", case-insensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "solve" => Some(Self::Solve),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Solve => "solve",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown mode '{s}' (expected solve or info)"))
    }
}

/// A ranked word and its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Suggestion<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Info-mode weighting policy
///
/// A probe of an unplaced letter is worth `yellow_probe_weight`; an untried
/// letter is worth its dictionary-wide frequency times `new_letter_weight`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfoWeights {
    pub yellow_probe_weight: f64,
    pub new_letter_weight: f64,
}

impl InfoWeights {
    #[must_use]
    pub const fn new(yellow_probe_weight: f64, new_letter_weight: f64) -> Self {
        Self {
            yellow_probe_weight,
            new_letter_weight,
        }
    }
}

impl Default for InfoWeights {
    fn default() -> Self {
        Self::new(10.0, 100.0)
    }
}

/// Scores a single word under some objective
pub trait Scorer: Sync {
    fn score(&self, word: &Word) -> f64;
}

/// Sum of positional letter shares among the surviving candidates
pub struct SolveScorer {
    positional: PositionalFrequencies,
}

impl SolveScorer {
    #[must_use]
    pub fn new(candidates: &[&Word]) -> Self {
        Self {
            positional: PositionalFrequencies::from_words(candidates.iter().copied()),
        }
    }
}

impl Scorer for SolveScorer {
    fn score(&self, word: &Word) -> f64 {
        (0..WORD_LENGTH)
            .map(|p| self.positional.share(p, word.char_at(p)))
            .sum()
    }
}

/// Rewards probing unplaced letters and trying common new letters
pub struct InfoScorer<'a> {
    constraints: &'a Constraints,
    history: &'a GuessHistory,
    frequencies: &'a LetterFrequencies,
    weights: InfoWeights,
    unplaced: Vec<u8>,
}

impl<'a> InfoScorer<'a> {
    #[must_use]
    pub fn new(
        constraints: &'a Constraints,
        history: &'a GuessHistory,
        frequencies: &'a LetterFrequencies,
        weights: InfoWeights,
    ) -> Self {
        Self {
            constraints,
            history,
            frequencies,
            weights,
            unplaced: constraints.unplaced_letters(),
        }
    }
}

impl Scorer for InfoScorer<'_> {
    fn score(&self, word: &Word) -> f64 {
        let probes = self
            .unplaced
            .iter()
            .filter(|&&letter| {
                (0..WORD_LENGTH)
                    .any(|p| word.char_at(p) == letter && self.constraints.is_open(p, letter))
            })
            .count();

        let fresh: f64 = word
            .distinct_letters()
            .filter(|&letter| !self.history.has_tried(letter))
            .map(|letter| self.frequencies.frequency(letter))
            .sum();

        probes as f64 * self.weights.yellow_probe_weight + fresh * self.weights.new_letter_weight
    }
}

/// Static dispatch over the available scorers
pub enum ModeScorer<'a> {
    Solve(SolveScorer),
    Info(InfoScorer<'a>),
}

impl Scorer for ModeScorer<'_> {
    fn score(&self, word: &Word) -> f64 {
        match self {
            Self::Solve(s) => s.score(word),
            Self::Info(s) => s.score(word),
        }
    }
}

/// Dictionary words eligible for an info guess
///
/// Drops every word that puts a known green letter back in its known square.
#[must_use]
pub fn info_pool<'a>(dictionary: &'a [Word], constraints: &Constraints) -> Vec<&'a Word> {
    dictionary
        .iter()
        .filter(|word| (0..WORD_LENGTH).all(|p| constraints.fixed(p) != Some(word.char_at(p))))
        .collect()
}

/// Score `pool` and order it by descending score, then ascending word text
#[must_use]
pub fn rank_with<'a, S: Scorer>(pool: &[&'a Word], scorer: &S) -> Vec<Suggestion<'a>> {
    let mut ranked: Vec<Suggestion<'a>> = pool
        .par_iter()
        .map(|&word| Suggestion {
            word,
            score: scorer.score(word),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.word.text().cmp(b.word.text()))
    });
    ranked
}

/// Ranks suggestions for one dictionary
///
/// Holds the dictionary-wide letter frequencies so repeated calls within a
/// session do not recount them.
#[derive(Debug, Clone)]
pub struct Ranker {
    frequencies: LetterFrequencies,
    weights: InfoWeights,
}

impl Ranker {
    /// Build a ranker for `dictionary` with the default info weighting
    #[must_use]
    pub fn new(dictionary: &[Word]) -> Self {
        Self::with_weights(dictionary, InfoWeights::default())
    }

    #[must_use]
    pub fn with_weights(dictionary: &[Word], weights: InfoWeights) -> Self {
        Self {
            frequencies: LetterFrequencies::from_words(dictionary),
            weights,
        }
    }

    #[inline]
    #[must_use]
    pub const fn weights(&self) -> InfoWeights {
        self.weights
    }

    /// Rank suggestions under `mode`
    ///
    /// Solve mode ranks only `candidates`. Info mode ranks the info pool drawn
    /// from `dictionary`, which must be the dictionary this ranker was built
    /// for.
    #[must_use]
    pub fn rank<'a>(
        &self,
        dictionary: &'a [Word],
        candidates: &[&'a Word],
        mode: Mode,
        history: &GuessHistory,
    ) -> Vec<Suggestion<'a>> {
        match mode {
            Mode::Solve => {
                log::debug!("ranking {} candidates for solving", candidates.len());
                let scorer = ModeScorer::Solve(SolveScorer::new(candidates));
                rank_with(candidates, &scorer)
            }
            Mode::Info => {
                let constraints = Constraints::derive(history);
                let pool = info_pool(dictionary, &constraints);
                log::debug!("ranking {} dictionary words for information", pool.len());
                let scorer = ModeScorer::Info(InfoScorer::new(
                    &constraints,
                    history,
                    &self.frequencies,
                    self.weights,
                ));
                rank_with(&pool, &scorer)
            }
        }
    }
}

/// Rank suggestions with a one-off ranker
///
/// # Examples
/// ```
/// use wordle_helper::core::{GuessHistory, Word};
/// use wordle_helper::helper::{Mode, rank};
///
/// let dictionary: Vec<Word> = ["crane", "slate", "shale"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = dictionary.iter().collect();
///
/// let ranked = rank(&dictionary, &candidates, Mode::Solve, &GuessHistory::new());
/// assert_eq!(ranked[0].word.text(), "shale");
/// ```
#[must_use]
pub fn rank<'a>(
    dictionary: &'a [Word],
    candidates: &[&'a Word],
    mode: Mode,
    history: &GuessHistory,
) -> Vec<Suggestion<'a>> {
    Ranker::new(dictionary).rank(dictionary, candidates, mode, history)
}
