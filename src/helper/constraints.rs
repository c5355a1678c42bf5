//! Constraint derivation from recorded feedback
//!
//! Each guess is turned into constraints on its own, replaying how the puzzle
//! hands out marks for repeated letters, and the per-guess results are then
//! merged. A black mark never means "absent" by itself: it caps the letter's
//! count at the number of green and yellow marks the same letter received in
//! that guess.

use crate::core::{Guess, GuessHistory, Mark, WORD_LENGTH};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Everything known about the answer after some number of guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    fixed: [Option<u8>; WORD_LENGTH],
    excluded_at: [FxHashSet<u8>; WORD_LENGTH],
    min_count: FxHashMap<u8, u8>,
    max_count: FxHashMap<u8, u8>,
    /// Two guesses fixed different letters at the same position
    conflict: bool,
}

impl Constraints {
    /// No constraints: every word is allowed
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Constraints implied by a single guess
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Guess;
    /// use wordle_helper::helper::Constraints;
    ///
    /// // One s is green, the other two are black: exactly one s
    /// let guess = Guess::parse("sassy", "gybbb").unwrap();
    /// let constraints = Constraints::from_guess(&guess);
    /// assert_eq!(constraints.min_count(b's'), 1);
    /// assert_eq!(constraints.max_count(b's'), Some(1));
    /// assert_eq!(constraints.fixed(0), Some(b's'));
    /// ```
    #[must_use]
    pub fn from_guess(guess: &Guess) -> Self {
        let mut constraints = Self::default();
        let word = guess.word();
        let marks = guess.feedback().marks();

        for letter in word.distinct_letters() {
            let positions: Vec<usize> = (0..WORD_LENGTH)
                .filter(|&p| word.char_at(p) == letter)
                .collect();

            let hits = positions.iter().filter(|&&p| marks[p].is_hit()).count();
            let hits = u8::try_from(hits).unwrap_or(u8::MAX);
            let any_black = positions.iter().any(|&p| marks[p] == Mark::Black);

            if hits > 0 {
                constraints.min_count.insert(letter, hits);
            }
            if any_black {
                constraints.max_count.insert(letter, hits);
            }

            for &p in &positions {
                match marks[p] {
                    Mark::Green => constraints.fixed[p] = Some(letter),
                    Mark::Yellow => {
                        constraints.excluded_at[p].insert(letter);
                    }
                    // With zero hits the count cap of 0 already covers this square
                    Mark::Black if hits > 0 => {
                        constraints.excluded_at[p].insert(letter);
                    }
                    Mark::Black => {}
                }
            }
        }

        constraints
    }

    /// Fold another set of constraints into this one
    ///
    /// Fixed letters from `other` take precedence, excluded sets are unioned,
    /// the larger minimum wins and the smaller maximum wins. Replacing one
    /// fixed letter with a different one marks the result contradictory.
    pub fn merge(&mut self, other: Self) {
        self.conflict |= other.conflict;
        for (slot, letter) in self.fixed.iter_mut().zip(other.fixed) {
            if letter.is_some() {
                if slot.is_some() && *slot != letter {
                    self.conflict = true;
                }
                *slot = letter;
            }
        }

        for (mine, theirs) in self.excluded_at.iter_mut().zip(other.excluded_at) {
            mine.extend(theirs);
        }

        for (letter, count) in other.min_count {
            let entry = self.min_count.entry(letter).or_insert(0);
            *entry = (*entry).max(count);
        }

        for (letter, count) in other.max_count {
            self.max_count
                .entry(letter)
                .and_modify(|current| *current = (*current).min(count))
                .or_insert(count);
        }
    }

    /// Fold the whole history into one set of constraints
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::GuessHistory;
    /// use wordle_helper::helper::Constraints;
    ///
    /// let mut history = GuessHistory::new();
    /// history.add("slate", "ggbby").unwrap();
    ///
    /// let constraints = Constraints::derive(&history);
    /// assert_eq!(constraints.fixed(1), Some(b'l'));
    /// assert_eq!(constraints.max_count(b'a'), Some(0));
    /// assert_eq!(constraints.min_count(b'e'), 1);
    /// ```
    #[must_use]
    pub fn derive(history: &GuessHistory) -> Self {
        let constraints = history
            .all()
            .iter()
            .map(Self::from_guess)
            .fold(Self::default(), |mut acc, next| {
                acc.merge(next);
                acc
            });

        log::debug!(
            "derived constraints from {} guesses: {} fixed, {} required letters, {} capped letters",
            history.len(),
            constraints.fixed.iter().flatten().count(),
            constraints.min_count.len(),
            constraints.max_count.len()
        );
        if constraints.is_contradictory() {
            log::debug!("recorded feedback is contradictory; no word can satisfy it");
        }

        constraints
    }

    /// Letter required at `position`, if known
    #[inline]
    #[must_use]
    pub const fn fixed(&self, position: usize) -> Option<u8> {
        self.fixed[position]
    }

    /// Letters known not to occupy `position`
    #[inline]
    #[must_use]
    pub const fn excluded_at(&self, position: usize) -> &FxHashSet<u8> {
        &self.excluded_at[position]
    }

    /// Minimum number of copies of `letter` (0 when nothing is known)
    #[inline]
    #[must_use]
    pub fn min_count(&self, letter: u8) -> u8 {
        self.min_count.get(&letter).copied().unwrap_or(0)
    }

    /// Maximum number of copies of `letter`, if bounded
    #[inline]
    #[must_use]
    pub fn max_count(&self, letter: u8) -> Option<u8> {
        self.max_count.get(&letter).copied()
    }

    /// Iterate `(letter, minimum)` pairs
    pub fn min_counts(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.min_count.iter().map(|(&l, &c)| (l, c))
    }

    /// Iterate `(letter, maximum)` pairs
    pub fn max_counts(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.max_count.iter().map(|(&l, &c)| (l, c))
    }

    /// Number of fixed positions that hold `letter`
    #[must_use]
    pub fn fixed_count(&self, letter: u8) -> u8 {
        let count = self.fixed.iter().filter(|&&f| f == Some(letter)).count();
        u8::try_from(count).unwrap_or(u8::MAX)
    }

    /// Letters known to be present that still have copies without a known position
    ///
    /// Sorted alphabetically.
    #[must_use]
    pub fn unplaced_letters(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self
            .min_count
            .iter()
            .filter(|&(&letter, &min)| min > self.fixed_count(letter))
            .map(|(&letter, _)| letter)
            .collect();
        letters.sort_unstable();
        letters
    }

    /// True if `letter` could still turn out to sit at `position`
    #[must_use]
    pub fn is_open(&self, position: usize, letter: u8) -> bool {
        self.fixed[position].is_none() && !self.excluded_at[position].contains(&letter)
    }

    /// True if no word can satisfy these constraints
    ///
    /// Either two guesses fixed different letters at one position or some
    /// letter needs more copies than it is allowed.
    #[must_use]
    pub fn is_contradictory(&self) -> bool {
        self.conflict
            || self
                .min_count
                .iter()
                .any(|(letter, &min)| self.max_count.get(letter).is_some_and(|&max| min > max))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for Constraints {
    /// One constraint per line, positions counted from 1
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = Vec::new();

        for (p, letter) in self.fixed.iter().enumerate() {
            if let Some(letter) = letter {
                lines.push(format!("{} in position {}", char::from(*letter), p + 1));
            }
        }

        for (p, excluded) in self.excluded_at.iter().enumerate() {
            let mut letters: Vec<u8> = excluded.iter().copied().collect();
            letters.sort_unstable();
            for letter in letters {
                lines.push(format!("not {} in position {}", char::from(letter), p + 1));
            }
        }

        let mut mins: Vec<(u8, u8)> = self.min_counts().collect();
        mins.sort_unstable();
        for (letter, count) in mins {
            lines.push(format!("at least {count} {}", char::from(letter)));
        }

        let mut maxes: Vec<(u8, u8)> = self.max_counts().collect();
        maxes.sort_unstable();
        for (letter, count) in maxes {
            lines.push(format!("at most {count} {}", char::from(letter)));
        }

        if self.conflict {
            lines.push("conflicting green letters for one position".to_string());
        }

        if lines.is_empty() {
            write!(f, "no constraints")
        } else {
            write!(f, "{}", lines.join("\n"))
        }
    }
}
