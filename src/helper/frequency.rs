//! Letter frequency tables over a word set

use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// How often each letter occurs across all positions of a word set
#[derive(Debug, Clone, Default)]
pub struct LetterFrequencies {
    counts: FxHashMap<u8, usize>,
    total_letters: usize,
}

impl LetterFrequencies {
    /// Count every letter of every word
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Word;
    /// use wordle_helper::helper::LetterFrequencies;
    ///
    /// let words = vec![Word::new("sassy").unwrap(), Word::new("crane").unwrap()];
    /// let freq = LetterFrequencies::from_words(&words);
    /// assert!((freq.frequency(b's') - 0.3).abs() < 1e-9);
    /// assert_eq!(freq.frequency(b'z'), 0.0);
    /// ```
    #[must_use]
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
        let mut total_letters = 0;

        for word in words {
            for &ch in word.chars() {
                *counts.entry(ch).or_insert(0) += 1;
            }
            total_letters += WORD_LENGTH;
        }

        Self {
            counts,
            total_letters,
        }
    }

    /// Share of all letter slots taken by `letter`, in `[0, 1]`
    #[must_use]
    pub fn frequency(&self, letter: u8) -> f64 {
        if self.total_letters == 0 {
            return 0.0;
        }
        self.counts.get(&letter).copied().unwrap_or(0) as f64 / self.total_letters as f64
    }
}

/// Per-position letter counts over a word set
#[derive(Debug, Clone, Default)]
pub struct PositionalFrequencies {
    counts: [FxHashMap<u8, usize>; WORD_LENGTH],
    words: usize,
}

impl PositionalFrequencies {
    /// Count letters position by position over `words`
    #[must_use]
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut table = Self::default();
        for word in words {
            for (slot, &ch) in table.counts.iter_mut().zip(word.chars()) {
                *slot.entry(ch).or_insert(0) += 1;
            }
            table.words += 1;
        }
        table
    }

    /// Fraction of words with `letter` at `position`
    #[must_use]
    pub fn share(&self, position: usize, letter: u8) -> f64 {
        if self.words == 0 {
            return 0.0;
        }
        self.counts[position].get(&letter).copied().unwrap_or(0) as f64 / self.words as f64
    }

    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.words
    }
}
