//! Colored feedback for a guess
//!
//! Feedback is written as five characters over `G`, `Y` and `B`
//! (case-insensitive), aligned with the letters of the guessed word:
//! - `G` = Green (right letter, right position)
//! - `Y` = Yellow (letter present elsewhere)
//! - `B` = Black (no further copies beyond the green/yellow ones)

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for one position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Green,
    Yellow,
    Black,
}

impl Mark {
    /// Parse a single feedback character
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' => Some(Self::Green),
            'Y' | 'y' => Some(Self::Yellow),
            'B' | 'b' => Some(Self::Black),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Black => 'B',
        }
    }

    /// Green or yellow: the letter is accounted for in the answer
    #[inline]
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Green | Self::Yellow)
    }
}

/// Error type for invalid feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidMark(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "feedback must be exactly {WORD_LENGTH} marks, got {len}")
            }
            Self::InvalidMark(ch) => {
                write!(f, "feedback mark '{ch}' is not one of G, Y or B")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback for a whole guess, one mark per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([Mark::Green; WORD_LENGTH]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    /// Parse a feedback string such as `"ggbby"`
    ///
    /// # Errors
    /// Returns `FeedbackError::InvalidLength` unless the text has exactly 5
    /// characters, and `FeedbackError::InvalidMark` for the first character
    /// outside `G`/`Y`/`B`.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::parse("GgBbY").unwrap();
    /// assert_eq!(feedback.mark(0), Mark::Green);
    /// assert_eq!(feedback.mark(4), Mark::Yellow);
    ///
    /// assert!(Feedback::parse("ggbb").is_err());
    /// assert!(Feedback::parse("ggbbx").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, FeedbackError> {
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(len));
        }

        let mut marks = [Mark::Black; WORD_LENGTH];
        for (slot, ch) in marks.iter_mut().zip(text.chars()) {
            *slot = Mark::from_char(ch).ok_or(FeedbackError::InvalidMark(ch))?;
        }

        Ok(Self(marks))
    }

    /// Compute the feedback the puzzle shows for `guess` when the answer is `answer`
    ///
    /// Greens are assigned first and consume their letter from the answer's
    /// pool; yellows are then handed out left to right while copies remain.
    /// Every other position is black.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Feedback, Word};
    ///
    /// let guess = Word::new("sassy").unwrap();
    /// let answer = Word::new("shale").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_string(), "GYBBB");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Black; WORD_LENGTH];
        let mut available = [0u8; 26];
        for &ch in answer.chars() {
            available[usize::from(ch - b'a')] += 1;
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                *mark = Mark::Green;
                available[usize::from(letter - b'a')] -= 1;
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Green {
                continue;
            }
            let slot = &mut available[usize::from(guess.char_at(i) - b'a')];
            if *slot > 0 {
                *mark = Mark::Yellow;
                *slot -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn mark(&self, position: usize) -> Mark {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Convert feedback to emoji tiles, e.g. "🟩🟩⬛⬛🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|mark| match mark {
                Mark::Green => '🟩',
                Mark::Yellow => '🟨',
                Mark::Black => '⬛',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback_for(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        Feedback::calculate(&guess, &answer).to_string()
    }

    #[test]
    fn parse_valid_mixed_case() {
        let feedback = Feedback::parse("gYbGy").unwrap();
        assert_eq!(
            feedback.marks(),
            &[Mark::Green, Mark::Yellow, Mark::Black, Mark::Green, Mark::Yellow]
        );
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(Feedback::parse("ggbb"), Err(FeedbackError::InvalidLength(4)));
        assert_eq!(
            Feedback::parse("ggbbyy"),
            Err(FeedbackError::InvalidLength(6))
        );
        assert_eq!(Feedback::parse(""), Err(FeedbackError::InvalidLength(0)));
    }

    #[test]
    fn parse_rejects_unknown_marks() {
        assert_eq!(Feedback::parse("ggbbx"), Err(FeedbackError::InvalidMark('x')));
        assert_eq!(Feedback::parse("gg-by"), Err(FeedbackError::InvalidMark('-')));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let feedback = Feedback::parse("ggbby").unwrap();
        assert_eq!(feedback.to_string(), "GGBBY");
        assert_eq!(feedback.to_emoji(), "🟩🟩⬛⬛🟨");
    }

    #[test]
    fn calculate_all_green() {
        assert_eq!(feedback_for("slate", "slate"), "GGGGG");
        assert!(Feedback::parse("GGGGG").unwrap().is_solved());
    }

    #[test]
    fn calculate_all_black() {
        assert_eq!(feedback_for("abcde", "fghij"), "BBBBB");
    }

    #[test]
    fn calculate_single_copy_in_answer() {
        // One s in the answer: only the green copy is marked
        assert_eq!(feedback_for("sassy", "shale"), "GYBBB");
        // Two s in the answer, one green: only one more copy turns yellow
        assert_eq!(feedback_for("sassy", "bliss"), "YBBGB");
    }

    #[test]
    fn calculate_green_takes_priority_over_yellow() {
        // ROBOT vs FLOOR: second O is green, first O is yellow
        assert_eq!(feedback_for("robot", "floor"), "YYBGB");
        // SPEED vs ERASE: both Es yellow
        assert_eq!(feedback_for("speed", "erase"), "YBYYB");
    }
}
