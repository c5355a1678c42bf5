//! Dictionary loading
//!
//! Every source goes through the same normalization: entries are trimmed and
//! lowercased, blank or invalid lines are skipped and repeats are dropped,
//! keeping the first occurrence.

use super::WORDS;
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Where a session's dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A text file with one word per line
    File(PathBuf),
}

impl WordSource {
    /// Read the dictionary from this source
    ///
    /// # Errors
    /// Returns an I/O error if a file source cannot be read.
    pub fn load(&self) -> io::Result<Vec<Word>> {
        let words = match self {
            Self::Embedded => words_from_slice(WORDS),
            Self::File(path) => load_from_file(path)?,
        };
        log::info!("loaded {} words from {self}", words.len());
        Ok(words)
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded list"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl FromStr for WordSource {
    type Err = String;

    /// `all` selects the embedded list; anything else is a file path
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("word list must be 'all' or a file path".to_string()),
            "all" => Ok(Self::Embedded),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_helper::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Normalize raw entries into a dictionary
#[must_use]
pub fn words_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut words = Vec::new();
    let mut skipped = 0usize;

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match Word::new(trimmed) {
            Ok(word) => {
                if seen.insert(word.text().to_string()) {
                    words.push(word);
                }
            }
            Err(e) => {
                log::trace!("skipping '{trimmed}': {e}");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::warn!("skipped {skipped} invalid word list entries");
    }

    words
}

/// Convert an embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use wordle_helper::wordlists::loader::words_from_slice;
/// use wordle_helper::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let words = words_from_slice(&["crane", "toolong", "abc", "sl4te", "slate"]);

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }

    #[test]
    fn entries_are_normalized_and_deduplicated() {
        let words = words_from_lines("  CRANE\n\nslate\ncrane\nSlate \nsleek".lines());

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "sleek"]);
    }

    #[test]
    fn empty_input() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn source_from_str() {
        assert_eq!("all".parse::<WordSource>(), Ok(WordSource::Embedded));
        assert_eq!(
            "lists/mine.txt".parse::<WordSource>(),
            Ok(WordSource::File(PathBuf::from("lists/mine.txt")))
        );
        assert!("".parse::<WordSource>().is_err());
    }

    #[test]
    fn embedded_source_loads_everything() {
        let words = WordSource::Embedded.load().unwrap();
        assert_eq!(words.len(), WORDS.len());
    }

    #[test]
    fn missing_file_is_an_error() {
        let source = WordSource::File(PathBuf::from("no/such/list.txt"));
        assert!(source.load().is_err());
    }

    #[test]
    fn file_source_reads_and_normalizes() {
        let path = std::env::temp_dir().join(format!("wordle_helper_list_{}.txt", std::process::id()));
        fs::write(&path, "Crane\nslate\n\nbogus!\ncrane\n").unwrap();

        let words = WordSource::File(path.clone()).load().unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate"]);
    }
}
