//! One-shot suggestion command
//!
//! Replays guesses given on the command line and ranks the result without
//! entering the REPL.

use crate::core::HelperError;
use crate::helper::{Mode, Session};

/// Settings for a one-shot suggestion run
#[derive(Debug, Clone, Default)]
pub struct SuggestConfig {
    pub mode: Mode,
    /// `(word, feedback)` pairs in the order they were played
    pub guesses: Vec<(String, String)>,
    pub limit: usize,
}

impl SuggestConfig {
    #[must_use]
    pub const fn new(mode: Mode, guesses: Vec<(String, String)>, limit: usize) -> Self {
        Self {
            mode,
            guesses,
            limit,
        }
    }
}

/// Owned result of a suggestion run
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestResult {
    pub mode: Mode,
    pub candidates: usize,
    /// Top suggestions, best first
    pub suggestions: Vec<(String, f64)>,
}

/// Split a `WORD:FEEDBACK` argument
///
/// # Errors
/// Returns a message when the separator is missing.
///
/// # Examples
/// ```
/// use wordle_helper::commands::parse_guess_arg;
///
/// assert_eq!(
///     parse_guess_arg("slate:ggbby").unwrap(),
///     ("slate".to_string(), "ggbby".to_string())
/// );
/// assert!(parse_guess_arg("slate").is_err());
/// ```
pub fn parse_guess_arg(arg: &str) -> Result<(String, String), String> {
    arg.split_once(':')
        .map(|(word, feedback)| (word.trim().to_string(), feedback.trim().to_string()))
        .ok_or_else(|| format!("expected WORD:FEEDBACK, got '{arg}'"))
}

/// Record every configured guess in `session` and rank under the configured mode
///
/// # Errors
/// Returns the first validation failure, or `HelperError::EmptyCandidateSet`
/// when the guesses leave nothing.
pub fn run_suggest(
    session: &mut Session,
    config: &SuggestConfig,
) -> Result<SuggestResult, HelperError> {
    for (word, feedback) in &config.guesses {
        session.add(word, feedback)?;
    }

    let candidates = session.candidates().len();
    let suggestions = session
        .suggest(config.mode)?
        .into_iter()
        .take(config.limit)
        .map(|s| (s.word.text().to_string(), s.score))
        .collect();

    Ok(SuggestResult {
        mode: config.mode,
        candidates,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn session() -> Session {
        let words = ["plane", "sleek", "sleep", "slept", "crane"];
        Session::new(words.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    fn guesses(list: &[&str]) -> Vec<(String, String)> {
        list.iter().map(|g| parse_guess_arg(g).unwrap()).collect()
    }

    #[test]
    fn solve_after_guess() {
        let config = SuggestConfig::new(Mode::Solve, guesses(&["slate:ggbby"]), 15);
        let result = run_suggest(&mut session(), &config).unwrap();

        assert_eq!(result.candidates, 2);
        let words: Vec<&str> = result.suggestions.iter().map(|(w, _)| w.as_str()).collect();
        assert!(words.contains(&"sleek"));
        assert!(words.contains(&"sleep"));
    }

    #[test]
    fn limit_truncates() {
        let config = SuggestConfig::new(Mode::Info, Vec::new(), 2);
        let result = run_suggest(&mut session(), &config).unwrap();
        assert_eq!(result.suggestions.len(), 2);
        assert_eq!(result.candidates, 5);
    }

    #[test]
    fn invalid_guess_is_reported() {
        let config = SuggestConfig::new(Mode::Solve, guesses(&["slat:ggbby"]), 15);
        assert!(matches!(
            run_suggest(&mut session(), &config),
            Err(HelperError::InvalidWord(_))
        ));
    }

    #[test]
    fn guess_arg_requires_separator() {
        assert!(parse_guess_arg("slateggbby").is_err());
        assert_eq!(
            parse_guess_arg(" slate : ggbby ").unwrap(),
            ("slate".to_string(), "ggbby".to_string())
        );
    }
}
