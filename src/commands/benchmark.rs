//! Benchmark command
//!
//! Plays simulated games against randomly sampled answers, always guessing the
//! top solve-mode suggestion.

use crate::core::{Feedback, Guess, GuessHistory, Word};
use crate::helper::{Constraints, Mode, Ranker, filter};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Benchmark settings
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of answers to sample
    pub count: usize,
    /// Sampling seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Guesses allowed per game
    pub max_guesses: usize,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(count: usize, seed: Option<u64>, max_guesses: usize) -> Self {
        Self {
            count,
            seed,
            max_guesses,
            show_progress: true,
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new(50, None, 6)
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Answers not found within the guess limit
    pub failures: Vec<String>,
    /// Guesses spent on solved games
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
    pub seed: u64,
}

/// Play one game against `answer`
///
/// Returns the number of guesses used, or `None` if the answer was not found
/// within `max_guesses`.
#[must_use]
pub fn play_game(
    dictionary: &[Word],
    ranker: &Ranker,
    answer: &Word,
    max_guesses: usize,
) -> Option<usize> {
    let mut history = GuessHistory::new();

    for turn in 1..=max_guesses {
        let candidates = filter(dictionary, &Constraints::derive(&history));
        let ranked = ranker.rank(dictionary, &candidates, Mode::Solve, &history);
        let guess = ranked.first()?.word;

        let feedback = Feedback::calculate(guess, answer);
        if feedback.is_solved() {
            return Some(turn);
        }
        history.push(Guess::new(guess.clone(), feedback));
    }

    None
}

/// Run the benchmark over a random sample of `dictionary`
#[must_use]
pub fn run_benchmark(dictionary: &[Word], config: &BenchmarkConfig) -> BenchmarkResult {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let answers: Vec<&Word> = dictionary.choose_multiple(&mut rng, config.count).collect();
    log::info!(
        "benchmarking {} answers (seed {seed}, max {} guesses)",
        answers.len(),
        config.max_guesses
    );

    let ranker = Ranker::new(dictionary);
    let pb = if config.show_progress {
        ProgressBar::new(answers.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();

    for answer in &answers {
        pb.set_message(answer.text().to_string());
        match play_game(dictionary, &ranker, answer, config.max_guesses) {
            Some(guesses) => {
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            None => {
                log::debug!("failed to solve '{answer}'");
                failures.push(answer.text().to_string());
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_words = answers.len();
    let solved = total_words - failures.len();

    BenchmarkResult {
        total_words,
        solved,
        failures,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
        seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn quiet(count: usize, seed: u64, max_guesses: usize) -> BenchmarkConfig {
        BenchmarkConfig {
            show_progress: false,
            ..BenchmarkConfig::new(count, Some(seed), max_guesses)
        }
    }

    #[test]
    fn play_game_finds_answer() {
        let dictionary = words_from_slice(&["crane", "slate", "shale", "sleek", "sleep", "plane"]);
        let ranker = Ranker::new(&dictionary);

        for answer in &dictionary {
            let guesses = play_game(&dictionary, &ranker, answer, dictionary.len());
            assert!(guesses.is_some(), "did not solve '{answer}'");
        }
    }

    #[test]
    fn play_game_respects_limit() {
        let dictionary = words_from_slice(&["crane", "slate", "shale", "sleek", "sleep", "plane"]);
        let ranker = Ranker::new(&dictionary);
        let answer = Word::new("plane").unwrap();

        assert_eq!(play_game(&dictionary, &ranker, &answer, 0), None);
    }

    #[test]
    fn benchmark_runs() {
        let dictionary = words_from_slice(&WORDS[..200]);
        let result = run_benchmark(&dictionary, &quiet(10, 7, 20));

        assert_eq!(result.total_words, 10);
        assert_eq!(result.solved, 10);
        assert!(result.failures.is_empty());
        assert!(result.average_guesses >= 1.0);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
        assert_eq!(result.seed, 7);
    }

    #[test]
    fn distribution_sums_to_solved() {
        let dictionary = words_from_slice(&WORDS[..200]);
        let result = run_benchmark(&dictionary, &quiet(12, 3, 6));

        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.solved);
        assert_eq!(result.solved + result.failures.len(), result.total_words);
    }

    #[test]
    fn same_seed_same_sample() {
        let dictionary = words_from_slice(&WORDS[..200]);
        let a = run_benchmark(&dictionary, &quiet(5, 11, 6));
        let b = run_benchmark(&dictionary, &quiet(5, 11, 6));

        assert_eq!(a.total_guesses, b.total_guesses);
        assert_eq!(a.failures, b.failures);
    }

    #[test]
    fn count_larger_than_dictionary() {
        let dictionary = words_from_slice(&["crane", "slate"]);
        let result = run_benchmark(&dictionary, &quiet(10, 1, 6));
        assert_eq!(result.total_words, 2);
    }

    #[test]
    fn empty_dictionary() {
        let result = run_benchmark(&[], &quiet(10, 1, 6));
        assert_eq!(result.total_words, 0);
        assert_eq!(result.solved, 0);
        assert_eq!(result.min_guesses, 0);
    }
}
