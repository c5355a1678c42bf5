//! Command implementations

pub mod benchmark;
pub mod command;
pub mod repl;
pub mod suggest;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, play_game, run_benchmark};
pub use command::{Command, HELP};
pub use repl::{ReplConfig, run_repl};
pub use suggest::{SuggestConfig, SuggestResult, parse_guess_arg, run_suggest};
