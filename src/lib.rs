//! Wordle Helper
//!
//! Records the colored feedback for each guess, derives exact constraints from
//! it (including repeated-letter feedback) and ranks the remaining words either
//! as likely answers or as probes that reveal the most about unknown letters.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::helper::{Mode, Session};
//! use wordle_helper::wordlists::WordSource;
//!
//! let mut session = Session::new(WordSource::Embedded.load().unwrap());
//! session.add("slate", "ggbby").unwrap();
//!
//! for suggestion in session.suggest(Mode::Solve).unwrap().iter().take(3) {
//!     println!("{} {:.3}", suggestion.word, suggestion.score);
//! }
//! ```

// Core domain types
pub mod core;

// Constraint derivation, filtering and ranking
pub mod helper;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
