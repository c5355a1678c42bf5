//! Dictionaries for the helper
//!
//! The default dictionary is embedded at build time; any other list is read
//! from a file with one word per line.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::WordSource;
