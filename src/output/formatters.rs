//! Formatting utilities for terminal output

use crate::core::{Guess, Mark};
use crate::helper::Suggestion;
use colored::Colorize;

/// Render a guess as colored letter tiles, e.g. " S  L  A  T  E "
#[must_use]
pub fn colored_guess(guess: &Guess) -> String {
    guess
        .word()
        .chars()
        .iter()
        .zip(guess.feedback().marks())
        .map(|(&letter, mark)| {
            let tile = format!(" {} ", char::from(letter).to_ascii_uppercase());
            match mark {
                Mark::Green => tile.black().on_green().bold().to_string(),
                Mark::Yellow => tile.black().on_yellow().bold().to_string(),
                Mark::Black => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Plain `Word`/`Score` table of the first `limit` suggestions
#[must_use]
pub fn suggestion_table(ranked: &[Suggestion<'_>], limit: usize) -> String {
    let mut table = String::from("Word\tScore\n-----\t------\n");
    for suggestion in ranked.iter().take(limit) {
        table.push_str(&format!(
            "{}\t{:.3}\n",
            suggestion.word.text(),
            suggestion.score
        ));
    }
    table
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
