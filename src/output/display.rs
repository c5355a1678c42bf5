//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, suggestion_table};
use crate::commands::{BenchmarkResult, SuggestResult};
use crate::core::GuessHistory;
use crate::helper::{Constraints, Mode, Suggestion};
use colored::Colorize;
use std::io::{self, Write};

fn mode_heading(mode: Mode) -> &'static str {
    match mode {
        Mode::Solve => "Likely answers",
        Mode::Info => "Information probes",
    }
}

/// Write ranked suggestions followed by the candidate count
///
/// # Errors
/// Returns any error from `out`.
pub fn write_suggestions<W: Write>(
    out: &mut W,
    mode: Mode,
    ranked: &[Suggestion<'_>],
    candidates: usize,
    limit: usize,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", mode_heading(mode).bright_cyan().bold())?;
    write!(out, "{}", suggestion_table(ranked, limit))?;
    writeln!(
        out,
        "{} candidates remain ({} ranked)",
        candidates.to_string().bright_yellow(),
        ranked.len()
    )?;
    writeln!(out)
}

/// Write recorded guesses as colored tiles plus the derived constraints
///
/// # Errors
/// Returns any error from `out`.
pub fn write_history<W: Write>(
    out: &mut W,
    history: &GuessHistory,
    constraints: &Constraints,
) -> io::Result<()> {
    if history.is_empty() {
        return writeln!(out, "No guesses recorded.");
    }

    for (i, guess) in history.all().iter().enumerate() {
        writeln!(
            out,
            "{}. {}  {}",
            (i + 1).to_string().bright_black(),
            colored_guess(guess),
            guess.feedback()
        )?;
    }
    writeln!(out)?;
    writeln!(out, "{constraints}")
}

/// Print the result of a one-shot suggestion run
pub fn print_suggest_result(result: &SuggestResult) {
    println!("\n{}", mode_heading(result.mode).bright_cyan().bold());
    println!("Word\tScore");
    println!("-----\t------");
    for (word, score) in &result.suggestions {
        println!("{word}\t{score:.3}");
    }
    println!(
        "{} candidates remain",
        result.candidates.to_string().bright_yellow()
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Seed:             {}", result.seed);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Best case:        {}", result.min_guesses.to_string().green());
    println!("   Worst case:       {}", result.max_guesses.to_string().yellow());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.solved > 0 {
        println!("\n{}", "Distribution:".bright_cyan().bold());
        let mut counts: Vec<(usize, usize)> =
            result.distribution.iter().map(|(&g, &c)| (g, c)).collect();
        counts.sort_unstable();
        for (guesses, count) in counts {
            let pct = count as f64 / result.total_words as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failures.is_empty() {
        println!(
            "\n{} {}",
            "Failed:".red().bold(),
            result.failures.join(", ")
        );
    }
}
