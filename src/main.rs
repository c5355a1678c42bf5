//! Wordle Helper - CLI
//!
//! Line-based REPL (default), full-screen TUI, one-shot suggestions and a
//! self-play benchmark.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use wordle_helper::{
    commands::{
        BenchmarkConfig, ReplConfig, SuggestConfig, parse_guess_arg, run_benchmark, run_repl,
        run_suggest,
    },
    helper::{Mode, Session},
    output::{print_benchmark_result, print_suggest_result},
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Turns Wordle feedback into constraints and ranked suggestions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'all' (default, embedded list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: WordSource,

    /// Number of suggestions to print
    #[arg(short, long, global = true, default_value_t = 15)]
    limit: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based interactive helper (default)
    Repl,

    /// Full-screen interactive helper
    Play,

    /// Rank suggestions for guesses given on the command line
    Suggest {
        /// Ranking objective
        #[arg(short, long, value_enum, default_value_t = ModeArg::Solve)]
        mode: ModeArg,

        /// A guess and its feedback, e.g. slate:ggbby (repeatable, in play order)
        #[arg(short, long = "guess", value_parser = parse_guess_arg)]
        guesses: Vec<(String, String)>,
    },

    /// Play simulated games against random answers
    Benchmark {
        /// Number of random answers to play
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,

        /// Seed for answer sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Guesses allowed per game
        #[arg(long, default_value_t = 6)]
        max_guesses: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Solve,
    Info,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Solve => Self::Solve,
            ModeArg::Info => Self::Info,
        }
    }
}

/// Log level for `-v` repetitions; the TUI owns stderr, so it logs nothing
fn log_level(verbose: u8, tui: bool) -> log::LevelFilter {
    if tui {
        return log::LevelFilter::Off;
    }
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8, tui: bool) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(log_level(verbose, tui));
    if !tui {
        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }
    }
    builder.format_timestamp(None).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, matches!(cli.command, Some(Commands::Play)));

    let words = cli
        .wordlist
        .load()
        .with_context(|| format!("failed to load word list from {}", cli.wordlist))?;
    if words.is_empty() {
        anyhow::bail!("word list {} contains no valid five-letter words", cli.wordlist);
    }

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let mut session = Session::new(words);
            let config = ReplConfig::new(cli.wordlist, cli.limit);
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_repl(&mut session, &config, &mut stdin.lock(), &mut stdout.lock())?;
            Ok(())
        }
        Commands::Play => {
            use wordle_helper::interactive::{App, run_tui};

            let app = App::new(Session::new(words), ReplConfig::new(cli.wordlist, cli.limit));
            run_tui(app)
        }
        Commands::Suggest { mode, guesses } => {
            let mut session = Session::new(words);
            let config = SuggestConfig::new(mode.into(), guesses, cli.limit);
            let result = run_suggest(&mut session, &config)?;
            print_suggest_result(&result);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            max_guesses,
        } => {
            println!("Running benchmark on {count} random words...");
            let config = BenchmarkConfig::new(count, seed, max_guesses);
            let result = run_benchmark(&words, &config);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_log_level() {
        assert_eq!(log_level(0, false), log::LevelFilter::Warn);
        assert_eq!(log_level(1, false), log::LevelFilter::Info);
        assert_eq!(log_level(2, false), log::LevelFilter::Debug);
        assert_eq!(log_level(7, false), log::LevelFilter::Trace);
    }

    #[test]
    fn tui_silences_logging() {
        assert_eq!(log_level(0, true), log::LevelFilter::Off);
        assert_eq!(log_level(3, true), log::LevelFilter::Off);
    }
}
