//! Constraint derivation, filtering and suggestion ranking
//!
//! Data flows one way: `GuessHistory` -> `Constraints` -> `filter` -> `rank`.

mod constraints;
mod filter;
mod frequency;
mod ranker;
mod session;

pub use constraints::Constraints;
pub use filter::{filter, is_candidate};
pub use frequency::{LetterFrequencies, PositionalFrequencies};
pub use ranker::{
    InfoScorer, InfoWeights, Mode, ModeScorer, Ranker, Scorer, SolveScorer, Suggestion,
    info_pool, rank, rank_with,
};
pub use session::Session;
