//! Elimination scoring engine
//!
//! Lookup index, the two scoring strategies, per-guess aggregation, the
//! parallel scheduler and the final ranking.

mod aggregate;
mod brute_force;
mod error;
mod index;
mod indexed;
mod rank;
mod scheduler;
pub mod strategy;

pub use aggregate::{elimination_counts, median_elimination, middle_value};
pub use brute_force::BruteForceScorer;
pub use error::SolverError;
pub use index::{LookupIndex, WordId};
pub use indexed::IndexedScorer;
pub use rank::{DEFAULT_TOP, RankedGuess, rank};
pub use scheduler::{SchedulerConfig, ScoreResult, run};
pub use strategy::{EliminationScorer, ScorerKind, ScorerType};
