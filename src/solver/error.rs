//! Errors surfaced by scoring and scheduling

use crate::core::{Word, WordError};
use thiserror::Error;

/// Error type for degenerate scoring input and run failures
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("answer set is empty, nothing to score against")]
    EmptyAnswerSet,
    #[error("guess '{0}' has no targets other than itself")]
    NoTargets(Word),
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] WordError),
    #[error("failed to start scoring workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("scoring run incomplete: collected {collected} of {expected} results")]
    IncompleteRun { expected: usize, collected: usize },
}
