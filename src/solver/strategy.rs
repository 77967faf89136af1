//! Elimination scoring strategies
//!
//! Defines the `EliminationScorer` trait and the runtime-selectable wrapper.
//! Every strategy must return the same count for the same inputs.

use super::brute_force::BruteForceScorer;
use super::indexed::IndexedScorer;
use crate::core::{Word, WordSet};
use std::fmt;
use std::str::FromStr;

/// Counts how many answers a simulated guess would eliminate
pub trait EliminationScorer {
    /// Number of answers being scored against
    fn total(&self) -> usize;

    /// Answers inconsistent with the feedback `guess` receives when `target` is hidden
    fn score(&self, guess: &Word, target: &Word) -> usize;
}

/// Which scoring strategy to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScorerKind {
    /// Merge precomputed candidate lists (default, fast)
    #[default]
    Indexed,
    /// Filter the whole answer set for every pair
    BruteForce,
}

impl ScorerKind {
    /// Build the scorer for an answer set
    #[must_use]
    pub fn build(self, answers: &WordSet) -> ScorerType<'_> {
        match self {
            Self::Indexed => ScorerType::Indexed(IndexedScorer::new(answers)),
            Self::BruteForce => ScorerType::BruteForce(BruteForceScorer::new(answers)),
        }
    }
}

impl FromStr for ScorerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "indexed" | "index" | "merge" => Ok(Self::Indexed),
            "brute" | "brute-force" | "scan" => Ok(Self::BruteForce),
            _ => Err(format!("unknown scorer '{s}', expected 'indexed' or 'brute'")),
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indexed => f.write_str("indexed"),
            Self::BruteForce => f.write_str("brute"),
        }
    }
}

/// Enum wrapper for all scorer types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum ScorerType<'a> {
    Indexed(IndexedScorer),
    BruteForce(BruteForceScorer<'a>),
}

impl EliminationScorer for ScorerType<'_> {
    fn total(&self) -> usize {
        match self {
            Self::Indexed(s) => s.total(),
            Self::BruteForce(s) => s.total(),
        }
    }

    fn score(&self, guess: &Word, target: &Word) -> usize {
        match self {
            Self::Indexed(s) => s.score(guess, target),
            Self::BruteForce(s) => s.score(guess, target),
        }
    }
}
