//! Strategy cross-check command
//!
//! Scores the same guess/target pairs with both strategies, timing each, and
//! reports every pair where they disagree.

use crate::core::Word;
use crate::solver::{BruteForceScorer, EliminationScorer, IndexedScorer};
use crate::wordlists::Corpus;
use log::info;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Number of guesses checked when no limit is given
pub const DEFAULT_VERIFY_LIMIT: usize = 100;

/// A pair the two strategies scored differently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub guess: Word,
    pub target: Word,
    pub indexed: usize,
    pub brute_force: usize,
}

/// Result of cross-checking the strategies
#[derive(Debug)]
pub struct VerifyResult {
    pub guesses: usize,
    pub pairs: usize,
    pub mismatches: Vec<Mismatch>,
    pub indexed_time: Duration,
    pub brute_force_time: Duration,
}

impl VerifyResult {
    /// True when every pair scored the same under both strategies
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Score every guess against every answer, in guess-major order
fn score_all<S>(guesses: &[Word], answers: &[Word], scorer: &S) -> (Vec<usize>, Duration)
where
    S: EliminationScorer + Sync,
{
    let start = Instant::now();
    let scores = guesses
        .par_iter()
        .flat_map_iter(|guess| answers.iter().map(move |target| scorer.score(guess, target)))
        .collect();
    (scores, start.elapsed())
}

/// Cross-check both strategies over the first `limit` dictionary words
#[must_use]
pub fn verify_strategies(corpus: &Corpus, limit: usize) -> VerifyResult {
    let guesses = &corpus.dictionary[..limit.min(corpus.dictionary.len())];
    let answers = corpus.answers.as_slice();

    let indexed = IndexedScorer::new(&corpus.answers);
    let brute = BruteForceScorer::new(answers);

    let (indexed_scores, indexed_time) = score_all(guesses, answers, &indexed);
    let (brute_scores, brute_force_time) = score_all(guesses, answers, &brute);

    let mismatches: Vec<Mismatch> = guesses
        .iter()
        .flat_map(|&guess| answers.iter().map(move |&target| (guess, target)))
        .zip(indexed_scores.iter().zip(&brute_scores))
        .filter(|(_, (a, b))| a != b)
        .map(|((guess, target), (&indexed, &brute_force))| Mismatch {
            guess,
            target,
            indexed,
            brute_force,
        })
        .collect();

    info!(
        "Verified {} pairs: indexed {:.2}s, brute force {:.2}s, {} mismatches",
        indexed_scores.len(),
        indexed_time.as_secs_f64(),
        brute_force_time.as_secs_f64(),
        mismatches.len()
    );

    VerifyResult {
        guesses: guesses.len(),
        pairs: indexed_scores.len(),
        mismatches,
        indexed_time,
        brute_force_time,
    }
}
