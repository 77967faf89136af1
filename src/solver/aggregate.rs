//! Per-guess aggregation of elimination counts
//!
//! A guess is simulated against every answer except itself; the middle value
//! of the resulting elimination counts is the guess's score.

use super::error::SolverError;
use super::strategy::EliminationScorer;
use crate::core::Word;

/// Elimination counts for `guess` against every other answer, sorted ascending
#[must_use]
pub fn elimination_counts<S>(guess: &Word, answers: &[Word], scorer: &S) -> Vec<usize>
where
    S: EliminationScorer + ?Sized,
{
    let mut counts: Vec<usize> = answers
        .iter()
        .filter(|&target| target != guess)
        .map(|target| scorer.score(guess, target))
        .collect();
    counts.sort_unstable();
    counts
}

/// Value at index `n / 2` of sorted counts; the upper of the two middles for even lengths
#[must_use]
pub fn middle_value(sorted: &[usize]) -> Option<usize> {
    sorted.get(sorted.len() / 2).copied()
}

/// Median number of answers `guess` eliminates
///
/// # Errors
/// - `SolverError::EmptyAnswerSet` if `answers` is empty
/// - `SolverError::NoTargets` if the only answer is the guess itself
///
/// # Examples
/// ```
/// use wordle_elimination::core::{Word, WordSet};
/// use wordle_elimination::solver::{IndexedScorer, median_elimination};
///
/// let answers: WordSet = ["arise", "crane", "crate", "slate", "stare"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let scorer = IndexedScorer::new(&answers);
///
/// let guess = Word::new("arise").unwrap();
/// assert_eq!(median_elimination(&guess, &answers, &scorer).unwrap(), 4);
/// ```
pub fn median_elimination<S>(guess: &Word, answers: &[Word], scorer: &S) -> Result<usize, SolverError>
where
    S: EliminationScorer + ?Sized,
{
    if answers.is_empty() {
        return Err(SolverError::EmptyAnswerSet);
    }

    let counts = elimination_counts(guess, answers, scorer);
    middle_value(&counts).ok_or(SolverError::NoTargets(*guess))
}
