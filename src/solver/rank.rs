//! Ranking of scored guesses

use super::scheduler::ScoreResult;
use crate::core::{Word, WordSet};
use serde::Serialize;

/// Number of guesses reported when no count is configured
pub const DEFAULT_TOP: usize = 10;

/// A scored guess ready for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedGuess {
    pub word: Word,
    pub score: usize,
    /// Whether the guess could itself be the answer
    pub valid: bool,
}

/// Sort results by descending score and keep the best `top`
///
/// Equal scores are ordered alphabetically so repeated runs report the same list.
///
/// # Examples
/// ```
/// use wordle_elimination::core::{Word, WordSet};
/// use wordle_elimination::solver::{ScoreResult, rank};
///
/// let answers: WordSet = std::iter::once(Word::new("crane").unwrap()).collect();
/// let results = vec![
///     ScoreResult { word: Word::new("aahed").unwrap(), score: 10 },
///     ScoreResult { word: Word::new("crane").unwrap(), score: 12 },
/// ];
///
/// let ranked = rank(results, &answers, 1);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].word.text(), "crane");
/// assert!(ranked[0].valid);
/// ```
#[must_use]
pub fn rank(mut results: Vec<ScoreResult>, answers: &WordSet, top: usize) -> Vec<RankedGuess> {
    results.sort_unstable_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));

    results
        .into_iter()
        .take(top)
        .map(|r| RankedGuess {
            word: r.word,
            score: r.score,
            valid: answers.contains(&r.word),
        })
        .collect()
}
