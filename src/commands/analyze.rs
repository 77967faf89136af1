//! Guess analysis command
//!
//! Scores a single guess against every answer and summarizes the spread of
//! elimination counts.

use crate::core::Word;
use crate::solver::{ScorerKind, SolverError, elimination_counts, middle_value};
use crate::wordlists::Corpus;
use rustc_hash::FxHashMap;

/// Result of analyzing a guess
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub word: Word,
    pub median: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    /// Number of targets the guess was simulated against
    pub targets: usize,
    pub total_answers: usize,
    /// Whether the guess is itself a possible answer
    pub valid: bool,
    /// `(eliminated, how many targets)` pairs in ascending order
    pub distribution: Vec<(usize, usize)>,
}

/// Analyze how well `word` narrows the answer set
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-letters)
/// - The answer set is empty, or contains only the word itself
pub fn analyze_guess(
    word: &str,
    corpus: &Corpus,
    kind: ScorerKind,
) -> Result<AnalysisResult, SolverError> {
    let guess = Word::new(word)?;
    let answers = &corpus.answers;
    if answers.is_empty() {
        return Err(SolverError::EmptyAnswerSet);
    }

    let scorer = kind.build(answers);
    let counts = elimination_counts(&guess, answers, &scorer);
    let median = middle_value(&counts).ok_or(SolverError::NoTargets(guess))?;

    let mut histogram: FxHashMap<usize, usize> = FxHashMap::default();
    for &count in &counts {
        *histogram.entry(count).or_insert(0) += 1;
    }
    let mut distribution: Vec<(usize, usize)> = histogram.into_iter().collect();
    distribution.sort_unstable();

    Ok(AnalysisResult {
        word: guess,
        median,
        min: counts[0],
        max: counts[counts.len() - 1],
        mean: counts.iter().sum::<usize>() as f64 / counts.len() as f64,
        targets: counts.len(),
        total_answers: answers.len(),
        valid: answers.contains(&guess),
        distribution,
    })
}
