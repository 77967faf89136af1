//! Brute-force elimination scoring
//!
//! Reference implementation: derives the pattern and filters the entire
//! answer set with it for every pair.

use super::strategy::EliminationScorer;
use crate::core::{Pattern, Word, count_matching};

/// Scan-based scorer over a borrowed answer set
#[derive(Debug, Clone, Copy)]
pub struct BruteForceScorer<'a> {
    answers: &'a [Word],
}

impl<'a> BruteForceScorer<'a> {
    #[must_use]
    pub const fn new(answers: &'a [Word]) -> Self {
        Self { answers }
    }
}

impl EliminationScorer for BruteForceScorer<'_> {
    fn total(&self) -> usize {
        self.answers.len()
    }

    fn score(&self, guess: &Word, target: &Word) -> usize {
        let constraints = Pattern::derive(guess, target).by_priority();
        self.answers.len() - count_matching(self.answers, &constraints)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn scores_match_hand_computed_values() {
        let answers = words(&["arise", "crane", "crate", "slate", "stare"]);
        let scorer = BruteForceScorer::new(&answers);
        let arise = Word::new("arise").unwrap();

        // ARISE vs CRANE: A present, R exact, I absent, S absent, E exact.
        // Only CRANE and CRATE survive.
        assert_eq!(scorer.score(&arise, &answers[1]), 3);
        // ARISE vs SLATE: only SLATE survives.
        assert_eq!(scorer.score(&arise, &answers[3]), 4);
    }

    #[test]
    fn empty_answer_set_scores_zero() {
        let scorer = BruteForceScorer::new(&[]);
        let word = Word::new("crane").unwrap();
        assert_eq!(scorer.total(), 0);
        assert_eq!(scorer.score(&word, &word), 0);
    }
}
