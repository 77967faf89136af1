//! Candidate filtering by constraint conjunction

use super::constraint::Constraint;
use super::word::Word;

/// Sort constraints so the cheapest, most selective checks run first
#[must_use]
pub fn prioritized(constraints: &[Constraint]) -> Vec<Constraint> {
    let mut sorted = constraints.to_vec();
    sorted.sort_by_key(Constraint::priority);
    sorted
}

/// Check a word against constraints already in evaluation order
#[inline]
fn satisfies_all(word: &Word, constraints: &[Constraint]) -> bool {
    constraints.iter().all(|c| c.evaluate(word))
}

/// Keep the words that satisfy every constraint, preserving input order
///
/// An empty constraint list keeps every word.
///
/// # Examples
/// ```
/// use wordle_elimination::core::{Constraint, Word, filter_words};
///
/// let words = ["crane", "slate", "pizza"].map(|w| Word::new(w).unwrap());
/// let kept = filter_words(&words, &[Constraint::exact_at('a', 2).unwrap()]);
/// assert_eq!(kept.len(), 2);
/// ```
#[must_use]
pub fn filter_words(words: &[Word], constraints: &[Constraint]) -> Vec<Word> {
    let constraints = prioritized(constraints);
    words
        .iter()
        .filter(|word| satisfies_all(word, &constraints))
        .copied()
        .collect()
}

/// Count the words that satisfy every constraint
///
/// Constraints must already be in the order they should be evaluated.
#[must_use]
pub fn count_matching(words: &[Word], constraints: &[Constraint]) -> usize {
    words
        .iter()
        .filter(|word| satisfies_all(word, constraints))
        .count()
}
