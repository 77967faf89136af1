//! Sorted, deduplicated word collections
//!
//! Both the answer set and the guess dictionary are `WordSet`s. Keeping them in
//! lexicographic order is what lets index positions stand in for words during
//! merge-based intersection.

use super::constraint::Constraint;
use super::filter::filter_words;
use super::word::Word;
use std::ops::Deref;

/// An immutable, lexicographically sorted set of words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet(Vec<Word>);

impl WordSet {
    /// Build a set from words in any order, dropping duplicates
    ///
    /// # Examples
    /// ```
    /// use wordle_elimination::core::{Word, WordSet};
    ///
    /// let words = ["slate", "crane", "slate"].map(|w| Word::new(w).unwrap());
    /// let set = WordSet::new(words);
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set[0].text(), "crane");
    /// ```
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self(words)
    }

    /// Check membership by binary search
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.0.binary_search(word).is_ok()
    }

    /// Position of `word` in the set, if present
    #[must_use]
    pub fn position(&self, word: &Word) -> Option<usize> {
        self.0.binary_search(word).ok()
    }

    /// Words satisfying every constraint, still sorted
    #[must_use]
    pub fn filter(&self, constraints: &[Constraint]) -> Self {
        Self(filter_words(&self.0, constraints))
    }

    /// Union of two sets
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self::new(self.0.iter().chain(other.0.iter()).copied())
    }

    /// Borrow the sorted words
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.0
    }
}

impl Deref for WordSet {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Word> for WordSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}
