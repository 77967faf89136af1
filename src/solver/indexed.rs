//! Indexed elimination scoring
//!
//! Maps each constraint of the derived pattern to its precomputed answer list
//! and counts survivors with a k-way merge. Cost is proportional to the length
//! of the matched lists instead of the whole answer set.

use super::index::{LookupIndex, WordId};
use super::strategy::EliminationScorer;
use crate::core::{Pattern, WORD_LEN, Word, WordSet};

/// Merge-based scorer over a `LookupIndex`
#[derive(Debug, Clone)]
pub struct IndexedScorer {
    index: LookupIndex,
}

impl IndexedScorer {
    /// Build the lookup index for `answers`
    #[must_use]
    pub fn new(answers: &WordSet) -> Self {
        Self::from_index(LookupIndex::new(answers))
    }

    /// Score against a prebuilt index
    #[must_use]
    pub const fn from_index(index: LookupIndex) -> Self {
        Self { index }
    }

    /// The underlying lookup tables
    #[must_use]
    pub const fn index(&self) -> &LookupIndex {
        &self.index
    }
}

impl EliminationScorer for IndexedScorer {
    fn total(&self) -> usize {
        self.index.len()
    }

    /// # Examples
    /// ```
    /// use wordle_elimination::core::{Word, WordSet};
    /// use wordle_elimination::solver::{EliminationScorer, IndexedScorer};
    ///
    /// let answers: WordSet = ["arise", "crane", "crate", "slate", "stare"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let scorer = IndexedScorer::new(&answers);
    ///
    /// let guess = Word::new("crate").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// assert_eq!(scorer.score(&guess, &target), 4);
    /// ```
    fn score(&self, guess: &Word, target: &Word) -> usize {
        let pattern = Pattern::derive(guess, target);
        let constraints = pattern.constraints();
        let lists = std::array::from_fn(|i| self.index.candidates(&constraints[i]));

        self.index.len() - intersection_size(lists)
    }
}

/// Count ids present in every list
///
/// Repeatedly takes the smallest head; when every list starts with it, it is a
/// survivor. Lists whose head equals the smallest advance. Stops as soon as any
/// list runs out.
fn intersection_size(mut lists: [&[WordId]; WORD_LEN]) -> usize {
    let mut survivors = 0;

    loop {
        let mut smallest = WordId::MAX;
        for list in &lists {
            match list.first() {
                Some(&head) => smallest = smallest.min(head),
                None => return survivors,
            }
        }

        let mut in_all = true;
        for list in &mut lists {
            if list[0] == smallest {
                *list = &list[1..];
            } else {
                in_all = false;
            }
        }

        if in_all {
            survivors += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::BruteForceScorer;
    use proptest::prelude::*;

    fn word_set(words: &[&str]) -> WordSet {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn intersection_of_disjoint_lists_is_empty() {
        let lists: [&[WordId]; WORD_LEN] = [&[0, 2, 4], &[1, 3], &[0, 1, 2, 3, 4], &[0, 1, 2, 3, 4], &[0, 1, 2, 3, 4]];
        assert_eq!(intersection_size(lists), 0);
    }

    #[test]
    fn intersection_counts_common_ids() {
        let lists: [&[WordId]; WORD_LEN] = [&[0, 2, 4, 7], &[2, 4, 7, 9], &[1, 2, 7], &[2, 3, 7], &[0, 2, 5, 7]];
        assert_eq!(intersection_size(lists), 2);
    }

    #[test]
    fn intersection_stops_on_empty_list() {
        let lists: [&[WordId]; WORD_LEN] = [&[0, 1], &[], &[0, 1], &[0, 1], &[0, 1]];
        assert_eq!(intersection_size(lists), 0);
    }

    #[test]
    fn self_score_leaves_only_the_guess() {
        let answers = word_set(&["arise", "crane", "crate", "slate", "stare"]);
        let scorer = IndexedScorer::new(&answers);

        for word in answers.iter() {
            assert_eq!(scorer.score(word, word), answers.len() - 1);
        }
    }

    #[test]
    fn guess_outside_answer_set_self_score_eliminates_all() {
        let answers = word_set(&["arise", "crane", "crate"]);
        let scorer = IndexedScorer::new(&answers);
        let guess = Word::new("zesty").unwrap();

        assert_eq!(scorer.score(&guess, &guess), answers.len());
    }

    #[test]
    fn letter_missing_from_every_answer_eliminates_nothing_alone() {
        let answers = word_set(&["crane", "crate"]);
        let scorer = IndexedScorer::new(&answers);

        // "zzzzz" against any target: five Absent(z), every answer survives
        let guess = Word::new("zzzzz").unwrap();
        let target = Word::new("crane").unwrap();
        assert_eq!(scorer.score(&guess, &target), 0);
    }

    #[test]
    fn duplicate_letters_score_like_brute_force() {
        let answers = word_set(&["creep", "eerie", "erase", "geese", "sheep", "speed"]);
        let indexed = IndexedScorer::new(&answers);
        let brute = BruteForceScorer::new(&answers);

        for guess in answers.iter() {
            for target in answers.iter() {
                assert_eq!(
                    indexed.score(guess, target),
                    brute.score(guess, target),
                    "{guess} vs {target}"
                );
            }
        }

        let eerie = Word::new("eerie").unwrap();
        let sheep = Word::new("sheep").unwrap();
        assert_eq!(indexed.score(&eerie, &sheep), 3);
    }

    fn arb_word() -> impl Strategy<Value = Word> {
        // Small alphabet so patterns hit every constraint kind and repeated letters
        "[a-h]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    proptest! {
        #[test]
        fn strategies_agree(
            words in prop::collection::vec(arb_word(), 1..60),
            guess in arb_word(),
            target_pick in any::<prop::sample::Index>(),
        ) {
            let answers = WordSet::new(words);
            let target = answers[target_pick.index(answers.len())];
            let indexed = IndexedScorer::new(&answers);
            let brute = BruteForceScorer::new(&answers);

            prop_assert_eq!(indexed.score(&guess, &target), brute.score(&guess, &target));
        }

        #[test]
        fn target_always_survives(
            words in prop::collection::vec(arb_word(), 1..60),
            guess in arb_word(),
            target_pick in any::<prop::sample::Index>(),
        ) {
            let answers = WordSet::new(words);
            let target = answers[target_pick.index(answers.len())];
            let scorer = IndexedScorer::new(&answers);

            prop_assert!(scorer.score(&guess, &target) <= answers.len() - 1);
        }
    }
}
