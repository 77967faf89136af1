//! Precomputed candidate lists for merge-based scoring
//!
//! Every constraint kind maps to a list of answer ids that satisfy it. Ids are
//! positions in the sorted answer set, so every list is sorted in the same
//! order as the answers and free of duplicates.

use crate::core::{ALPHABET_LEN, Constraint, WORD_LEN, Word, WordSet, letter_index};

/// Position of a word in the answer set
pub type WordId = u32;

type PositionLists = [Vec<WordId>; WORD_LEN];

/// Read-only lookup tables built once from the answer set
///
/// Tables are dense `[letter][position]` arrays.
#[derive(Debug, Clone)]
pub struct LookupIndex {
    total: usize,
    without_letter: [Vec<WordId>; ALPHABET_LEN],
    with_letter_at: [PositionLists; ALPHABET_LEN],
    with_letter_not_at: [PositionLists; ALPHABET_LEN],
}

fn empty_positions() -> PositionLists {
    std::array::from_fn(|_| Vec::new())
}

impl LookupIndex {
    /// Build the index for an answer set
    ///
    /// # Examples
    /// ```
    /// use wordle_elimination::core::{Constraint, Word, WordSet};
    /// use wordle_elimination::solver::LookupIndex;
    ///
    /// let answers: WordSet = ["crane", "slate"].iter().map(|w| Word::new(w).unwrap()).collect();
    /// let index = LookupIndex::new(&answers);
    ///
    /// // Only "slate" (id 1) has an S at position 0
    /// assert_eq!(index.candidates(&Constraint::exact_at('s', 0).unwrap()), &[1]);
    /// // A letter no answer uses excludes nothing
    /// assert_eq!(index.candidates(&Constraint::absent('z').unwrap()), &[0, 1]);
    /// ```
    #[must_use]
    pub fn new(answers: &WordSet) -> Self {
        let mut without_letter: [Vec<WordId>; ALPHABET_LEN] = std::array::from_fn(|_| Vec::new());
        let mut with_letter_at: [PositionLists; ALPHABET_LEN] =
            std::array::from_fn(|_| empty_positions());
        let mut with_letter_not_at: [PositionLists; ALPHABET_LEN] =
            std::array::from_fn(|_| empty_positions());

        for (id, word) in answers.iter().enumerate() {
            let id = id as WordId;
            for letter in b'a'..=b'z' {
                let l = letter_index(letter);
                if !word.has_letter(letter) {
                    without_letter[l].push(id);
                    continue;
                }
                for position in 0..WORD_LEN {
                    if word.char_at(position) == letter {
                        with_letter_at[l][position].push(id);
                    }
                    if word.has_letter_other_than(letter, position) {
                        with_letter_not_at[l][position].push(id);
                    }
                }
            }
        }

        Self {
            total: answers.len(),
            without_letter,
            with_letter_at,
            with_letter_not_at,
        }
    }

    /// Number of answers indexed
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    /// Check if the index was built from an empty answer set
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Sorted ids of answers satisfying `constraint`
    #[inline]
    #[must_use]
    pub fn candidates(&self, constraint: &Constraint) -> &[WordId] {
        match *constraint {
            Constraint::ExactAt { letter, position } => {
                &self.with_letter_at[letter_index(letter)][position]
            }
            Constraint::PresentNotAt { letter, position } => {
                &self.with_letter_not_at[letter_index(letter)][position]
            }
            Constraint::Absent { letter } => &self.without_letter[letter_index(letter)],
        }
    }

    /// Answers satisfying `constraint`, resolved against the set the index was built from
    #[must_use]
    pub fn resolve<'a>(&self, answers: &'a WordSet, constraint: &Constraint) -> Vec<&'a Word> {
        self.candidates(constraint)
            .iter()
            .map(|&id| &answers[id as usize])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter_words;

    fn answers() -> WordSet {
        ["arise", "crane", "crate", "geese", "slate", "stare"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect()
    }

    #[test]
    fn lists_agree_with_constraint_evaluation() {
        let answers = answers();
        let index = LookupIndex::new(&answers);

        for letter in 'a'..='z' {
            let mut constraints = vec![Constraint::absent(letter).unwrap()];
            for position in 0..WORD_LEN {
                constraints.push(Constraint::exact_at(letter, position).unwrap());
                constraints.push(Constraint::present_not_at(letter, position).unwrap());
            }

            for constraint in constraints {
                let expected = filter_words(&answers, &[constraint]);
                let actual: Vec<Word> = index
                    .resolve(&answers, &constraint)
                    .into_iter()
                    .copied()
                    .collect();
                assert_eq!(actual, expected, "{constraint}");
            }
        }
    }

    #[test]
    fn lists_are_strictly_ascending() {
        let index = LookupIndex::new(&answers());
        let all_lists = index
            .without_letter
            .iter()
            .chain(index.with_letter_at.iter().flatten())
            .chain(index.with_letter_not_at.iter().flatten());

        for list in all_lists {
            assert!(list.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn repeated_letters_listed_once() {
        let answers = answers();
        let index = LookupIndex::new(&answers);
        let geese = answers.position(&Word::new("geese").unwrap()).unwrap() as WordId;

        let list = index.candidates(&Constraint::present_not_at('e', 0).unwrap());
        assert_eq!(list.iter().filter(|&&id| id == geese).count(), 1);
    }

    #[test]
    fn empty_answer_set() {
        let index = LookupIndex::new(&WordSet::default());
        assert!(index.is_empty());
        assert!(index.candidates(&Constraint::absent('a').unwrap()).is_empty());
    }
}
