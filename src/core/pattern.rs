//! Feedback pattern derivation
//!
//! A pattern is the per-position feedback for a guess against a target,
//! expressed directly as the five constraints it implies:
//! - exact match → `ExactAt`
//! - letter occurs anywhere in the target → `PresentNotAt`
//! - otherwise → `Absent`
//!
//! Presence is a plain membership test over the whole target. Letter counts
//! are not tracked, so a duplicated guess letter can be reported present even
//! when the target's only copy is already matched exactly elsewhere. This
//! differs from the official game's duplicate-letter rule.

use super::constraint::Constraint;
use super::word::{WORD_LEN, Word};

/// Feedback for one guess/target pair, one constraint per guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Constraint; WORD_LEN]);

impl Pattern {
    /// Derive the pattern produced when `guess` is played against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_elimination::core::{Constraint, Pattern, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let pattern = Pattern::derive(&guess, &target);
    ///
    /// assert_eq!(pattern.to_emoji(), "⬜⬜🟩⬜🟩");
    /// assert_eq!(pattern.constraints()[2], Constraint::ExactAt { letter: b'a', position: 2 });
    /// ```
    #[must_use]
    pub fn derive(guess: &Word, target: &Word) -> Self {
        let constraints = std::array::from_fn(|position| {
            let letter = guess.char_at(position);
            if target.char_at(position) == letter {
                Constraint::ExactAt { letter, position }
            } else if target.has_letter(letter) {
                Constraint::PresentNotAt { letter, position }
            } else {
                Constraint::Absent { letter }
            }
        });

        Self(constraints)
    }

    /// Constraints in guess-index order
    #[inline]
    #[must_use]
    pub const fn constraints(&self) -> &[Constraint; WORD_LEN] {
        &self.0
    }

    /// Constraints sorted by ascending priority, for short-circuiting filters
    #[must_use]
    pub fn by_priority(&self) -> [Constraint; WORD_LEN] {
        let mut sorted = self.0;
        sorted.sort_by_key(Constraint::priority);
        sorted
    }

    /// Check if every position matched exactly
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0
            .iter()
            .all(|c| matches!(c, Constraint::ExactAt { .. }))
    }

    /// Check whether `word` is consistent with every constraint
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        self.0.iter().all(|c| c.evaluate(word))
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|c| match c {
                Constraint::ExactAt { .. } => '🟩',
                Constraint::PresentNotAt { .. } => '🟨',
                Constraint::Absent { .. } => '⬜',
            })
            .collect()
    }
}

impl IntoIterator for Pattern {
    type Item = Constraint;
    type IntoIter = std::array::IntoIter<Constraint, WORD_LEN>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(guess: &str, target: &str) -> Pattern {
        Pattern::derive(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn pattern_all_absent() {
        let pattern = derive("abcde", "fghij");
        assert_eq!(pattern.to_emoji(), "⬜⬜⬜⬜⬜");
        assert_eq!(pattern.constraints()[0], Constraint::Absent { letter: b'a' });
    }

    #[test]
    fn pattern_all_exact() {
        for word in ["crane", "slate", "zzzzz", "aaaaa"] {
            let pattern = derive(word, word);
            assert!(pattern.is_perfect());
            assert_eq!(pattern.to_emoji(), "🟩🟩🟩🟩🟩");
        }
    }

    #[test]
    fn pattern_is_in_guess_order() {
        let pattern = derive("robot", "floor");
        assert_eq!(
            pattern.constraints(),
            &[
                Constraint::PresentNotAt { letter: b'r', position: 0 },
                Constraint::PresentNotAt { letter: b'o', position: 1 },
                Constraint::Absent { letter: b'b' },
                Constraint::ExactAt { letter: b'o', position: 3 },
                Constraint::Absent { letter: b't' },
            ]
        );
    }

    #[test]
    fn pattern_duplicate_guess_letters_both_present() {
        // SPEED vs ERASE: both E's are present, S is present
        let pattern = derive("speed", "erase");
        assert_eq!(pattern.to_emoji(), "🟨⬜🟨🟨⬜");
    }

    #[test]
    fn pattern_ignores_letter_counts() {
        // Known deviation from the official game: STARS has two S's, one matched
        // exactly at 0 and one consumed by the S at 2. The game shows the S at 3
        // as absent; membership feedback reports it present.
        let pattern = derive("sassy", "stars");
        assert_eq!(
            pattern.constraints()[3],
            Constraint::PresentNotAt { letter: b's', position: 3 }
        );
        assert_eq!(pattern.to_emoji(), "🟩🟨🟨🟨⬜");
    }

    #[test]
    fn target_always_matches_own_pattern() {
        let words = ["sassy", "stars", "geese", "crane", "eerie"];
        for guess in words {
            for target in words {
                let t = Word::new(target).unwrap();
                assert!(derive(guess, target).matches(&t), "{guess} vs {target}");
            }
        }
    }

    #[test]
    fn by_priority_sorts_exact_first() {
        let sorted = derive("robot", "floor").by_priority();
        let priorities: Vec<u8> = sorted.iter().map(Constraint::priority).collect();
        assert_eq!(priorities, [0, 1, 1, 2, 2]);
    }
}
