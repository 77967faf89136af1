//! Core domain types for Wordle
//!
//! Words, constraints, feedback patterns and the candidate filter. Everything
//! here is pure and immutable once constructed; validation happens on the way in.

mod constraint;
mod filter;
mod pattern;
mod word;
mod word_set;

pub use constraint::{Constraint, ConstraintError, parse_absent_letters, parse_letter_positions};
pub use filter::{count_matching, filter_words, prioritized};
pub use pattern::Pattern;
pub use word::{ALPHABET_LEN, WORD_LEN, Word, WordError, is_letter, letter_index};
pub use word_set::WordSet;
