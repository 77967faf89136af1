//! Letter constraints derived from feedback or supplied by the user
//!
//! A constraint is one fact about a letter: it sits at a position, it occurs
//! somewhere other than a position, or it does not occur at all. Word lists are
//! filtered by AND-ing constraints together.

use super::word::{Word, WORD_LEN, is_letter};
use std::fmt;
use thiserror::Error;

/// A single feedback fact about a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// The word has `letter` at `position`
    ExactAt { letter: u8, position: usize },
    /// The word has `letter` at some position other than `position`
    PresentNotAt { letter: u8, position: usize },
    /// The word does not contain `letter`
    Absent { letter: u8 },
}

/// Error type for invalid constraints
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("'{0}' is not a letter a-z")]
    InvalidLetter(char),
    #[error("position {position} in '{token}' is out of range 0-4")]
    PositionOutOfRange { token: String, position: usize },
    #[error("'{0}' is not of the form letter=position")]
    Malformed(String),
}

fn validate_letter(letter: char) -> Result<u8, ConstraintError> {
    let lower = letter.to_ascii_lowercase();
    if lower.is_ascii() && is_letter(lower as u8) {
        Ok(lower as u8)
    } else {
        Err(ConstraintError::InvalidLetter(letter))
    }
}

fn validate_position(token: &str, position: usize) -> Result<usize, ConstraintError> {
    if position < WORD_LEN {
        Ok(position)
    } else {
        Err(ConstraintError::PositionOutOfRange {
            token: token.to_string(),
            position,
        })
    }
}

impl Constraint {
    /// Letter must be at `position`
    ///
    /// # Errors
    /// Returns `ConstraintError` for a non-alphabetic letter or a position past the word.
    pub fn exact_at(letter: char, position: usize) -> Result<Self, ConstraintError> {
        Ok(Self::ExactAt {
            letter: validate_letter(letter)?,
            position: validate_position(&format!("{letter}={position}"), position)?,
        })
    }

    /// Letter must appear somewhere other than `position`
    ///
    /// # Errors
    /// Returns `ConstraintError` for a non-alphabetic letter or a position past the word.
    pub fn present_not_at(letter: char, position: usize) -> Result<Self, ConstraintError> {
        Ok(Self::PresentNotAt {
            letter: validate_letter(letter)?,
            position: validate_position(&format!("{letter}={position}"), position)?,
        })
    }

    /// Letter must not appear in the word
    ///
    /// # Errors
    /// Returns `ConstraintError` for a non-alphabetic letter.
    pub fn absent(letter: char) -> Result<Self, ConstraintError> {
        Ok(Self::Absent {
            letter: validate_letter(letter)?,
        })
    }

    /// Check whether `word` satisfies this constraint
    ///
    /// # Examples
    /// ```
    /// use wordle_elimination::core::{Constraint, Word};
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert!(Constraint::exact_at('r', 1).unwrap().evaluate(&word));
    /// assert!(Constraint::present_not_at('e', 0).unwrap().evaluate(&word));
    /// assert!(!Constraint::absent('a').unwrap().evaluate(&word));
    /// ```
    #[inline]
    #[must_use]
    pub fn evaluate(&self, word: &Word) -> bool {
        match *self {
            Self::ExactAt { letter, position } => word.char_at(position) == letter,
            Self::PresentNotAt { letter, position } => word.has_letter_other_than(letter, position),
            Self::Absent { letter } => !word.has_letter(letter),
        }
    }

    /// Evaluation-order hint; lower is cheaper and checked first
    ///
    /// Never changes which words pass a filter.
    #[inline]
    #[must_use]
    pub const fn priority(&self) -> u8 {
        match self {
            Self::ExactAt { .. } => 0,
            Self::PresentNotAt { .. } => 1,
            Self::Absent { .. } => 2,
        }
    }

    /// The letter this constraint is about
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        match *self {
            Self::ExactAt { letter, .. }
            | Self::PresentNotAt { letter, .. }
            | Self::Absent { letter } => letter,
        }
    }

    /// Human-readable description, e.g. "With letter a at position 2"
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ExactAt { letter, position } => {
                write!(f, "With letter {} at position {position}", letter as char)
            }
            Self::PresentNotAt { letter, position } => write!(
                f,
                "With letter {} at any position other than {position}",
                letter as char
            ),
            Self::Absent { letter } => write!(f, "Without letter {}", letter as char),
        }
    }
}

/// Parse a list of letters to exclude, e.g. `"abc"`
///
/// Whitespace and commas between letters are ignored.
///
/// # Errors
/// Returns `ConstraintError::InvalidLetter` naming the first non-alphabetic character.
pub fn parse_absent_letters(input: &str) -> Result<Vec<Constraint>, ConstraintError> {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(Constraint::absent)
        .collect()
}

/// Parse comma-separated `letter=position` pairs, e.g. `"a=0,b=2"`
///
/// `make` selects the constraint kind, usually `Constraint::exact_at` or
/// `Constraint::present_not_at`. Positions are 0-based.
///
/// # Errors
/// Returns `ConstraintError` naming the first malformed or out-of-range token.
///
/// # Examples
/// ```
/// use wordle_elimination::core::{Constraint, parse_letter_positions};
///
/// let parsed = parse_letter_positions("a=0, e=4", Constraint::exact_at).unwrap();
/// assert_eq!(parsed.len(), 2);
/// assert!(parse_letter_positions("a=9", Constraint::exact_at).is_err());
/// ```
pub fn parse_letter_positions<F>(input: &str, make: F) -> Result<Vec<Constraint>, ConstraintError>
where
    F: Fn(char, usize) -> Result<Constraint, ConstraintError>,
{
    input
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let (letter, position) = token
                .split_once('=')
                .ok_or_else(|| ConstraintError::Malformed(token.to_string()))?;

            let mut letters = letter.trim().chars();
            let (Some(letter), None) = (letters.next(), letters.next()) else {
                return Err(ConstraintError::Malformed(token.to_string()));
            };

            let position: usize = position
                .trim()
                .parse()
                .map_err(|_| ConstraintError::Malformed(token.to_string()))?;

            validate_position(token, position)?;
            make(letter, position)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn exact_at_checks_single_position() {
        let c = Constraint::exact_at('a', 2).unwrap();
        assert!(c.evaluate(&word("crane")));
        assert!(!c.evaluate(&word("arise")));
    }

    #[test]
    fn present_not_at_needs_another_occurrence() {
        let c = Constraint::present_not_at('a', 0).unwrap();
        assert!(c.evaluate(&word("crane")));
        assert!(!c.evaluate(&word("arise"))); // Only at 0
        assert!(!c.evaluate(&word("slept")));

        // An extra occurrence at the excluded position does not disqualify
        let e = Constraint::present_not_at('e', 2).unwrap();
        assert!(e.evaluate(&word("geese")));
    }

    #[test]
    fn absent_checks_whole_word() {
        let c = Constraint::absent('z').unwrap();
        assert!(c.evaluate(&word("crane")));
        assert!(!c.evaluate(&word("pizza")));
    }

    #[test]
    fn priorities_order_exact_first() {
        let exact = Constraint::exact_at('a', 0).unwrap();
        let present = Constraint::present_not_at('a', 0).unwrap();
        let absent = Constraint::absent('a').unwrap();
        assert!(exact.priority() < present.priority());
        assert!(present.priority() < absent.priority());
    }

    #[test]
    fn uppercase_letters_normalized() {
        assert_eq!(
            Constraint::absent('Q').unwrap(),
            Constraint::Absent { letter: b'q' }
        );
    }

    #[test]
    fn invalid_letters_rejected() {
        assert_eq!(
            Constraint::absent('1'),
            Err(ConstraintError::InvalidLetter('1'))
        );
        assert_eq!(
            Constraint::exact_at('é', 0),
            Err(ConstraintError::InvalidLetter('é'))
        );
    }

    #[test]
    fn out_of_range_position_rejected() {
        assert!(matches!(
            Constraint::present_not_at('a', 5),
            Err(ConstraintError::PositionOutOfRange { position: 5, .. })
        ));
    }

    #[test]
    fn describe_matches_kind() {
        assert_eq!(Constraint::absent('x').unwrap().describe(), "Without letter x");
        assert_eq!(
            Constraint::exact_at('a', 1).unwrap().describe(),
            "With letter a at position 1"
        );
        assert_eq!(
            Constraint::present_not_at('e', 4).unwrap().describe(),
            "With letter e at any position other than 4"
        );
    }

    #[test]
    fn parse_absent_letters_list() {
        let parsed = parse_absent_letters("ab, c").unwrap();
        assert_eq!(
            parsed,
            vec![
                Constraint::Absent { letter: b'a' },
                Constraint::Absent { letter: b'b' },
                Constraint::Absent { letter: b'c' },
            ]
        );
        assert!(parse_absent_letters("").unwrap().is_empty());
        assert_eq!(
            parse_absent_letters("a7"),
            Err(ConstraintError::InvalidLetter('7'))
        );
    }

    #[test]
    fn parse_letter_positions_pairs() {
        let parsed = parse_letter_positions("a=1,b=2", Constraint::present_not_at).unwrap();
        assert_eq!(
            parsed,
            vec![
                Constraint::PresentNotAt { letter: b'a', position: 1 },
                Constraint::PresentNotAt { letter: b'b', position: 2 },
            ]
        );
    }

    #[test]
    fn parse_letter_positions_names_bad_token() {
        assert_eq!(
            parse_letter_positions("a=1,bb=2", Constraint::exact_at),
            Err(ConstraintError::Malformed("bb=2".to_string()))
        );
        assert_eq!(
            parse_letter_positions("a1", Constraint::exact_at),
            Err(ConstraintError::Malformed("a1".to_string()))
        );
        assert_eq!(
            parse_letter_positions("a=x", Constraint::exact_at),
            Err(ConstraintError::Malformed("a=x".to_string()))
        );
        assert_eq!(
            parse_letter_positions("c=12", Constraint::exact_at),
            Err(ConstraintError::PositionOutOfRange {
                token: "c=12".to_string(),
                position: 12
            })
        );
    }
}
