//! Wordle word representation
//!
//! A Word stores a 5-letter lowercase word as bytes along with a letter bitmask
//! so that whole-word membership tests are a single AND.

use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LEN: usize = 5;

/// Number of letters in the alphabet (`a`..=`z`)
pub const ALPHABET_LEN: usize = 26;

/// A 5-letter Wordle word
///
/// Ordering is lexicographic on the letters, which is the order every sorted
/// collection in this crate relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    chars: [u8; WORD_LEN],
    letters: u32,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

/// Index of a lowercase ASCII letter in the alphabet (`a` = 0)
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Check that a byte is a letter this crate can index
#[inline]
#[must_use]
pub const fn is_letter(letter: u8) -> bool {
    letter.is_ascii_lowercase()
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_elimination::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(|&c| is_letter(c)) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = chars
            .iter()
            .fold(0u32, |mask, &c| mask | (1 << letter_index(c)));

        Ok(Self { chars, letters })
    }

    /// Get the word as a string slice
    ///
    /// # Panics
    /// Will not panic - bytes are validated as ASCII on construction.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.chars).expect("word bytes are validated ASCII")
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        is_letter(letter) && self.letters & (1 << letter_index(letter)) != 0
    }

    /// Check if the letter occurs at some position other than `position`
    ///
    /// An occurrence at `position` itself neither helps nor hurts.
    #[must_use]
    pub fn has_letter_other_than(&self, letter: u8, position: usize) -> bool {
        self.chars
            .iter()
            .enumerate()
            .any(|(i, &c)| i != position && c == letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
