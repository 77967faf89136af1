//! Word lists for elimination scoring
//!
//! Loads the answer set and guess list from disk and combines them into the
//! corpus the scorer runs on.

pub mod loader;

use crate::core::{Constraint, WordSet};
use log::info;
use loader::{CorpusError, load_from_file};
use std::path::Path;

/// Default answer list file name
pub const DEFAULT_ANSWERS_PATH: &str = "possible_answers.json";

/// Default extra-guesses file name
pub const DEFAULT_GUESSES_PATH: &str = "possible_guesses.json";

/// Answer set and guess dictionary, after user constraints are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    /// Words that can be the hidden answer
    pub answers: WordSet,
    /// Words that can be guessed: extra guesses plus every answer
    pub dictionary: WordSet,
}

impl Corpus {
    /// Filter both lists by `constraints` and fold the answers into the dictionary
    ///
    /// # Examples
    /// ```
    /// use wordle_elimination::core::Constraint;
    /// use wordle_elimination::wordlists::{Corpus, loader::words_from_slice};
    ///
    /// let answers = words_from_slice(&["crane", "slate"]).unwrap();
    /// let guesses = words_from_slice(&["aahed", "soare"]).unwrap();
    /// let corpus = Corpus::new(&answers, &guesses, &[Constraint::absent('c').unwrap()]);
    ///
    /// assert_eq!(corpus.answers.len(), 1);
    /// assert_eq!(corpus.dictionary.len(), 3);
    /// ```
    #[must_use]
    pub fn new(answers: &WordSet, guesses: &WordSet, constraints: &[Constraint]) -> Self {
        let answers = answers.filter(constraints);
        let dictionary = guesses.filter(constraints).union(&answers);

        if !constraints.is_empty() {
            info!(
                "{} constraints leave {} answers and {} guesses",
                constraints.len(),
                answers.len(),
                dictionary.len()
            );
        }

        Self {
            answers,
            dictionary,
        }
    }

    /// Load both lists from disk and build the corpus
    ///
    /// # Errors
    ///
    /// Returns `CorpusError` if either file cannot be loaded.
    pub fn load(
        answers_path: impl AsRef<Path>,
        guesses_path: impl AsRef<Path>,
        constraints: &[Constraint],
    ) -> Result<Self, CorpusError> {
        let answers = load_from_file(answers_path)?;
        let guesses = load_from_file(guesses_path)?;
        Ok(Self::new(&answers, &guesses, constraints))
    }
}
