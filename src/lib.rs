//! Wordle Elimination Ranker
//!
//! Ranks Wordle guesses by how many possible answers they eliminate. Every
//! guess is simulated against every answer; the median elimination count is
//! the guess's score.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_elimination::core::{Word, WordSet};
//! use wordle_elimination::solver::{EliminationScorer, IndexedScorer};
//!
//! let answers: WordSet = ["arise", "crane", "crate", "slate", "stare"]
//!     .iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let scorer = IndexedScorer::new(&answers);
//!
//! // Playing CRATE when ARISE is hidden rules out every other answer
//! let guess = Word::new("crate").unwrap();
//! let target = Word::new("arise").unwrap();
//! assert_eq!(scorer.score(&guess, &target), 4);
//! ```

// Core domain types
pub mod core;

// Scoring engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
