//! Word list loading utilities
//!
//! Reads answer and guess lists from disk. Files ending in `.json` must hold a
//! JSON array of strings; anything else is read as one word per line. Every
//! entry must be a valid word; the first bad entry fails the load.

use crate::core::{Word, WordError, WordSet};
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for unreadable or malformed word lists
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {} is not a JSON array of strings: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("word list {} entry {entry} ('{word}'): {source}", path.display())]
    InvalidWord {
        path: PathBuf,
        /// 1-based position of the entry in the file
        entry: usize,
        word: String,
        #[source]
        source: WordError,
    },
}

/// Load a sorted, deduplicated word set from a file
///
/// # Errors
///
/// Returns `CorpusError` if the file cannot be read, is not valid JSON (for
/// `.json` files), or contains an entry that is not a 5-letter word.
///
/// # Examples
/// ```no_run
/// use wordle_elimination::wordlists::loader::load_from_file;
///
/// let words = load_from_file("possible_answers.json").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordSet, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let words = if is_json {
        parse_json(&content, path)?
    } else {
        parse_lines(&content, path)?
    };

    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse a JSON array of words
///
/// # Errors
///
/// Returns `CorpusError::Json` for anything but an array of strings, or
/// `CorpusError::InvalidWord` for the first entry that is not a valid word.
pub fn parse_json(content: &str, path: &Path) -> Result<WordSet, CorpusError> {
    let raw: Vec<String> = serde_json::from_str(content).map_err(|source| CorpusError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    words_from_entries(raw.iter().map(String::as_str), path)
}

/// Parse one word per line, ignoring blank lines
///
/// # Errors
///
/// Returns `CorpusError::InvalidWord` for the first line that is not a valid word.
pub fn parse_lines(content: &str, path: &Path) -> Result<WordSet, CorpusError> {
    let entries = content.lines().map(str::trim).filter(|line| !line.is_empty());
    words_from_entries(entries, path)
}

fn words_from_entries<'a>(
    entries: impl Iterator<Item = &'a str>,
    path: &Path,
) -> Result<WordSet, CorpusError> {
    entries
        .enumerate()
        .map(|(i, entry)| {
            Word::new(entry).map_err(|source| CorpusError::InvalidWord {
                path: path.to_path_buf(),
                entry: i + 1,
                word: entry.to_string(),
                source,
            })
        })
        .collect()
}

/// Convert a string slice to a word set
///
/// # Errors
///
/// Returns the first `WordError` encountered.
///
/// # Examples
/// ```
/// use wordle_elimination::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["slate", "crane", "slate"]).unwrap();
/// assert_eq!(words.len(), 2);
/// assert!(words_from_slice(&["crane", "toolong"]).is_err());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<WordSet, WordError> {
    slice.iter().map(Word::new).collect()
}
