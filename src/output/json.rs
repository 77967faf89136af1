//! JSON rendering of ranked guesses

use crate::solver::RankedGuess;

/// Render ranked guesses as a JSON array of `{word, score, valid}` objects
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn ranking_to_json(ranked: &[RankedGuess]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(ranked)
}
