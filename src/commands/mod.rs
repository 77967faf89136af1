//! Command implementations

pub mod analyze;
pub mod rank;
pub mod verify;

pub use analyze::{AnalysisResult, analyze_guess};
pub use rank::{RankConfig, RankReport, rank_guesses};
pub use verify::{DEFAULT_VERIFY_LIMIT, Mismatch, VerifyResult, verify_strategies};
