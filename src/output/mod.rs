//! Terminal output formatting
//!
//! Display utilities for CLI results, pretty-printing and JSON.

pub mod display;
pub mod formatters;
pub mod json;

pub use display::{
    print_analysis_result, print_constraints, print_rank_report, print_verify_result,
};
pub use json::ranking_to_json;
