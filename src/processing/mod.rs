//! Address matching logic.
//!
//! - [`matcher`] - batch lookup of addresses with de-duplicated report lines

mod matcher;

// Re-export public functions
pub use matcher::{classify, match_batch, run, Batch, MatchResult};
