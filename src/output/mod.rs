//! Report output.
//!
//! - [`terminal`] - plain text report lines
//! - [`json`] - JSON report

mod json;
mod terminal;

pub use json::{AddressRecord, MatchReport, MatchedNetwork};
pub use terminal::{format_all_matches, print_lines, ALL_MATCHES_HEADER};
