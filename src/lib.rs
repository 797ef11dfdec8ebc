//! Longest-prefix subnet lookup for batches of IPv4 addresses.
//!
//! Reads a tab separated registry of named networks and reports, for every
//! address in an ip file, the most specific network it belongs to.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod source;

use colored::Colorize;
use config::{OutputFormat, Settings};
use std::error::Error;

pub use error::Error as MatchError;
pub use models::{Ipv4, NetworkEntry, NetworkRegistry};
pub use processing::MatchResult;

/// Run one lookup batch and return the report lines to print.
///
/// Loads (and consumes) the registry, reads the ip file and renders the
/// report in the configured format.
pub async fn build_report(settings: &Settings) -> Result<Vec<String>, Box<dyn Error>> {
    let registry = source::load_registry(
        &settings.registry_file,
        settings.registry_url.as_deref(),
        settings.keep_registry,
    )
    .await?;
    let addresses = source::read_addresses(&settings.ip_file)?;

    let batch = processing::match_batch(&registry, &addresses);
    let unmatched = batch.unmatched();
    if unmatched > 0 {
        log::warn!(
            "{} of {} addresses have {}",
            unmatched,
            addresses.len(),
            "NO MATCHES".on_red()
        );
    }

    let lines = match settings.format {
        OutputFormat::Text => {
            let mut lines = batch.lines;
            if settings.all_matches {
                lines.push(output::ALL_MATCHES_HEADER.to_string());
                lines.extend(output::format_all_matches(&registry, &addresses));
            }
            lines
        }
        OutputFormat::Json => {
            vec![output::MatchReport::from_batch(&registry, &batch).to_json()?]
        }
    };

    Ok(lines)
}
