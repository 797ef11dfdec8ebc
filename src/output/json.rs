//! JSON report output.

use crate::models::{Ipv4, NetworkRegistry};
use crate::processing::{self, Batch, MatchResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Best match for one address.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MatchedNetwork {
    pub name: String,
    pub cidr: Ipv4,
    pub description: String,
}

/// Lookup result for one input address.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub address: String,
    /// `None` when no network includes the address.
    pub network: Option<MatchedNetwork>,
    /// Every including network, in registry order.
    pub all_matches: Vec<String>,
}

/// Whole run as written by `--format json`.
#[derive(Serialize, Debug)]
pub struct MatchReport {
    pub generated_at: DateTime<Utc>,
    pub registry_entries: usize,
    /// Same de-duplicated lines as the text report.
    pub lines: Vec<String>,
    /// One record per input address, duplicates included.
    pub results: Vec<AddressRecord>,
}

impl MatchReport {
    pub fn build<S: AsRef<str>>(registry: &NetworkRegistry, addresses: &[S]) -> MatchReport {
        MatchReport::from_batch(registry, &processing::match_batch(registry, addresses))
    }

    /// Report for an already matched batch.
    pub fn from_batch(registry: &NetworkRegistry, batch: &Batch<'_>) -> MatchReport {
        let results = batch
            .results
            .iter()
            .map(|result| {
                let network = match result {
                    MatchResult::Matched { entry, .. } => Some(MatchedNetwork {
                        name: entry.name.clone(),
                        cidr: entry.range,
                        description: entry.description.clone(),
                    }),
                    MatchResult::NoMatch { .. } => None,
                };
                AddressRecord {
                    address: result.address().to_string(),
                    network,
                    all_matches: registry
                        .all_matches(result.address())
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                }
            })
            .collect();

        MatchReport {
            generated_at: Utc::now(),
            registry_entries: registry.len(),
            lines: batch.lines.clone(),
            results,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
