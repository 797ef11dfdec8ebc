//! Batch matching of addresses against the network registry.

use crate::models::{Ipv4, NetworkEntry, NetworkRegistry};
use std::collections::HashSet;

/// Outcome of looking up one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult<'a> {
    /// No registry entry includes the address.
    NoMatch { address: String },
    /// The most specific entry including the address.
    Matched {
        address: String,
        entry: &'a NetworkEntry,
    },
}

impl MatchResult<'_> {
    pub fn address(&self) -> &str {
        match self {
            MatchResult::NoMatch { address } | MatchResult::Matched { address, .. } => address,
        }
    }

    /// Report line for this result.
    pub fn to_line(&self) -> String {
        match self {
            MatchResult::NoMatch { address } => format!("{address} NO MATCHES"),
            MatchResult::Matched { entry, .. } => format!(
                "- '{}/{}'      #{} ",
                entry.range.addr,
                entry.prefix_length(),
                entry.name
            ),
        }
    }
}

/// Look up a single (untrimmed) address.
pub fn classify<'a>(registry: &'a NetworkRegistry, address: &str) -> MatchResult<'a> {
    let address = address.trim().to_string();
    match registry.most_specific_match(&address) {
        Some(entry) => MatchResult::Matched { address, entry },
        None => MatchResult::NoMatch { address },
    }
}

/// Results of one batch: every lookup plus the de-duplicated report lines.
#[derive(Debug, Clone, Default)]
pub struct Batch<'a> {
    /// One result per input address, in input order.
    pub results: Vec<MatchResult<'a>>,
    pub lines: Vec<String>,
}

impl Batch<'_> {
    /// Number of addresses without any including network.
    pub fn unmatched(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r, MatchResult::NoMatch { .. }))
            .count()
    }
}

/// Look up every address once, building the report lines as it goes.
///
/// A matched network is only announced once per call; unmatched addresses are
/// reported every time they appear.
pub fn match_batch<'a, I, S>(registry: &'a NetworkRegistry, addresses: I) -> Batch<'a>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut subnets_so_far: HashSet<(Ipv4, &str)> = HashSet::new();
    let mut batch = Batch::default();

    for address in addresses {
        let result = classify(registry, address.as_ref());
        match result {
            MatchResult::Matched { ref address, entry } => {
                if subnets_so_far.insert((entry.range, entry.name.as_str())) {
                    batch.lines.push(result.to_line());
                } else {
                    log::trace!("{address} already reported as {}", entry.name);
                }
            }
            MatchResult::NoMatch { .. } => batch.lines.push(result.to_line()),
        }
        batch.results.push(result);
    }

    batch
}

/// Match every address and return the report lines in input order.
pub fn run<I, S>(registry: &NetworkRegistry, addresses: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match_batch(registry, addresses).lines
}
