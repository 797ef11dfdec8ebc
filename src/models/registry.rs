//! Network registry: ordered collection of [`NetworkEntry`] records.

use super::NetworkEntry;
use crate::error::{Error, Result};

/// Registry lines starting with this marker (in the first field) are comments.
const COMMENT_MARKER: char = '#';

/// Ordered, read-only set of networks parsed from a tab separated registry.
#[derive(Debug, Default, Clone)]
pub struct NetworkRegistry {
    entries: Vec<NetworkEntry>,
}

impl NetworkRegistry {
    /// Build a registry from already constructed entries, keeping their order.
    pub fn from_entries(entries: Vec<NetworkEntry>) -> NetworkRegistry {
        NetworkRegistry { entries }
    }

    /// Parse registry lines of the form `name<TAB>cidr<TAB>description`.
    ///
    /// Blank lines and lines whose first field starts with `#` are skipped.
    /// Any other line that does not produce a valid [`NetworkEntry`] fails the
    /// whole parse with [`Error::MalformedRegistryLine`] (1-based line number).
    pub fn parse<I, S>(lines: I) -> Result<NetworkRegistry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();

        for (i, line) in lines.into_iter().enumerate() {
            let raw_line = line.as_ref();
            let line_number = i + 1;

            if raw_line.trim().is_empty() {
                continue;
            }
            let fields: Vec<&str> = raw_line.splitn(3, '\t').collect();
            if fields[0].trim_start().starts_with(COMMENT_MARKER) {
                log::trace!("skip comment line {line_number}");
                continue;
            }

            let malformed = |source: Option<Error>| Error::MalformedRegistryLine {
                line_number,
                raw_line: raw_line.to_string(),
                source: source.map(Box::new),
            };

            if fields.len() < 3 {
                return Err(malformed(None));
            }
            let entry = NetworkEntry::new(fields[0], fields[1], fields[2])
                .map_err(|e| malformed(Some(e)))?;
            log::trace!(
                "line {line_number}: {} {}-{}",
                entry.name,
                entry.range.lo(),
                entry.range.hi()
            );
            entries.push(entry);
        }

        log::debug!("parsed {} registry entries", entries.len());
        Ok(NetworkRegistry { entries })
    }

    /// Parse a whole registry text, see [`NetworkRegistry::parse`].
    pub fn parse_str(text: &str) -> Result<NetworkRegistry> {
        NetworkRegistry::parse(text.lines())
    }

    /// Entries in registry order.
    pub fn entries(&self) -> &[NetworkEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the most specific (longest prefix) entry that includes `address`.
    ///
    /// On equal prefix lengths the entry registered first wins. `None` means no
    /// entry includes the address, including when `address` is not valid IPv4.
    pub fn most_specific_match(&self, address: &str) -> Option<&NetworkEntry> {
        let mut best: Option<&NetworkEntry> = None;

        for entry in self.entries.iter().filter(|e| e.includes(address)) {
            match best {
                Some(current) if entry.prefix_length() <= current.prefix_length() => {}
                _ => best = Some(entry),
            }
        }

        best
    }

    /// Names of every entry that includes `address`, in registry order.
    pub fn all_matches(&self, address: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.includes(address))
            .map(|e| e.name.as_str())
            .collect()
    }
}
