//! Address list input.

use std::error::Error;
use std::path::Path;

/// Keep the first whitespace separated token of every non-blank line.
///
/// Anything after the address on a line (hostnames, notes) is ignored.
pub fn addresses_from_text(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Read the addresses to look up from `path`.
pub fn read_addresses(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading ip file {}: {e}", path.display()))?;
    let addresses = addresses_from_text(&text);
    log::info!("Read {} addresses from {}", addresses.len(), path.display());
    Ok(addresses)
}
