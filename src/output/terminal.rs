//! Plain text report output.

use crate::models::NetworkRegistry;
use itertools::Itertools;

/// Header line of the all-matches section.
pub const ALL_MATCHES_HEADER: &str = "# all matches";

/// One line per address listing every network that includes it.
///
/// Format is `<ip> <name1>,<name2>`, or `<ip> -` when nothing matches.
pub fn format_all_matches<I, S>(registry: &NetworkRegistry, addresses: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    addresses
        .into_iter()
        .map(|address| {
            let address = address.as_ref().trim();
            let names = registry.all_matches(address);
            if names.is_empty() {
                format!("{address} -")
            } else {
                format!("{address} {}", names.iter().join(","))
            }
        })
        .collect()
}

/// Print report lines to stdout.
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NetworkEntry;

    #[test]
    fn test_format_all_matches() {
        let registry = NetworkRegistry::from_entries(vec![
            NetworkEntry::new("HQ", "10.0.0.0/16", "").unwrap(),
            NetworkEntry::new("Eng", "10.0.0.0/24", "").unwrap(),
        ]);
        let lines = format_all_matches(&registry, [" 10.0.0.5", "10.0.7.1", "8.8.8.8"]);
        assert_eq!(lines, vec!["10.0.0.5 HQ,Eng", "10.0.7.1 HQ", "8.8.8.8 -"]);
    }
}
