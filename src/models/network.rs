//! Named network (registry entry) data model.

use super::Ipv4;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// A named CIDR range from the network registry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "NetworkEntryFields")]
pub struct NetworkEntry {
    /// Name of the network, e.g. "building-3-wifi".
    pub name: String,
    /// CIDR block of the network.
    pub range: Ipv4,
    /// Free text description, not used for matching.
    pub description: String,
}

/// Serialized form of [`NetworkEntry`], validated through [`NetworkEntry::new`].
#[derive(Deserialize)]
struct NetworkEntryFields {
    name: String,
    range: String,
    #[serde(default)]
    description: String,
}

impl TryFrom<NetworkEntryFields> for NetworkEntry {
    type Error = Error;

    fn try_from(fields: NetworkEntryFields) -> Result<NetworkEntry> {
        NetworkEntry::new(&fields.name, &fields.range, &fields.description)
    }
}

impl NetworkEntry {
    /// Build an entry from its text fields.
    ///
    /// Fails with [`Error::InvalidCidr`] when `cidr` is not an IPv4 network and
    /// with [`Error::EmptyName`] when `name` is blank.
    pub fn new(name: &str, cidr: &str, description: &str) -> Result<NetworkEntry> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(NetworkEntry {
            name: name.to_string(),
            range: Ipv4::new(cidr)?,
            description: description.trim().to_string(),
        })
    }

    /// Returns true if `address` is inside this network.
    ///
    /// Anything that is not a plain IPv4 address is reported as not included.
    pub fn includes(&self, address: &str) -> bool {
        match address.trim().parse::<Ipv4Addr>() {
            Ok(ip) => self.range.contains(ip),
            Err(_) => false,
        }
    }

    /// Prefix length (number of one bits in the subnet mask).
    pub fn prefix_length(&self) -> u8 {
        self.range.mask
    }
}

impl std::fmt::Display for NetworkEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.name, self.range, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let entry = NetworkEntry::new(" Eng ", " 10.0.0.0/24 ", " Engineering ").unwrap();
        assert_eq!(entry.name, "Eng");
        assert_eq!(entry.range.to_string(), "10.0.0.0/24");
        assert_eq!(entry.description, "Engineering");
        assert_eq!(entry.to_string(), "Eng 10.0.0.0/24 (Engineering)");
    }

    #[test]
    fn test_new_invalid_cidr() {
        let err = NetworkEntry::new("bad", "10.0.0.0/99", "").unwrap_err();
        assert!(matches!(err, Error::InvalidCidr { .. }), "got {err:?}");
    }

    #[test]
    fn test_new_empty_name() {
        assert_eq!(
            NetworkEntry::new("  ", "10.0.0.0/24", "x").unwrap_err(),
            Error::EmptyName
        );
    }

    #[test]
    fn test_includes() {
        let entry = NetworkEntry::new("Eng", "10.0.0.0/24", "Engineering").unwrap();
        assert!(entry.includes("10.0.0.5"));
        assert!(entry.includes(" 10.0.0.255\n"));
        assert!(!entry.includes("10.0.1.5"));
    }

    #[test]
    fn test_includes_invalid_address_is_false() {
        let entry = NetworkEntry::new("All", "0.0.0.0/0", "everything").unwrap();
        assert!(!entry.includes(""));
        assert!(!entry.includes("not-an-ip"));
        assert!(!entry.includes("10.0.0.300"));
        assert!(!entry.includes("10.0.0.0/24"));
        assert!(!entry.includes("::1"));
    }

    #[test]
    fn test_prefix_length() {
        for n in 0..=32u8 {
            let entry = NetworkEntry::new("n", &format!("10.1.2.3/{n}"), "").unwrap();
            assert_eq!(entry.prefix_length(), n);
        }
        let host = NetworkEntry::new("host", "10.1.2.3", "").unwrap();
        assert_eq!(host.prefix_length(), 32);
    }

    #[test]
    fn test_deserialize_validates() {
        let entry: NetworkEntry = serde_json::from_str(
            r#"{"name":" Eng ","range":"10.0.0.9/24","description":"Engineering"}"#,
        )
        .unwrap();
        assert_eq!(entry, NetworkEntry::new("Eng", "10.0.0.0/24", "Engineering").unwrap());

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(serde_json::from_str::<NetworkEntry>(&json).unwrap(), entry);

        assert!(serde_json::from_str::<NetworkEntry>(
            r#"{"name":"","range":"10.0.0.0/8","description":""}"#
        )
        .is_err());
        assert!(serde_json::from_str::<NetworkEntry>(
            r#"{"name":"x","range":"10.0.0.0/+8","description":""}"#
        )
        .is_err());
    }

    #[test]
    fn test_new_rejects_signed_prefix() {
        let err = NetworkEntry::new("x", "10.0.0.0/+24", "").unwrap_err();
        assert!(matches!(err, Error::InvalidCidr { .. }), "got {err:?}");
    }
}
