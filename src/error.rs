//! Error types for registry parsing and lookups.

use thiserror::Error;

/// Errors raised while building network entries and the registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// CIDR text is not a valid IPv4 address or address/prefix.
    #[error("invalid CIDR '{cidr}': {reason}")]
    InvalidCidr { cidr: String, reason: String },

    /// Prefix length above 32.
    #[error("Network length /{0} is too long")]
    PrefixTooLong(u8),

    /// A network entry needs a name to be told apart from "no match".
    #[error("network entry name is empty")]
    EmptyName,

    /// A non-comment registry line could not be turned into an entry.
    #[error("malformed registry line {line_number}: {raw_line:?}")]
    MalformedRegistryLine {
        line_number: usize,
        raw_line: String,
        #[source]
        source: Option<Box<Error>>,
    },

    /// No address file was given on the command line.
    #[error("ip file not provided, please use -f path/to/filename.txt")]
    MissingInputFile,
}

pub type Result<T> = std::result::Result<T, Error>;
