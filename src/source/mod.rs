//! Input sources.
//!
//! - [`registry_file`] - locating, downloading and consuming the registry file
//! - [`fetch`] - HTTP(S) download of the registry
//! - [`address_file`] - reading the addresses to look up

mod address_file;
mod fetch;
mod registry_file;
#[cfg(test)]
mod test_server;

// Re-export public functions
pub use address_file::{addresses_from_text, read_addresses};
pub use fetch::fetch_registry;
pub use registry_file::load_registry;
