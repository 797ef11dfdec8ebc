//! Domain models for subnet matching.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`NetworkEntry`] - a named network from the registry
//! - [`NetworkRegistry`] - the ordered registry with longest-prefix lookups

mod ipv4;
mod network;
mod registry;

// Re-export public types
pub use ipv4::{broadcast_addr, cut_addr, get_cidr_mask, Ipv4, MAX_LENGTH};
pub use network::NetworkEntry;
pub use registry::NetworkRegistry;
