//! Domain models for the subnet planner.
//!
//! This module contains the core data structures used throughout the
//! application:
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`SplitRequest`] - how a base network should be split
//! - [`SplitResult`] and [`SubnetRow`] - the calculation output

mod ipv4;
mod plan;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, ip_after_subnet, netmask_addr, num_addresses,
    usable_hosts, Ipv4, MAX_LENGTH,
};
pub use plan::{SplitRequest, SplitResult, SubnetRow};
