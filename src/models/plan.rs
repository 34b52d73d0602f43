//! Split request and result models.

use super::Ipv4;
use crate::error::PlanError;
use serde::Serialize;
use std::net::Ipv4Addr;

/// How to split the base network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRequest {
    /// Split into at least this many equal subnets.
    SubnetCount(u64),
    /// Split into subnets holding at least this many usable hosts each.
    HostCount(u64),
}

impl SplitRequest {
    /// The requested count, regardless of mode.
    pub fn count(&self) -> u64 {
        match self {
            SplitRequest::SubnetCount(n) | SplitRequest::HostCount(n) => *n,
        }
    }

    /// Check that the count is at least 1.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.count() == 0 {
            Err(PlanError::Validation(
                "count must be at least 1".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

/// Outcome of splitting a base network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitResult {
    /// The normalized base network.
    pub base: Ipv4,
    /// Prefix length shared by every child subnet.
    pub new_prefix: u8,
    /// Dotted-quad netmask shared by every child subnet.
    pub netmask: Ipv4Addr,
    /// Child subnets in ascending address order.
    pub subnets: Vec<Ipv4>,
}

/// One display row, derived per child subnet.
///
/// Rows are transient: recomputed for every calculation and discarded on
/// the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetRow {
    /// The child subnet in CIDR notation.
    pub subnet: Ipv4,
    /// Dotted-quad netmask.
    pub netmask: Ipv4Addr,
    /// Usable host count, 0 for /31 and /32 children.
    pub usable_hosts: u64,
    /// First usable host, None when there are no usable hosts.
    pub first_host: Option<Ipv4Addr>,
    /// Last usable host, None when there are no usable hosts.
    pub last_host: Option<Ipv4Addr>,
}

impl SubnetRow {
    /// The usable range rendered as "first - last".
    pub fn host_range(&self) -> Option<String> {
        match (self.first_host, self.last_host) {
            (Some(first), Some(last)) => Some(format!("{first} - {last}")),
            _ => None,
        }
    }
}
