//! Per-subnet display row derivation.

use crate::error::PlanError;
use crate::models::{usable_hosts, SplitResult, SubnetRow};
use std::net::Ipv4Addr;

/// Derive one display row per child subnet.
///
/// Each row carries the netmask, the usable host count and the usable
/// range `network + 1 .. broadcast - 1`. Children of /31 or /32 get a
/// zero count and no range.
pub fn subnet_rows(result: &SplitResult) -> Result<Vec<SubnetRow>, PlanError> {
    let mut rows = Vec::with_capacity(result.subnets.len());
    for subnet in &result.subnets {
        let hosts = usable_hosts(subnet.mask)?;
        let (first_host, last_host) = if hosts > 0 {
            let first = Ipv4Addr::from(u32::from(subnet.addr) + 1);
            let last = Ipv4Addr::from(u32::from(subnet.hi()) - 1);
            (Some(first), Some(last))
        } else {
            (None, None)
        };
        rows.push(SubnetRow {
            subnet: *subnet,
            netmask: result.netmask,
            usable_hosts: hosts,
            first_host,
            last_host,
        });
    }
    Ok(rows)
}
