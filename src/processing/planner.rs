//! Subnet split planning.
//!
//! Chooses the child prefix length for a split request and enumerates the
//! child subnets that exactly tile the base network.

use crate::error::PlanError;
use crate::models::{ip_after_subnet, netmask_addr, Ipv4, SplitRequest, SplitResult, MAX_LENGTH};

/// Default cap on how many child subnets one request may enumerate.
pub const DEFAULT_MAX_SUBNETS: u64 = 1 << 20;

/// Smallest number of bits with `2^bits >= n`.
///
/// Computed from the integer bit length of `n - 1`, which is exact for
/// powers of two where a floating-point `log2` can land on the wrong side
/// of the ceiling.
fn bits_for(n: u64) -> u32 {
    debug_assert!(n >= 1, "bits_for requires n >= 1");
    64 - (n - 1).leading_zeros()
}

/// Choose the child prefix for "at least `n` equal subnets".
pub fn prefix_for_subnet_count(base: Ipv4, n: u64) -> Result<u8, PlanError> {
    let new_prefix = base.mask as u32 + bits_for(n);
    if new_prefix > MAX_LENGTH as u32 {
        return Err(PlanError::Range(format!(
            "{n} subnets of {base} need a /{new_prefix}, past the /{MAX_LENGTH} limit"
        )));
    }
    Ok(new_prefix as u8)
}

/// Choose the child prefix for "at least `n` usable hosts per subnet".
///
/// Two addresses are reserved per subnet for the network and broadcast
/// addresses, so the chosen block is the smallest power of two holding
/// `n + 2` addresses.
pub fn prefix_for_host_count(base: Ipv4, n: u64) -> Result<u8, PlanError> {
    let addresses = n.checked_add(2).ok_or_else(|| {
        PlanError::Range(format!(
            "{n} hosts per subnet do not fit in a 32-bit address space"
        ))
    })?;
    let host_bits = bits_for(addresses);
    if host_bits > MAX_LENGTH as u32 {
        return Err(PlanError::Range(format!(
            "{n} hosts per subnet do not fit in a 32-bit address space"
        )));
    }
    let new_prefix = (MAX_LENGTH as u32 - host_bits) as u8;
    if new_prefix < base.mask {
        return Err(PlanError::Range(format!(
            "{n} hosts per subnet need a /{new_prefix}, coarser than the base {base}"
        )));
    }
    Ok(new_prefix)
}

/// Split `base` according to `request`, with the default enumeration cap.
///
/// The result lists every child subnet in ascending address order; the
/// children are disjoint and together cover exactly the base block.
pub fn plan(base: Ipv4, request: SplitRequest) -> Result<SplitResult, PlanError> {
    plan_with_limit(base, request, DEFAULT_MAX_SUBNETS)
}

/// Split `base` according to `request`, refusing to enumerate more than
/// `max_subnets` children.
pub fn plan_with_limit(
    base: Ipv4,
    request: SplitRequest,
    max_subnets: u64,
) -> Result<SplitResult, PlanError> {
    request.validate()?;

    // Planner arithmetic assumes the canonical base address
    let base = Ipv4 {
        addr: base.lo(),
        mask: base.mask,
    };
    log::debug!("#Start plan() base={base} request={request:?}");

    let new_prefix = match request {
        SplitRequest::SubnetCount(n) => prefix_for_subnet_count(base, n)?,
        SplitRequest::HostCount(n) => prefix_for_host_count(base, n)?,
    };

    let count = 1u64 << (new_prefix - base.mask);
    if count > max_subnets {
        return Err(PlanError::Range(format!(
            "split of {base} into /{new_prefix} blocks would enumerate {count} subnets, over the cap of {max_subnets}"
        )));
    }

    let mut subnets = Vec::with_capacity(count as usize);
    let mut current = Ipv4 {
        addr: base.addr,
        mask: new_prefix,
    };
    for _ in 1..count {
        subnets.push(current);
        current = Ipv4 {
            addr: ip_after_subnet(current.addr, new_prefix)?,
            mask: new_prefix,
        };
    }
    subnets.push(current);

    log::debug!("plan() produced {} subnets at /{new_prefix}", subnets.len());
    Ok(SplitResult {
        base,
        new_prefix,
        netmask: netmask_addr(new_prefix)?,
        subnets,
    })
}
