//! IPv4 network and CIDR notation utilities.
//!
//! Provides the [`Ipv4`] value type for representing IPv4 networks with a
//! prefix length, along with the mask arithmetic the planner is built on.

use crate::error::PlanError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_planner::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, PlanError> {
    if len > MAX_LENGTH {
        Err(PlanError::Range(format!(
            "prefix /{len} is longer than /{MAX_LENGTH}"
        )))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Convert a CIDR prefix length to a dotted-quad netmask.
pub fn netmask_addr(len: u8) -> Result<Ipv4Addr, PlanError> {
    Ok(Ipv4Addr::from(get_cidr_mask(len)?))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, PlanError> {
    if len > MAX_LENGTH {
        Err(PlanError::Range(format!(
            "prefix /{len} is longer than /{MAX_LENGTH}"
        )))
    } else {
        let right_len = MAX_LENGTH - len;
        let bits = u32::from(addr) as u64;
        let new_bits = (bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(new_bits as u32))
    }
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, PlanError> {
    let mask = get_cidr_mask(len)?;
    let addr_bits = u32::from(addr);
    let network_bits = addr_bits & mask;
    let broadcast_bits = network_bits | (!mask);
    Ok(Ipv4Addr::from(broadcast_bits))
}

/// Returns the IP address following the given subnet.
pub fn ip_after_subnet(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, PlanError> {
    let network_bits = u32::from(addr) & get_cidr_mask(len)?;
    let subnet_size = 1u64 << (MAX_LENGTH - len);
    let next_subnet_bits = network_bits as u64 + subnet_size;
    if next_subnet_bits > u32::MAX as u64 {
        return Err(PlanError::Range(
            "next subnet calculation overflowed".to_string(),
        ));
    }
    Ok(Ipv4Addr::from(next_subnet_bits as u32))
}

/// Total number of addresses in a block of the given prefix length.
pub fn num_addresses(len: u8) -> Result<u64, PlanError> {
    if len > MAX_LENGTH {
        Err(PlanError::Range(format!(
            "prefix /{len} is longer than /{MAX_LENGTH}"
        )))
    } else {
        Ok(1u64 << (MAX_LENGTH - len))
    }
}

/// Number of usable host addresses in a block of the given prefix length.
///
/// The network and broadcast addresses are reserved, so a /31 or /32 block
/// has no usable hosts and reports 0 rather than a negative number.
pub fn usable_hosts(len: u8) -> Result<u64, PlanError> {
    if len >= MAX_LENGTH - 1 {
        // /31 and /32 have no room for a host range
        num_addresses(len).map(|_| 0)
    } else {
        Ok((1u64 << (MAX_LENGTH - len)) - 2)
    }
}

/// IPv4 network in CIDR notation.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(de::Error::custom(format!("invalid CIDR format: {s}")));
        }

        let addr = Ipv4Addr::from_str(parts[0])
            .map_err(|_| de::Error::custom(format!("invalid IP address: {}", parts[0])))?;
        let mask = u8::from_str(parts[1])
            .map_err(|_| de::Error::custom(format!("invalid prefix length: {}", parts[1])))?;

        Ok(Ipv4 { addr, mask })
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// The address is kept exactly as given; use [`Ipv4::network`] to
    /// normalize host bits away.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, PlanError> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(PlanError::Parse(format!(
                "expected address/prefix, got {addr_cidr:?}"
            )));
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| PlanError::Parse(format!("invalid address {}", parts[0])))?;
        let mask: u8 = parts[1]
            .parse()
            .map_err(|_| PlanError::Parse(format!("invalid prefix length {}", parts[1])))?;
        if mask > MAX_LENGTH {
            return Err(PlanError::Parse(format!(
                "prefix /{mask} is longer than /{MAX_LENGTH}"
            )));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Parse a CIDR string permissively into its canonical base network.
    ///
    /// A bare address without a prefix is treated as a /32, and an address
    /// with non-zero host bits is masked down to its network base rather
    /// than rejected.
    pub fn network(addr_cidr: &str) -> Result<Ipv4, PlanError> {
        let addr_cidr = addr_cidr.trim();
        let parsed = if addr_cidr.contains('/') {
            Ipv4::new(addr_cidr)?
        } else {
            let addr: Ipv4Addr = addr_cidr
                .parse()
                .map_err(|_| PlanError::Parse(format!("invalid address {addr_cidr}")))?;
            Ipv4 {
                addr,
                mask: MAX_LENGTH,
            }
        };
        let base = parsed.lo();
        if base != parsed.addr {
            log::debug!("Normalized {parsed} to network base {base}");
        }
        Ok(Ipv4 {
            addr: base,
            mask: parsed.mask,
        })
    }

    /// Get the highest (broadcast) address in the network.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address: {e}"))
    }

    /// Get the lowest (network) address in the network.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating minimum address for {self}: {e}"))
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
