pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use itertools::Itertools;

pub use error::PlanError;
pub use models::{Ipv4, SplitRequest, SplitResult, SubnetRow};

/// Parse the raw CIDR text and run the planner with the configured cap.
///
/// This is the seam between raw user input and the pure calculation: the
/// text is parsed permissively (host bits masked down), the request has
/// already been validated by the caller, and the enumeration cap comes
/// from [`config::max_subnets`].
pub fn split_network(cidr: &str, request: SplitRequest) -> Result<SplitResult, PlanError> {
    let base = Ipv4::network(cidr)?;
    processing::plan_with_limit(base, request, config::max_subnets())
}

// Return an error if the children do not exactly tile the base network.
pub fn check_partition(result: &SplitResult) -> Result<(), Box<dyn std::error::Error>> {
    let first = result.subnets.first().ok_or("No subnets in result")?;
    let last = result.subnets.last().ok_or("No subnets in result")?;
    if first.lo() != result.base.lo() {
        return Err(format!(
            "First subnet {first} does not start at the base {base}",
            base = result.base
        )
        .into());
    }
    if last.hi() != result.base.hi() {
        return Err(format!(
            "Last subnet {last} does not end the base {base}",
            base = result.base
        )
        .into());
    }
    for (prev, next) in result.subnets.iter().tuple_windows() {
        let boundary = u32::from(prev.hi())
            .checked_add(1)
            .ok_or_else(|| format!("Subnet {prev} already ends the address space"))?;
        if u32::from(next.lo()) != boundary {
            return Err(format!("Gap or overlap between {prev} and {next}").into());
        }
    }
    Ok(())
}
