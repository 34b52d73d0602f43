//! JSON report output for split results.

use crate::models::{Ipv4, SplitResult, SubnetRow};
use serde::Serialize;
use std::error::Error;
use std::net::Ipv4Addr;

/// Serializable report covering the whole calculation.
#[derive(Serialize)]
struct JsonReport<'a> {
    base: Ipv4,
    new_prefix: u8,
    netmask: Ipv4Addr,
    subnet_count: usize,
    subnets: &'a [SubnetRow],
}

/// Print the split result as pretty-printed JSON to stdout.
pub fn print_json(result: &SplitResult, rows: &[SubnetRow]) -> Result<(), Box<dyn Error>> {
    let report = JsonReport {
        base: result.base,
        new_prefix: result.new_prefix,
        netmask: result.netmask,
        subnet_count: rows.len(),
        subnets: rows,
    };
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SplitRequest;
    use crate::processing::{plan, subnet_rows};

    #[test]
    fn test_report_serialization() {
        let base = Ipv4::new("192.168.1.0/24").unwrap();
        let result = plan(base, SplitRequest::SubnetCount(4)).expect("plan failed");
        let rows = subnet_rows(&result).expect("row derivation failed");

        let report = JsonReport {
            base: result.base,
            new_prefix: result.new_prefix,
            netmask: result.netmask,
            subnet_count: rows.len(),
            subnets: &rows,
        };
        let json = serde_json::to_string(&report).expect("Error serializing report");

        assert!(json.contains("\"base\":\"192.168.1.0/24\""));
        assert!(json.contains("\"new_prefix\":26"));
        assert!(json.contains("\"netmask\":\"255.255.255.192\""));
        assert!(json.contains("\"subnet_count\":4"));
        assert!(json.contains("\"subnet\":\"192.168.1.192/26\""));
        assert!(json.contains("\"usable_hosts\":62"));
        assert!(json.contains("\"first_host\":\"192.168.1.1\""));
    }
}
