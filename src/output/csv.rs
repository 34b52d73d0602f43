//! CSV output formatting for split results.

use super::terminal::format_field;
use crate::models::{SplitResult, SubnetRow};

/// Print the split result as CSV to stdout.
pub fn print_csv(result: &SplitResult, rows: &[SubnetRow]) {
    log::info!(
        "#Start print_csv() base={} subnets={}",
        result.base,
        rows.len()
    );

    // Print CSV header
    println!(
        r#" "cnt",           "subnet",         "netmask", "usable_hosts",      "first_host",       "last_host""#
    );

    for (i, row) in rows.iter().enumerate() {
        print_csv_row(i + 1, row);
    }
}

/// Print a single CSV row.
fn print_csv_row(cnt: usize, row: &SubnetRow) {
    println!(
        "{cnt},{subnet},{netmask},{hosts},{first},{last}",
        cnt = format_field(cnt, 6),
        subnet = format_field(row.subnet, 17),
        netmask = format_field(row.netmask, 18),
        hosts = format_field(row.usable_hosts, 15),
        first = format_field(host_field(row.first_host), 17),
        last = format_field(host_field(row.last_host), 17),
    );
}

fn host_field(host: Option<std::net::Ipv4Addr>) -> String {
    host.map(|ip| ip.to_string())
        .unwrap_or_else(|| "none".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_host_field() {
        assert_eq!(host_field(Some(Ipv4Addr::new(10, 0, 0, 1))), "10.0.0.1");
        assert_eq!(host_field(None), "none");
    }
}
