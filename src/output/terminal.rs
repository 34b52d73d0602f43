//! Terminal output.
//!
//! Renders a split result as an aligned table with a summary header, and
//! provides the [`format_field`] helper the CSV printer builds on.

use crate::models::{SplitResult, SubnetRow};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print the summary header and subnet table to stdout.
pub fn print_table(result: &SplitResult, rows: &[SubnetRow]) {
    log::info!("#Start print_table() with {} subnets", rows.len());

    println!("Base network:  {}", result.base.to_string().cyan());
    println!(
        "Subnet mask:   {} (/{})",
        result.netmask, result.new_prefix
    );
    println!("Total subnets: {}", rows.len().to_string().cyan());
    println!();
    println!("{}", table_line("cnt", "subnet", "netmask", "usable_hosts", "usable_range").bold());
    for (i, row) in rows.iter().enumerate() {
        println!("{}", format_row(i + 1, row));
    }
}

/// Render one data row with the shared column layout.
fn format_row(cnt: usize, row: &SubnetRow) -> String {
    let hosts = if row.usable_hosts > 0 {
        row.usable_hosts.to_string()
    } else {
        "none".to_string()
    };
    let range = row.host_range().unwrap_or_else(|| "n/a".to_string());
    table_line(
        &cnt.to_string(),
        &row.subnet.to_string(),
        &row.netmask.to_string(),
        &hosts,
        &range,
    )
}

fn table_line(cnt: &str, subnet: &str, netmask: &str, hosts: &str, range: &str) -> String {
    format!("{cnt:>5}  {subnet:<18}  {netmask:<15}  {hosts:>12}  {range:<31}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ipv4, SplitRequest};
    use crate::processing::{plan, subnet_rows};

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_format_row() {
        let base = Ipv4::new("192.168.1.0/24").unwrap();
        let result = plan(base, SplitRequest::SubnetCount(4)).expect("plan failed");
        let rows = subnet_rows(&result).expect("row derivation failed");

        let line = format_row(1, &rows[0]);
        assert!(line.contains("192.168.1.0/26"));
        assert!(line.contains("255.255.255.192"));
        assert!(line.contains("62"));
        assert!(line.contains("192.168.1.1 - 192.168.1.62"));
    }

    #[test]
    fn test_format_row_no_hosts() {
        let base = Ipv4::new("10.0.0.0/31").unwrap();
        let result = plan(base, SplitRequest::SubnetCount(2)).expect("plan failed");
        let rows = subnet_rows(&result).expect("row derivation failed");

        let line = format_row(1, &rows[0]);
        assert!(line.contains("none"), "zero hosts rendered as marker");
        assert!(line.contains("n/a"), "missing range rendered as n/a");
    }
}
