//! Integration tests for subnet-planner
//!
//! These tests exercise the complete workflow from raw text input to
//! derived display rows.

use subnet_planner::cli::{parse_request, SplitMode};
use subnet_planner::processing::subnet_rows;
use subnet_planner::{check_partition, split_network, Ipv4, PlanError, SplitRequest};

#[test]
fn test_split_by_subnet_count() {
    let request = parse_request(SplitMode::Subnets, "4").expect("Failed to parse request");
    let result = split_network("192.168.1.0/24", request).expect("Failed to split network");

    assert_eq!(result.new_prefix, 26, "4 subnets of a /24 need a /26");
    assert_eq!(result.netmask.to_string(), "255.255.255.192");
    assert_eq!(result.subnets.len(), 4, "Expected 4 subnets");

    let expected = ["192.168.1.0/26", "192.168.1.64/26", "192.168.1.128/26", "192.168.1.192/26"];
    for (subnet, cidr) in result.subnets.iter().zip(expected) {
        assert_eq!(subnet, &Ipv4::new(cidr).unwrap());
    }

    let rows = subnet_rows(&result).expect("Failed to derive rows");
    for row in &rows {
        assert_eq!(row.usable_hosts, 62, "Each /26 holds 62 usable hosts");
    }
}

#[test]
fn test_split_by_host_count_matches_subnet_count() {
    let by_hosts = split_network(
        "192.168.1.0/24",
        parse_request(SplitMode::Hosts, "50").expect("Failed to parse request"),
    )
    .expect("Failed to split network");
    let by_subnets = split_network(
        "192.168.1.0/24",
        parse_request(SplitMode::Subnets, "4").expect("Failed to parse request"),
    )
    .expect("Failed to split network");

    assert_eq!(
        by_hosts, by_subnets,
        "50 hosts and 4 subnets should both land on four /26 blocks"
    );

    let rows = subnet_rows(&by_hosts).expect("Failed to derive rows");
    for row in &rows {
        assert!(
            row.usable_hosts >= 50,
            "Subnet {} holds {} hosts, fewer than requested",
            row.subnet,
            row.usable_hosts
        );
    }
}

#[test]
fn test_single_subnet_returns_base_unchanged() {
    let result = split_network("10.0.0.0/8", SplitRequest::SubnetCount(1))
        .expect("Failed to split network");

    assert_eq!(result.subnets, vec![Ipv4::new("10.0.0.0/8").unwrap()]);
    assert_eq!(result.new_prefix, 8, "Prefix should be unchanged");
}

#[test]
fn test_zero_host_count_is_a_validation_error() {
    let err = parse_request(SplitMode::Hosts, "0").unwrap_err();
    assert!(matches!(err, PlanError::Validation(_)), "Got {err}");
}

#[test]
fn test_subnets_are_sorted_and_partition_the_base() {
    let result = split_network("172.16.0.0/16", SplitRequest::SubnetCount(32))
        .expect("Failed to split network");

    for i in 1..result.subnets.len() {
        let prev = &result.subnets[i - 1];
        let curr = &result.subnets[i];
        assert!(
            prev.addr < curr.addr,
            "Subnets should be in ascending order: {prev:?} >= {curr:?}"
        );
    }

    check_partition(&result).expect("Children should exactly tile the base");
}

#[test]
fn test_host_bits_are_masked_down() {
    let result = split_network("192.168.1.200/24", SplitRequest::SubnetCount(2))
        .expect("Failed to split network");

    assert_eq!(
        result.base,
        Ipv4::new("192.168.1.0/24").unwrap(),
        "Host bits should be normalized away, not rejected"
    );
}

#[test]
fn test_infeasible_split_is_a_range_error() {
    // A /30 cannot produce 8 subnets inside 32 bits
    let err = split_network("10.0.0.0/30", SplitRequest::SubnetCount(8)).unwrap_err();
    assert!(matches!(err, PlanError::Range(_)), "Got {err}");

    // 1000 hosts per subnet need a /22, coarser than the /24 base
    let err = split_network("192.168.1.0/24", SplitRequest::HostCount(1000)).unwrap_err();
    assert!(matches!(err, PlanError::Range(_)), "Got {err}");
}

#[test]
fn test_malformed_network_is_a_parse_error() {
    let err = split_network("192.168.1/24", SplitRequest::SubnetCount(2)).unwrap_err();
    assert!(matches!(err, PlanError::Parse(_)), "Got {err}");
}

#[test]
fn test_tiny_children_report_no_usable_hosts() {
    let result = split_network("192.168.1.0/29", SplitRequest::SubnetCount(8))
        .expect("Failed to split network");
    assert_eq!(result.new_prefix, 32);

    let rows = subnet_rows(&result).expect("Failed to derive rows");
    for row in &rows {
        assert_eq!(row.usable_hosts, 0, "/32 children have no usable hosts");
        assert!(row.host_range().is_none());
    }
}

#[test]
fn test_repeated_calculation_is_identical() {
    let request = parse_request(SplitMode::Hosts, "500").expect("Failed to parse request");
    let first = split_network("10.1.0.0/16", request).expect("Failed to split network");
    let second = split_network("10.1.0.0/16", request).expect("Failed to split network");

    assert_eq!(first, second, "plan is a pure function of its inputs");
}
