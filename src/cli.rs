//! CLI argument definitions and raw input validation.
//!
//! The planner only ever sees parsed, validated values; everything the
//! user typed is checked here first.

use crate::error::PlanError;
use crate::models::SplitRequest;
use clap::{Parser, ValueEnum};
use regex::Regex;
use std::sync::OnceLock;

/// Split an IPv4 CIDR block into equal-sized subnets
#[derive(Parser, Debug)]
#[command(name = "subnet-planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base network in CIDR notation, e.g. 192.168.1.0/24
    pub network: String,

    /// Requested number of subnets or hosts, depending on --mode
    pub count: String,

    /// Split by subnet count or by hosts per subnet
    #[arg(short, long, value_enum, default_value_t = SplitMode::Subnets)]
    pub mode: SplitMode,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Which quantity the count applies to.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMode {
    /// At least this many equal subnets
    Subnets,
    /// At least this many usable hosts per subnet
    Hosts,
}

/// How the result is rendered.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned table with a summary header
    Table,
    /// CSV rows
    Csv,
    /// JSON report
    Json,
}

/// Regex accepting plain unsigned integers only.
static COUNT_REGEX: OnceLock<Regex> = OnceLock::new();

fn count_regex() -> &'static Regex {
    COUNT_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

/// Build a [`SplitRequest`] from the raw mode and count text.
pub fn parse_request(mode: SplitMode, raw_count: &str) -> Result<SplitRequest, PlanError> {
    let count = parse_count(raw_count)?;
    let request = match mode {
        SplitMode::Subnets => SplitRequest::SubnetCount(count),
        SplitMode::Hosts => SplitRequest::HostCount(count),
    };
    request.validate()?;
    Ok(request)
}

/// Parse the raw count text, rejecting anything but a plain integer.
fn parse_count(raw: &str) -> Result<u64, PlanError> {
    let raw = raw.trim();
    if !count_regex().is_match(raw) {
        return Err(PlanError::Validation(format!(
            "count must be a positive integer, got {raw:?}"
        )));
    }
    raw.parse::<u64>()
        .map_err(|_| PlanError::Validation(format!("count is out of range: {raw}")))
}
