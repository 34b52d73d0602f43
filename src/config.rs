//! Environment-backed configuration.
//!
//! Settings come from the process environment; main loads `.env` via
//! dotenv before anything reads them.

use crate::processing::DEFAULT_MAX_SUBNETS;

/// Environment variable overriding the enumeration cap.
pub const MAX_SUBNETS_ENV: &str = "SUBNET_PLANNER_MAX_SUBNETS";

/// Cap on how many child subnets one request may enumerate.
///
/// Reads [`MAX_SUBNETS_ENV`], falling back to [`DEFAULT_MAX_SUBNETS`] when
/// the variable is unset or unparsable.
pub fn max_subnets() -> u64 {
    match std::env::var(MAX_SUBNETS_ENV) {
        Ok(raw) => parse_limit(&raw).unwrap_or_else(|| {
            log::warn!("Ignoring unparsable {MAX_SUBNETS_ENV}={raw:?}");
            DEFAULT_MAX_SUBNETS
        }),
        Err(_) => DEFAULT_MAX_SUBNETS,
    }
}

fn parse_limit(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|limit| *limit > 0)
}
