//! Error taxonomy for the planner.

use thiserror::Error;

/// Errors a single calculation attempt can fail with.
///
/// Every variant is detected before or during planning and is terminal for
/// that attempt; the caller presents it and waits for corrected input.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Malformed network or address string.
    #[error("invalid network: {0}")]
    Parse(String),

    /// Non-positive or non-numeric count.
    #[error("invalid count: {0}")]
    Validation(String),

    /// The requested split cannot be satisfied within the base network.
    #[error("split not feasible: {0}")]
    Range(String),
}
