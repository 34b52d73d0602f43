//! Subnet split calculation.
//!
//! This module contains the business logic of the planner:
//! - [`planner`] - prefix selection and child enumeration
//! - [`rows`] - per-subnet display row derivation

mod planner;
mod rows;

// Re-export public functions
pub use planner::{
    plan, plan_with_limit, prefix_for_host_count, prefix_for_subnet_count, DEFAULT_MAX_SUBNETS,
};
pub use rows::subnet_rows;
