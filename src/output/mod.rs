//! Output formatting for split results.
//!
//! This module handles rendering a calculation for the user:
//! - [`terminal`] - aligned table with a summary header
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON report output

mod csv;
mod json;
mod terminal;

pub use csv::print_csv;
pub use json::print_json;
pub use terminal::{format_field, print_table};
