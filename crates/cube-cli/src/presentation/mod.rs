//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: it turns command results into text and
//! never touches the food list.

pub mod food_table;
pub mod tables;

pub use food_table::{render_foods, render_result};
pub use tables::{format_optional, separator, truncate_string};
