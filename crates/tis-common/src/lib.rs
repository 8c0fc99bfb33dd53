//! Shared helpers used across the import workspace.

pub mod datetime;
pub mod value;

pub use datetime::{parse_date, parse_datetime, parse_time};
pub use value::{any_to_string, format_numeric, parse_f64, parse_i64};
