//! Polars `AnyValue` utility functions.
//!
//! Helpers for working with `AnyValue` cells: string rendering for
//! transform callbacks and non-strict numeric parsing shared by type
//! inference.

use polars::prelude::AnyValue;

/// Converts an `AnyValue` to its `String` representation.
///
/// Nulls render as the empty string; floats drop trailing zeros.
pub fn any_to_string(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(*v)),
        AnyValue::Float64(v) => format_numeric(*v),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty input.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses a string as `i64`, returning `None` for invalid or empty input.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_to_string_null_is_empty() {
        assert_eq!(any_to_string(&AnyValue::Null), "");
    }

    #[test]
    fn any_to_string_numbers() {
        assert_eq!(any_to_string(&AnyValue::Int64(-100)), "-100");
        assert_eq!(any_to_string(&AnyValue::Float64(1.50)), "1.5");
        assert_eq!(any_to_string(&AnyValue::Float64(1.0)), "1");
    }

    #[test]
    fn any_to_string_text_and_bool() {
        assert_eq!(any_to_string(&AnyValue::String("hello")), "hello");
        assert_eq!(any_to_string(&AnyValue::Boolean(true)), "true");
    }

    #[test]
    fn parse_f64_cases() {
        assert_eq!(parse_f64("3.14"), Some(3.14));
        assert_eq!(parse_f64("  2 "), Some(2.0));
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("abc"), None);
    }

    #[test]
    fn parse_i64_cases() {
        assert_eq!(parse_i64("42"), Some(42));
        assert_eq!(parse_i64("4.2"), None);
        assert_eq!(parse_i64(""), None);
    }
}
