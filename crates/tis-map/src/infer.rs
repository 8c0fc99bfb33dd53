//! Statistical column type inference.
//!
//! Strongly typed storage classifies directly from its dtype. Text
//! columns get probed: a sample of values is tested first as datetimes,
//! then as numbers, before falling back to plain strings.

use polars::prelude::{DataType as PolarsType, Series};

use tis_common::{parse_datetime, parse_f64};
use tis_model::DataType;

/// How many leading non-null values a text probe examines.
pub const SAMPLE_SIZE: usize = 100;

/// Share of the sample that must parse numerically for a text column to
/// classify as Float.
const NUMERIC_SAMPLE_RATIO: f64 = 0.8;

/// Decides the semantic type of one column.
///
/// Never fails; anything unrecognized degrades to `String`. Date and
/// datetime storage both classify as `Datetime` - `Date` stays
/// reachable only through an explicit mapping.
pub fn infer_column_type(series: &Series) -> DataType {
    match series.dtype() {
        PolarsType::Int8
        | PolarsType::Int16
        | PolarsType::Int32
        | PolarsType::Int64
        | PolarsType::UInt8
        | PolarsType::UInt16
        | PolarsType::UInt32
        | PolarsType::UInt64 => DataType::Integer,
        PolarsType::Float32 | PolarsType::Float64 => DataType::Float,
        PolarsType::Boolean => DataType::Boolean,
        PolarsType::Date | PolarsType::Datetime(_, _) => DataType::Datetime,
        PolarsType::Time => DataType::Time,
        PolarsType::String => infer_from_text(series),
        _ => DataType::String,
    }
}

fn infer_from_text(series: &Series) -> DataType {
    let Ok(ca) = series.str() else {
        return DataType::String;
    };

    let sample: Vec<&str> = ca.into_iter().flatten().take(SAMPLE_SIZE).collect();

    // An empty or all-null sample vacuously passes this probe, so empty
    // text columns classify as Datetime. Documented behavior.
    if sample.iter().all(|v| parse_datetime(v).is_some()) {
        return DataType::Datetime;
    }

    let numeric = sample.iter().filter(|v| parse_f64(v).is_some()).count();
    if (numeric as f64) > sample.len() as f64 * NUMERIC_SAMPLE_RATIO {
        return DataType::Float;
    }

    DataType::String
}
