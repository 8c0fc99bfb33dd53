//! The type-conversion table.
//!
//! All conversions are non-strict: a value that cannot be converted
//! becomes null. A conversion that fails wholesale (incompatible
//! storage, not bad values) surfaces as an error so the applier can
//! fall back to the uncoerced column.

use chrono::Timelike;
use polars::prelude::{
    BooleanChunked, DataType as PolarsType, Int32Chunked, Int64Chunked, IntoSeries, PolarsResult,
    Series, TimeUnit,
};

use tis_common::{parse_date, parse_datetime, parse_time};
use tis_model::DataType;

/// Coerces a column to the requested semantic type.
pub fn coerce_series(series: &Series, target: DataType) -> PolarsResult<Series> {
    match target {
        DataType::Auto => Ok(series.clone()),
        DataType::String => series.cast(&PolarsType::String),
        DataType::Integer => series.cast(&PolarsType::Int64),
        DataType::Float => series.cast(&PolarsType::Float64),
        DataType::Boolean => to_boolean(series),
        DataType::Datetime => to_datetime(series),
        DataType::Date => to_date(series),
        DataType::Time => to_time(series),
    }
}

/// Lowercased text against the accepted truthy literals; everything
/// else is false, nulls stay null.
fn to_boolean(series: &Series) -> PolarsResult<Series> {
    if series.dtype() == &PolarsType::Boolean {
        return Ok(series.clone());
    }
    let text = series.cast(&PolarsType::String)?;
    let ca = text.str()?;
    let booleans: BooleanChunked = ca
        .into_iter()
        .map(|opt| {
            opt.map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes" | "y"))
        })
        .collect();
    Ok(booleans.with_name(series.name().clone()).into_series())
}

fn to_datetime(series: &Series) -> PolarsResult<Series> {
    match series.dtype() {
        PolarsType::Datetime(_, _) => Ok(series.clone()),
        PolarsType::String => {
            let ca = series.str()?;
            let micros: Int64Chunked = ca
                .into_iter()
                .map(|opt| {
                    opt.and_then(parse_datetime)
                        .map(|dt| dt.and_utc().timestamp_micros())
                })
                .collect();
            Ok(micros
                .with_name(series.name().clone())
                .into_datetime(TimeUnit::Microseconds, None)
                .into_series())
        }
        _ => series.cast(&PolarsType::Datetime(TimeUnit::Microseconds, None)),
    }
}

fn to_date(series: &Series) -> PolarsResult<Series> {
    match series.dtype() {
        PolarsType::Date => Ok(series.clone()),
        PolarsType::String => {
            let ca = series.str()?;
            let days: Int32Chunked = ca
                .into_iter()
                .map(|opt| {
                    // NaiveDate::default() is the Unix epoch.
                    opt.and_then(parse_date)
                        .map(|d| d.signed_duration_since(chrono::NaiveDate::default()).num_days() as i32)
                })
                .collect();
            Ok(days
                .with_name(series.name().clone())
                .into_date()
                .into_series())
        }
        _ => series.cast(&PolarsType::Date),
    }
}

fn to_time(series: &Series) -> PolarsResult<Series> {
    match series.dtype() {
        PolarsType::Time => Ok(series.clone()),
        PolarsType::String => {
            let ca = series.str()?;
            let nanos: Int64Chunked = ca
                .into_iter()
                .map(|opt| {
                    opt.and_then(parse_time).map(|t| {
                        i64::from(t.num_seconds_from_midnight()) * 1_000_000_000
                            + i64::from(t.nanosecond())
                    })
                })
                .collect();
            Ok(nanos
                .with_name(series.name().clone())
                .into_time()
                .into_series())
        }
        _ => series.cast(&PolarsType::Time),
    }
}
