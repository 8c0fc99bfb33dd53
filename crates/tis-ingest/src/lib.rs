//! Tabular source adapters.
//!
//! This crate turns files of unknown shape into fully materialized
//! Polars DataFrames behind a small capability interface: each loader
//! answers [`TableLoader::can_load`] by file-name suffix and, when it
//! claims a file, reads it whole. The engine probes loaders in the
//! fixed order returned by [`default_loaders`] and invokes at most one
//! per call.

mod csv;
mod error;
mod excel;
mod json;
mod loader;
mod options;
mod parquet;

pub use csv::CsvLoader;
pub use error::{IngestError, Result};
pub use excel::ExcelLoader;
pub use json::JsonLoader;
pub use loader::{TableLoader, default_loaders};
pub use options::LoadOptions;
pub use parquet::ParquetLoader;
