use std::path::Path;

use polars::prelude::DataFrame;

use tis_model::FileFormat;

use crate::error::Result;
use crate::options::LoadOptions;
use crate::{CsvLoader, ExcelLoader, JsonLoader, ParquetLoader};

/// Capability interface for tabular source adapters.
///
/// `can_load` must never fail; it answers false for anything the loader
/// does not recognize, including paths without a retrievable file name.
/// `load` may fail and reports through [`crate::IngestError`].
pub trait TableLoader: Send + Sync {
    /// The format this loader handles. Classification only.
    fn format(&self) -> FileFormat;

    /// Whether this loader recognizes the file, by case-insensitive
    /// file-name suffix.
    fn can_load(&self, path: &Path) -> bool {
        FileFormat::from_path(path) == Some(self.format())
    }

    /// Loads the file into a fully materialized DataFrame.
    fn load(&self, path: &Path, options: &LoadOptions) -> Result<DataFrame>;
}

/// The built-in loaders in their fixed registration order: delimited
/// text, spreadsheet, structured record, columnar binary. Callers probe
/// `can_load` front to back and use the first claimant.
pub fn default_loaders() -> Vec<Box<dyn TableLoader>> {
    vec![
        Box::new(CsvLoader),
        Box::new(ExcelLoader),
        Box::new(JsonLoader),
        Box::new(ParquetLoader),
    ]
}
