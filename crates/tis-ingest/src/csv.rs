//! Delimited-text loading through the Polars CSV reader.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use tis_model::FileFormat;

use crate::error::{IngestError, Result};
use crate::loader::TableLoader;
use crate::options::LoadOptions;

/// Loader for `.csv` files.
pub struct CsvLoader;

impl TableLoader for CsvLoader {
    fn format(&self) -> FileFormat {
        FileFormat::Csv
    }

    fn load(&self, path: &Path, options: &LoadOptions) -> Result<DataFrame> {
        if !path.exists() {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let delimiter = options.delimiter;
        let df = CsvReadOptions::default()
            .with_has_header(options.has_header)
            .with_n_rows(options.n_rows)
            .with_infer_schema_length(Some(100))
            .map_parse_options(|parse| match delimiter {
                Some(sep) => parse.with_separator(sep),
                None => parse,
            })
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .map_err(|e| IngestError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
            .finish()
            .map_err(|e| IngestError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::debug!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded delimited text file"
        );
        Ok(df)
    }
}
