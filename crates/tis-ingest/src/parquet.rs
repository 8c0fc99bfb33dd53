//! Columnar-binary loading through the Polars Parquet reader.

use std::fs::File;
use std::path::Path;

use polars::prelude::{DataFrame, ParquetReader, SerReader};

use tis_model::FileFormat;

use crate::error::{IngestError, Result};
use crate::loader::TableLoader;
use crate::options::LoadOptions;

/// Loader for `.parquet` files.
pub struct ParquetLoader;

impl TableLoader for ParquetLoader {
    fn format(&self) -> FileFormat {
        FileFormat::Parquet
    }

    fn load(&self, path: &Path, options: &LoadOptions) -> Result<DataFrame> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let mut df = ParquetReader::new(file)
            .finish()
            .map_err(|e| IngestError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if let Some(n) = options.n_rows {
            df = df.head(Some(n));
        }

        tracing::debug!(
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded columnar binary file"
        );
        Ok(df)
    }
}
