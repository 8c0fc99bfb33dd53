//! Structured-record loading through the Polars JSON reader.

use std::fs::File;
use std::path::Path;

use polars::prelude::{DataFrame, JsonReader, SerReader};

use tis_model::FileFormat;

use crate::error::{IngestError, Result};
use crate::loader::TableLoader;
use crate::options::LoadOptions;

/// Loader for `.json` files holding an array of records.
pub struct JsonLoader;

impl TableLoader for JsonLoader {
    fn format(&self) -> FileFormat {
        FileFormat::Json
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

        let mut df = JsonReader::new(file)
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
            "loaded structured record file"
        );
        Ok(df)
    }
}
