//! Spreadsheet loading through calamine.
//!
//! Worksheet cells are materialized as string columns; downstream type
//! inference decides what they hold. The first row of the selected
//! worksheet supplies the column names.

use std::path::Path;

use calamine::{Data, DataType as _, Reader, open_workbook_auto};
use polars::prelude::{DataFrame, IntoColumn, IntoSeries, StringChunked};

use tis_model::FileFormat;

use crate::error::{IngestError, Result};
use crate::loader::TableLoader;
use crate::options::LoadOptions;

/// Loader for `.xlsx` and `.xls` files.
pub struct ExcelLoader;

impl TableLoader for ExcelLoader {
    fn format(&self) -> FileFormat {
        FileFormat::Excel
    }

    fn load(&self, path: &Path, options: &LoadOptions) -> Result<DataFrame> {
        if !path.exists() {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let sheet_names = workbook.sheet_names().to_vec();
        let sheet_index = match &options.sheet {
            Some(name) => sheet_names.iter().position(|n| n == name).ok_or_else(|| {
                IngestError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: name.clone(),
                }
            })?,
            None => 0,
        };

        let range = workbook
            .worksheet_range_at(sheet_index)
            .ok_or_else(|| IngestError::NoWorksheet {
                path: path.to_path_buf(),
            })?
            .map_err(|e| IngestError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let mut rows = range.rows();
        let Some(header_row) = rows.next() else {
            return Ok(DataFrame::empty());
        };

        let headers: Vec<String> = header_row.iter().map(cell_to_header).collect();
        if headers.iter().any(String::is_empty) {
            return Err(IngestError::EmptyColumnName {
                path: path.to_path_buf(),
            });
        }

        let data_rows: Vec<&[Data]> = rows.collect();
        let columns = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let values: StringChunked = data_rows
                    .iter()
                    .map(|row| row.get(idx).and_then(cell_to_value))
                    .collect();
                values.with_name(header.as_str().into()).into_series().into_column()
            })
            .collect::<Vec<_>>();

        let df = DataFrame::new(columns)?;
        tracing::debug!(
            path = %path.display(),
            sheet = %sheet_names.get(sheet_index).map(String::as_str).unwrap_or(""),
            rows = df.height(),
            columns = df.width(),
            "loaded spreadsheet"
        );
        Ok(df)
    }
}

fn cell_to_header(cell: &Data) -> String {
    cell_to_value(cell).unwrap_or_default().trim().to_string()
}

fn cell_to_value(cell: &Data) -> Option<String> {
    if matches!(cell, Data::Empty) {
        return None;
    }
    Some(cell.as_string().unwrap_or_else(|| cell.to_string()))
}
