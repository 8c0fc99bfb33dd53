/// Configuration bag passed through to whichever loader claims a file.
///
/// Recognized fields are adapter-specific; loaders ignore the rest:
/// - CSV: `has_header`, `delimiter`, `n_rows`
/// - Excel: `sheet`
/// - JSON / Parquet: `n_rows`
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Whether the first row carries column names. Defaults to true.
    pub has_header: bool,
    /// Field separator for delimited text. Defaults to the reader's own
    /// default (comma).
    pub delimiter: Option<u8>,
    /// Worksheet name for spreadsheets. Defaults to the first sheet.
    pub sheet: Option<String>,
    /// Cap on the number of data rows read.
    pub n_rows: Option<usize>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: None,
            sheet: None,
            n_rows: None,
        }
    }
}

impl LoadOptions {
    pub fn with_has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    pub fn with_n_rows(mut self, n_rows: usize) -> Self {
        self.n_rows = Some(n_rows);
        self
    }
}
