use std::path::Path;

use serde::{Deserialize, Serialize};

/// Semantic data types a mapped column can be coerced to.
///
/// `Auto` means "do not coerce" - the column keeps whatever type the
/// source adapter produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    Auto,
    String,
    Integer,
    Float,
    Boolean,
    Datetime,
    Date,
    Time,
}

impl DataType {
    /// Returns the lowercase wire name of this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Datetime => "datetime",
            Self::Date => "date",
            Self::Time => "time",
        }
    }
}

/// File formats recognized by the adapter layer.
///
/// Used for classification only; adapter selection goes through
/// `can_load` probing, not through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    Csv,
    Excel,
    Json,
    Parquet,
}

impl FileFormat {
    /// Classifies a path by its file-name suffix, case-insensitively.
    ///
    /// Returns `None` for paths without a recognizable extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xls" => Some(Self::Excel),
            "json" => Some(Self::Json),
            "parquet" => Some(Self::Parquet),
            _ => None,
        }
    }
}
