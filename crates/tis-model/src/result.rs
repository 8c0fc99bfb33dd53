use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use crate::mapping::ColumnMapping;

/// Outcome of a processing run.
///
/// Invariants: `success` implies `data` is present and `errors` is
/// empty; a failed result never carries data. The record is built once
/// and returned; nothing mutates it afterwards.
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    pub success: bool,
    pub data: Option<DataFrame>,
    pub mappings: Vec<ColumnMapping>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl ImportResult {
    /// A failed result carrying only errors.
    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors,
            ..Self::default()
        }
    }
}
