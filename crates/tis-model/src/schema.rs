use serde::{Deserialize, Serialize};

use crate::enums::DataType;

/// Expectations for a single target column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub data_type: DataType,
    pub required: bool,
    pub description: String,
}

/// The target schema an import maps into.
///
/// Columns keep their definition order: the matcher scans them
/// first-to-last and takes the first name that clears its similarity
/// threshold, so order is part of the contract. `add_column` overwrites
/// an existing column in place without moving it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    columns: Vec<(String, ColumnSpec)>,
}

impl SchemaDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column, or overwrites the spec of an existing one by name.
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        data_type: DataType,
        required: bool,
        description: impl Into<String>,
    ) {
        let name = name.into();
        let spec = ColumnSpec {
            data_type,
            required,
            description: description.into(),
        };
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = spec,
            None => self.columns.push((name, spec)),
        }
    }

    /// Looks up a column spec by exact name.
    pub fn get(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    /// Column names in definition order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Names of columns marked required, in definition order.
    pub fn required_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|(_, spec)| spec.required)
            .map(|(n, _)| n.clone())
            .collect()
    }

    /// Names of columns not marked required, in definition order.
    pub fn optional_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|(_, spec)| !spec.required)
            .map(|(n, _)| n.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
