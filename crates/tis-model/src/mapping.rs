use std::fmt;
use std::sync::Arc;

use polars::prelude::AnyValue;

use crate::enums::DataType;

/// Per-cell transform applied after type coercion.
///
/// Invoked for non-null values only; nulls pass through untouched. The
/// output column is always string-typed. Errors are reported as
/// warnings by the applier, which then falls back to the untransformed
/// column.
pub type TransformFn = Arc<dyn Fn(&AnyValue<'_>) -> anyhow::Result<String> + Send + Sync>;

/// One proposed or finalized correspondence between a source column and
/// a target column.
///
/// `required` and `validation_rules` are carried for downstream
/// consumers; nothing in the engine reads them. Requirement enforcement
/// comes from the schema, not this flag.
#[derive(Clone)]
pub struct ColumnMapping {
    pub source_column: String,
    pub target_column: String,
    pub data_type: DataType,
    pub include: bool,
    pub required: bool,
    pub validation_rules: Vec<String>,
    pub transformation_func: Option<TransformFn>,
}

impl ColumnMapping {
    pub fn new(source_column: impl Into<String>, target_column: impl Into<String>) -> Self {
        Self {
            source_column: source_column.into(),
            target_column: target_column.into(),
            data_type: DataType::Auto,
            include: true,
            required: false,
            validation_rules: Vec::new(),
            transformation_func: None,
        }
    }

    pub fn with_data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    pub fn with_include(mut self, include: bool) -> Self {
        self.include = include;
        self
    }

    pub fn with_transform(mut self, func: TransformFn) -> Self {
        self.transformation_func = Some(func);
        self
    }
}

impl fmt::Debug for ColumnMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnMapping")
            .field("source_column", &self.source_column)
            .field("target_column", &self.target_column)
            .field("data_type", &self.data_type)
            .field("include", &self.include)
            .field("required", &self.required)
            .field("validation_rules", &self.validation_rules)
            .field("transformation_func", &self.transformation_func.is_some())
            .finish()
    }
}

impl PartialEq for ColumnMapping {
    /// Transform functions compare by presence; closures have no
    /// useful equality.
    fn eq(&self, other: &Self) -> bool {
        self.source_column == other.source_column
            && self.target_column == other.target_column
            && self.data_type == other.data_type
            && self.include == other.include
            && self.required == other.required
            && self.validation_rules == other.validation_rules
            && self.transformation_func.is_some() == other.transformation_func.is_some()
    }
}
