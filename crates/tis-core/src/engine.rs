//! The import engine façade.

use std::path::Path;

use polars::prelude::DataFrame;

use tis_ingest::{LoadOptions, TableLoader, default_loaders};
use tis_model::{ColumnMapping, ImportResult, SchemaDefinition};

/// Orchestrates the end-to-end import workflow: load a file, suggest
/// mappings, validate them, apply them.
///
/// Each engine owns its schema and loader registry; engines share
/// nothing, so independent callers can run imports concurrently with
/// their own instances.
pub struct ImportEngine {
    schema: SchemaDefinition,
    loaders: Vec<Box<dyn TableLoader>>,
}

impl ImportEngine {
    /// An engine with an empty schema: suggestions fall back to the
    /// synonym table and name cleaning, and validation has nothing to
    /// require.
    pub fn new() -> Self {
        Self::with_schema(SchemaDefinition::new())
    }

    /// An engine that maps into the given target schema.
    pub fn with_schema(schema: SchemaDefinition) -> Self {
        Self {
            schema,
            loaders: default_loaders(),
        }
    }

    pub fn schema(&self) -> &SchemaDefinition {
        &self.schema
    }

    pub fn schema_mut(&mut self) -> &mut SchemaDefinition {
        &mut self.schema
    }

    /// Loads a tabular file through the first loader that claims it.
    ///
    /// At most one loader runs per call. Failures come back through the
    /// error list, never as a panic or an `Err`: a load error from the
    /// claiming loader produces one message, an unclaimed file produces
    /// "Unsupported file format".
    pub fn load_file(&self, path: &Path, options: &LoadOptions) -> (Option<DataFrame>, Vec<String>) {
        for loader in &self.loaders {
            if loader.can_load(path) {
                return match loader.load(path, options) {
                    Ok(df) => (Some(df), Vec::new()),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "file load failed");
                        (None, vec![format!("Failed to load file: {e}")])
                    }
                };
            }
        }
        (None, vec!["Unsupported file format".to_string()])
    }

    /// Proposes one mapping per column of the frame.
    pub fn suggest_mappings(&self, df: &DataFrame) -> Vec<ColumnMapping> {
        tis_map::suggest_mappings(df, &self.schema)
    }

    /// Checks a mapping set against the engine's schema.
    pub fn validate_mappings(&self, mappings: &[ColumnMapping]) -> Vec<String> {
        tis_validate::validate_mappings(mappings, &self.schema)
    }

    /// Validates, then applies. Validation errors short-circuit: the
    /// applier never runs on a mapping set that failed validation.
    pub fn process_data(&self, df: &DataFrame, mappings: &[ColumnMapping]) -> ImportResult {
        let validation_errors = self.validate_mappings(mappings);
        if !validation_errors.is_empty() {
            tracing::debug!(
                errors = validation_errors.len(),
                "mapping validation failed; skipping apply"
            );
            return ImportResult::failure(validation_errors);
        }

        tis_transform::apply_mappings(df, mappings)
    }
}

impl Default for ImportEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_engine_has_empty_schema() {
        let engine = ImportEngine::new();
        assert!(engine.schema().is_empty());
    }

    #[test]
    fn engines_own_independent_schemas() {
        let mut a = ImportEngine::new();
        let b = ImportEngine::new();
        a.schema_mut()
            .add_column("id", tis_model::DataType::Integer, true, "");

        assert_eq!(a.schema().len(), 1);
        assert!(b.schema().is_empty());
    }

    #[test]
    fn unsupported_format_reported_as_single_error() {
        let engine = ImportEngine::new();
        let (df, errors) = engine.load_file(Path::new("data.unsupported"), &LoadOptions::default());

        assert!(df.is_none());
        assert_eq!(errors, vec!["Unsupported file format".to_string()]);
    }

    #[test]
    fn load_failure_reported_as_single_error() {
        let engine = ImportEngine::new();
        let (df, errors) = engine.load_file(Path::new("/no/such/data.csv"), &LoadOptions::default());

        assert!(df.is_none());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Failed to load file:"));
    }
}
