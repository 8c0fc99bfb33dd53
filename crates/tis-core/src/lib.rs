//! Import engine for tabular files of unknown shape.
//!
//! The [`ImportEngine`] composes the sibling crates into the
//! end-to-end workflow:
//!
//! ```ignore
//! use tis_core::ImportEngine;
//! use tis_ingest::LoadOptions;
//! use tis_model::{DataType, SchemaDefinition};
//!
//! let mut schema = SchemaDefinition::new();
//! schema.add_column("full_name", DataType::String, true, "contact name");
//!
//! let engine = ImportEngine::with_schema(schema);
//! let (df, errors) = engine.load_file("contacts.csv".as_ref(), &LoadOptions::default());
//! let df = df.expect("load");
//!
//! let mappings = engine.suggest_mappings(&df);
//! assert!(engine.validate_mappings(&mappings).is_empty());
//! let result = engine.process_data(&df, &mappings);
//! assert!(result.success);
//! ```

mod engine;

pub use engine::ImportEngine;

// The façade's vocabulary, re-exported so most callers only need this
// crate and tis-model.
pub use tis_ingest::LoadOptions;
pub use tis_model::{ColumnMapping, DataType, ImportResult, SchemaDefinition};
