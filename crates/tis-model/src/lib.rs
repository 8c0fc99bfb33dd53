//! Shared data model for the tabular import workspace.
//!
//! Plain data types passed between the ingest, mapping, validation, and
//! transform crates: the [`DataType`]/[`FileFormat`] enums, the
//! caller-defined [`SchemaDefinition`], per-column [`ColumnMapping`]s,
//! and the [`ImportResult`] outcome record.

pub mod enums;
pub mod mapping;
pub mod result;
pub mod schema;

pub use enums::{DataType, FileFormat};
pub use mapping::{ColumnMapping, TransformFn};
pub use result::ImportResult;
pub use schema::{ColumnSpec, SchemaDefinition};
