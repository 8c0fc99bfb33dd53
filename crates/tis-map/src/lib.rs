//! Column type inference and schema-aware mapping suggestions.
//!
//! Given a loaded DataFrame and a caller-defined target schema, this
//! crate proposes one [`ColumnMapping`](tis_model::ColumnMapping) per
//! source column: a target name from schema similarity, a fixed synonym
//! table, or a cleaned-up source name, plus an inferred semantic type.

pub mod infer;
pub mod matcher;
pub mod similarity;
pub mod synonyms;

pub use infer::{SAMPLE_SIZE, infer_column_type};
pub use matcher::{SIMILARITY_THRESHOLD, suggest_mappings, suggest_target};
pub use similarity::similarity;
pub use synonyms::{SYNONYM_GROUPS, match_synonym};
