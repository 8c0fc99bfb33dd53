//! Schema-aware target-name suggestion and whole-table mapping
//! proposals.

use polars::prelude::DataFrame;

use tis_model::{ColumnMapping, SchemaDefinition};

use crate::infer::infer_column_type;
use crate::similarity::similarity;
use crate::synonyms::match_synonym;

/// A schema name must score strictly above this to claim a source
/// column.
pub const SIMILARITY_THRESHOLD: f64 = 0.6;

/// Proposes a target column name for one source column.
///
/// Schema names are scanned in definition order and the first one whose
/// similarity clears the threshold wins; there is no best-of-all scan.
/// Failing that, the synonym table gets a shot, and as a last resort
/// the source name is cleaned into a conventional column name.
pub fn suggest_target(source_name: &str, schema: &SchemaDefinition) -> String {
    let normalized = source_name.trim().to_lowercase();

    for candidate in schema.column_names() {
        if similarity(&normalized, &candidate.to_lowercase()) > SIMILARITY_THRESHOLD {
            return candidate.to_string();
        }
    }

    if let Some(canonical) = match_synonym(&normalized) {
        return canonical.to_string();
    }

    clean_column_name(source_name)
}

/// Proposes one mapping per input column, preserving column order.
///
/// Every proposal is included by default and carries the inferred data
/// type; `required` is left false regardless of the schema, since
/// requirement enforcement reads from the schema itself.
pub fn suggest_mappings(df: &DataFrame, schema: &SchemaDefinition) -> Vec<ColumnMapping> {
    let mappings: Vec<ColumnMapping> = df
        .get_columns()
        .iter()
        .map(|column| {
            let source = column.name().as_str();
            let target = suggest_target(source, schema);
            let data_type = infer_column_type(column.as_materialized_series());
            ColumnMapping::new(source, target).with_data_type(data_type)
        })
        .collect();

    tracing::debug!(
        columns = df.width(),
        suggestions = mappings.len(),
        "suggested column mappings"
    );
    mappings
}

/// Cleans a raw header into a conventional column name: drops anything
/// that is not alphanumeric or whitespace, collapses whitespace runs to
/// single underscores, lowercases.
fn clean_column_name(raw: &str) -> String {
    let kept: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;
    use tis_model::DataType;

    fn contact_schema() -> SchemaDefinition {
        let mut schema = SchemaDefinition::new();
        schema.add_column("full_name", DataType::String, true, "");
        schema.add_column("email_address", DataType::String, true, "");
        schema.add_column("age", DataType::Integer, false, "");
        schema
    }

    #[test]
    fn schema_match_beats_synonyms() {
        let schema = contact_schema();
        // "name" is a substring of "full_name": 0.8 > 0.6.
        assert_eq!(suggest_target("name", &schema), "full_name");
        assert_eq!(suggest_target("email", &schema), "email_address");
        assert_eq!(suggest_target("AGE", &schema), "age");
    }

    #[test]
    fn first_clearing_schema_name_wins() {
        let mut schema = SchemaDefinition::new();
        schema.add_column("email_address", DataType::String, false, "");
        schema.add_column("email", DataType::String, false, "");
        // Both clear the threshold; definition order decides.
        assert_eq!(suggest_target("email", &schema), "email_address");
    }

    #[test]
    fn synonym_fallback_with_empty_schema() {
        let schema = SchemaDefinition::new();
        assert_eq!(suggest_target("e_mail", &schema), "email");
        assert_eq!(suggest_target("phone_number", &schema), "phone");
        assert_eq!(suggest_target("FULL_NAME", &schema), "name");
    }

    #[test]
    fn cleaning_fallback() {
        let schema = SchemaDefinition::new();
        assert_eq!(suggest_target("Order Total!", &schema), "order_total");
    }

    #[test]
    fn clean_column_name_cases() {
        assert_eq!(clean_column_name("Test Column"), "test_column");
        assert_eq!(clean_column_name("Test-Column!"), "testcolumn");
        assert_eq!(clean_column_name("  Multiple   Spaces  "), "multiple_spaces");
        assert_eq!(clean_column_name("UPPERCASE"), "uppercase");
    }

    #[test]
    fn suggest_mappings_one_per_column_in_order() {
        let frame = df!(
            "name" => ["Alice", "Bob", "Charlie"],
            "email" => ["a@x.com", "b@x.com", "c@x.com"],
            "age" => [30i64, 25, 35],
        )
        .unwrap();
        let mappings = suggest_mappings(&frame, &contact_schema());

        assert_eq!(mappings.len(), 3);
        let sources: Vec<&str> = mappings.iter().map(|m| m.source_column.as_str()).collect();
        assert_eq!(sources, vec!["name", "email", "age"]);
        assert!(mappings.iter().all(|m| m.include));
        assert!(mappings.iter().all(|m| !m.required));
        assert_eq!(mappings[2].data_type, DataType::Integer);
    }

    #[test]
    fn suggest_mappings_is_idempotent() {
        let frame = df!(
            "name" => ["Alice"],
            "Signup Date" => ["2024-02-01"],
        )
        .unwrap();
        let schema = contact_schema();

        let first = suggest_mappings(&frame, &schema);
        let second = suggest_mappings(&frame, &schema);
        assert_eq!(first, second);
    }

    #[test]
    fn suggest_mappings_empty_frame() {
        let frame = DataFrame::empty();
        let mappings = suggest_mappings(&frame, &contact_schema());
        assert!(mappings.is_empty());
    }
}
