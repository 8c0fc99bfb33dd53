//! Mapping-set validation.
//!
//! Two checks run before any data is touched: every required schema
//! column must be covered by an included mapping, and no target column
//! may be claimed twice. Both produce report strings rather than
//! failures; an empty report means the mapping set is good to apply.

use std::collections::{BTreeMap, BTreeSet};

use tis_model::{ColumnMapping, SchemaDefinition};

/// Checks a mapping set against a schema.
///
/// Returns at most two error strings: one listing required schema
/// columns no included mapping targets, one listing target columns
/// claimed by more than one included mapping. Name lists are sorted so
/// the output is deterministic. Never fails, never panics.
pub fn validate_mappings(mappings: &[ColumnMapping], schema: &SchemaDefinition) -> Vec<String> {
    let mut errors = Vec::new();

    let included_targets: BTreeSet<&str> = mappings
        .iter()
        .filter(|m| m.include)
        .map(|m| m.target_column.as_str())
        .collect();

    let missing: Vec<String> = schema
        .required_columns()
        .into_iter()
        .filter(|required| !included_targets.contains(required.as_str()))
        .collect();
    if !missing.is_empty() {
        let mut sorted = missing;
        sorted.sort();
        errors.push(format!("Missing required columns: {}", sorted.join(", ")));
    }

    let mut target_counts: BTreeMap<&str, usize> = BTreeMap::new();
    for mapping in mappings {
        if mapping.include && !mapping.target_column.is_empty() {
            *target_counts.entry(mapping.target_column.as_str()).or_default() += 1;
        }
    }
    let duplicates: Vec<&str> = target_counts
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(name, _)| *name)
        .collect();
    if !duplicates.is_empty() {
        errors.push(format!(
            "Duplicate target columns: {}",
            duplicates.join(", ")
        ));
    }

    errors
}
