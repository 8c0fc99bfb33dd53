//! Mapping application.
//!
//! Takes a loaded frame and a validated mapping set and produces the
//! output frame: select, coerce, transform, rename. Failures accumulate
//! per mapping instead of aborting the run; the result is only an
//! overall failure when nothing at all could be built.

use std::collections::BTreeMap;

use polars::prelude::{AnyValue, DataFrame, IntoColumn, IntoSeries, Series, StringChunked};

use tis_model::{ColumnMapping, DataType, ImportResult, TransformFn};

use crate::coerce::coerce_series;

/// Applies a mapping set to a frame.
///
/// Only included mappings with a non-empty target participate. A
/// missing source column drops that one mapping with an error; a failed
/// transform downgrades to the untransformed column with a warning; a
/// failed coercion silently keeps the source values. Duplicate targets
/// are not checked here - that is the validator's job - and surface as
/// an assembly failure if they slip through.
pub fn apply_mappings(df: &DataFrame, mappings: &[ColumnMapping]) -> ImportResult {
    let active: Vec<&ColumnMapping> = mappings
        .iter()
        .filter(|m| m.include && !m.target_column.is_empty())
        .collect();

    if active.is_empty() {
        return ImportResult::failure(vec!["No column mappings provided".to_string()]);
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut built: Vec<Series> = Vec::new();

    for mapping in &active {
        let Ok(column) = df.column(&mapping.source_column) else {
            errors.push(format!(
                "Source column '{}' not found",
                mapping.source_column
            ));
            continue;
        };
        let mut series = column.as_materialized_series().clone();

        if mapping.data_type != DataType::Auto {
            // A wholesale coercion failure keeps the source values.
            if let Ok(coerced) = coerce_series(&series, mapping.data_type) {
                series = coerced;
            }
        }

        if let Some(func) = &mapping.transformation_func {
            match apply_transform(&series, func) {
                Ok(transformed) => series = transformed,
                Err(e) => warnings.push(format!(
                    "Transformation failed for {}: {e}",
                    mapping.source_column
                )),
            }
        }

        built.push(series.with_name(mapping.target_column.as_str().into()));
    }

    if built.is_empty() {
        return ImportResult {
            success: false,
            data: None,
            mappings: Vec::new(),
            errors,
            warnings,
            metadata: BTreeMap::new(),
        };
    }

    let columns = built.into_iter().map(IntoColumn::into_column).collect();
    match DataFrame::new(columns) {
        Ok(data) => {
            // Per-mapping errors on a partially successful run move to
            // warnings: a successful result never carries errors.
            warnings.extend(errors);

            let mut metadata = BTreeMap::new();
            metadata.insert(
                "original_rows".to_string(),
                serde_json::Value::from(df.height() as u64),
            );
            metadata.insert(
                "original_columns".to_string(),
                serde_json::Value::from(df.width() as u64),
            );
            metadata.insert(
                "processed_rows".to_string(),
                serde_json::Value::from(data.height() as u64),
            );
            metadata.insert(
                "processed_columns".to_string(),
                serde_json::Value::from(data.width() as u64),
            );
            metadata.insert(
                "columns_mapped".to_string(),
                serde_json::Value::from(active.len() as u64),
            );

            tracing::debug!(
                rows = data.height(),
                columns = data.width(),
                warnings = warnings.len(),
                "applied column mappings"
            );

            ImportResult {
                success: true,
                data: Some(data),
                mappings: active.into_iter().cloned().collect(),
                errors: Vec::new(),
                warnings,
                metadata,
            }
        }
        Err(e) => {
            errors.push(format!("Column transformation failed: {e}"));
            ImportResult {
                success: false,
                data: None,
                mappings: Vec::new(),
                errors,
                warnings,
                metadata: BTreeMap::new(),
            }
        }
    }
}

/// Runs the per-cell transform over non-null values, producing a
/// string-typed column. Nulls pass through. The first failing cell
/// aborts the transform; the caller keeps the untransformed column.
fn apply_transform(series: &Series, func: &TransformFn) -> anyhow::Result<Series> {
    let mut values: Vec<Option<String>> = Vec::with_capacity(series.len());
    for value in series.iter() {
        match value {
            AnyValue::Null => values.push(None),
            other => values.push(Some(func(&other)?)),
        }
    }
    let ca: StringChunked = values.into_iter().collect();
    Ok(ca.with_name(series.name().clone()).into_series())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use polars::prelude::df;
    use tis_common::any_to_string;

    fn people() -> DataFrame {
        df!(
            "name" => ["Alice", "Bob", "Charlie"],
            "email" => ["a@x.com", "b@x.com", "c@x.com"],
            "age" => ["30", "25", "35"],
            "city" => ["Oslo", "Berlin", "Lisbon"],
        )
        .unwrap()
    }

    #[test]
    fn renames_and_selects_included_mappings() {
        let mappings = vec![
            ColumnMapping::new("name", "full_name"),
            ColumnMapping::new("email", "email_address"),
            ColumnMapping::new("age", "age").with_data_type(DataType::Integer),
            ColumnMapping::new("city", "location").with_include(false),
        ];

        let result = apply_mappings(&people(), &mappings);
        assert!(result.success);
        assert!(result.errors.is_empty());

        let data = result.data.unwrap();
        let names: Vec<&str> = data.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["full_name", "email_address", "age"]);
        assert_eq!(data.height(), 3);
        assert_eq!(data.column("age").unwrap().dtype().to_string(), "i64");
        assert_eq!(result.mappings.len(), 3);
    }

    #[test]
    fn auto_mappings_round_trip_values() {
        let source = people();
        let mappings = vec![
            ColumnMapping::new("name", "person"),
            ColumnMapping::new("age", "age"),
        ];

        let result = apply_mappings(&source, &mappings);
        let data = result.data.unwrap();

        assert!(
            data.column("person")
                .unwrap()
                .as_materialized_series()
                .equals(&source.column("name").unwrap().as_materialized_series().clone().with_name("person".into()))
        );
        assert!(data.column("city").is_err());
    }

    #[test]
    fn empty_mapping_set_fails() {
        let result = apply_mappings(&people(), &[]);
        assert!(!result.success);
        assert!(result.data.is_none());
        assert_eq!(result.errors, vec!["No column mappings provided".to_string()]);
    }

    #[test]
    fn excluded_only_mapping_set_fails_the_same_way() {
        let mappings = vec![ColumnMapping::new("name", "full_name").with_include(false)];
        let result = apply_mappings(&people(), &mappings);
        assert!(!result.success);
        assert_eq!(result.errors, vec!["No column mappings provided".to_string()]);
    }

    #[test]
    fn empty_target_does_not_participate() {
        let mappings = vec![ColumnMapping::new("name", "")];
        let result = apply_mappings(&people(), &mappings);
        assert!(!result.success);
        assert_eq!(result.errors, vec!["No column mappings provided".to_string()]);
    }

    #[test]
    fn missing_source_column_fails_when_nothing_builds() {
        let mappings = vec![ColumnMapping::new("nonexistent_column", "target")];
        let result = apply_mappings(&people(), &mappings);

        assert!(!result.success);
        assert!(result.data.is_none());
        assert!(
            result
                .errors
                .iter()
                .any(|e| e.contains("Source column 'nonexistent_column' not found"))
        );
    }

    #[test]
    fn missing_source_column_demotes_to_warning_on_partial_success() {
        let mappings = vec![
            ColumnMapping::new("name", "full_name"),
            ColumnMapping::new("ghost", "ghost_target"),
        ];
        let result = apply_mappings(&people(), &mappings);

        assert!(result.success);
        assert!(result.errors.is_empty());
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.contains("Source column 'ghost' not found"))
        );
        let data = result.data.unwrap();
        assert_eq!(data.width(), 1);
    }

    #[test]
    fn transform_produces_string_column() {
        let upper: tis_model::TransformFn =
            Arc::new(|v: &AnyValue<'_>| Ok(any_to_string(v).to_uppercase()));
        let mappings =
            vec![ColumnMapping::new("name", "upper_name").with_transform(upper)];

        let result = apply_mappings(&people(), &mappings);
        assert!(result.success);
        let data = result.data.unwrap();
        let series = data.column("upper_name").unwrap().as_materialized_series();
        assert_eq!(series.str().unwrap().get(0), Some("ALICE"));
    }

    #[test]
    fn failing_transform_warns_and_keeps_coerced_column() {
        let broken: tis_model::TransformFn =
            Arc::new(|_: &AnyValue<'_>| anyhow::bail!("not today"));
        let mappings = vec![
            ColumnMapping::new("age", "age")
                .with_data_type(DataType::Integer)
                .with_transform(broken),
        ];

        let result = apply_mappings(&people(), &mappings);
        assert!(result.success);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("Transformation failed for age"));
        assert!(result.warnings[0].contains("not today"));

        let data = result.data.unwrap();
        assert_eq!(data.column("age").unwrap().dtype().to_string(), "i64");
    }

    #[test]
    fn transform_skips_nulls() {
        let frame = df!("v" => [Some("a"), None, Some("c")]).unwrap();
        let upper: tis_model::TransformFn =
            Arc::new(|v: &AnyValue<'_>| Ok(any_to_string(v).to_uppercase()));
        let mappings = vec![ColumnMapping::new("v", "v").with_transform(upper)];

        let result = apply_mappings(&frame, &mappings);
        let data = result.data.unwrap();
        let series = data.column("v").unwrap().as_materialized_series();
        assert_eq!(
            series.str().unwrap().into_iter().collect::<Vec<_>>(),
            vec![Some("A"), None, Some("C")]
        );
    }

    #[test]
    fn duplicate_targets_fail_assembly() {
        let mappings = vec![
            ColumnMapping::new("name", "target"),
            ColumnMapping::new("email", "target"),
        ];
        let result = apply_mappings(&people(), &mappings);

        assert!(!result.success);
        assert!(result.data.is_none());
        assert!(
            result
                .errors
                .iter()
                .any(|e| e.contains("Column transformation failed"))
        );
    }

    #[test]
    fn metadata_reports_shapes_and_counts() {
        let mappings = vec![
            ColumnMapping::new("name", "full_name"),
            ColumnMapping::new("age", "age"),
        ];
        let result = apply_mappings(&people(), &mappings);
        assert!(result.success);

        let get = |key: &str| result.metadata.get(key).and_then(serde_json::Value::as_u64);
        assert_eq!(get("original_rows"), Some(3));
        assert_eq!(get("original_columns"), Some(4));
        assert_eq!(get("processed_rows"), Some(3));
        assert_eq!(get("processed_columns"), Some(2));
        assert_eq!(get("columns_mapped"), Some(2));
    }
}
