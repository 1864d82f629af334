//! Dataset-wide missing value and duplicate row diagnostics.

use std::collections::BTreeSet;

use eda_model::{DuplicateSummary, MissingSummary};
use polars::prelude::{AnyValue, DataFrame};

use crate::values::{column_values, is_missing, is_truthy, value_key};

pub fn missing_summary(df: &DataFrame) -> MissingSummary {
    let mut row_has_missing = vec![false; df.height()];
    let mut per_column = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let mut count = 0usize;
        for (idx, value) in column_values(column).iter().enumerate() {
            if !is_missing(value) {
                continue;
            }
            count += 1;
            if let Some(flag) = row_has_missing.get_mut(idx) {
                *flag = true;
            }
        }
        per_column.push((column.name().to_string(), count));
    }
    MissingSummary {
        per_column,
        rows_with_missing: row_has_missing.iter().filter(|flag| **flag).count(),
    }
}

/// Counts exact duplicate rows and repeats of the collapsed per-row truthiness.
///
/// Missing cells compare equal to each other when matching rows.
pub fn duplicate_summary(df: &DataFrame) -> DuplicateSummary {
    let columns: Vec<Vec<AnyValue<'_>>> = df.get_columns().iter().map(column_values).collect();
    let mut seen_rows = BTreeSet::new();
    let mut seen_flags = BTreeSet::new();
    let mut summary = DuplicateSummary::default();
    for idx in 0..df.height() {
        let cells: Vec<&AnyValue<'_>> = columns
            .iter()
            .filter_map(|values| values.get(idx))
            .collect();
        let key: Vec<Option<String>> = cells.iter().map(|value| value_key(value)).collect();
        if !seen_rows.insert(key) {
            summary.duplicate_rows += 1;
        }
        let any_truthy = cells.iter().any(|value| is_truthy(value) == Some(true));
        if !seen_flags.insert(any_truthy) {
            summary.duplicative_rows += 1;
        }
    }
    summary
}
