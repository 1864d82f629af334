//! Categorical column detection.

use eda_model::{CategoricalStat, ColumnKind, EdaOptions};
use polars::prelude::{Column, PolarsResult};

use crate::values::{is_text_dtype, present_values};

/// Returns cardinality statistics when the column looks categorical.
///
/// A column is categorical when its distinct/non-missing ratio is below
/// `categorical_max_ratio` and it has fewer than `categorical_max_unique`
/// distinct values. Columns without any non-missing value are never
/// categorical.
///
/// # Errors
///
/// Fails when polars cannot count distinct values for the column's dtype.
pub fn categorical_stat(
    column: &Column,
    options: &EdaOptions,
) -> PolarsResult<Option<CategoricalStat>> {
    let present = present_values(column)?;
    let total_values = present.len();
    let unique_values = if total_values == 0 {
        0
    } else {
        present.n_unique()?
    };
    Ok(categorical_from_counts(unique_values, total_values, options))
}

pub fn categorical_from_counts(
    unique_values: usize,
    total_values: usize,
    options: &EdaOptions,
) -> Option<CategoricalStat> {
    if total_values == 0 {
        return None;
    }
    let ratio = unique_values as f64 / total_values as f64;
    if ratio < options.categorical_max_ratio && unique_values < options.categorical_max_unique {
        Some(CategoricalStat {
            unique_values,
            total_values,
            ratio,
        })
    } else {
        None
    }
}

/// Categorical first, then text by dtype; everything else is numeric.
///
/// # Errors
///
/// Propagates failures from [`categorical_stat`].
pub fn classify_column(column: &Column, options: &EdaOptions) -> PolarsResult<ColumnKind> {
    let kind = if let Some(stat) = categorical_stat(column, options)? {
        ColumnKind::Categorical(stat)
    } else if is_text_dtype(column.dtype()) {
        ColumnKind::Text
    } else {
        ColumnKind::Numeric
    };
    Ok(kind)
}
