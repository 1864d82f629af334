//! Whole-table profile: classification, numeric summaries, diagnostics.

use eda_model::{
    CategoricalStat, ColumnKind, DuplicateSummary, EdaOptions, MissingSummary, NumericStat,
    OutlierReport, SummaryError,
};
use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::{debug, warn};

use crate::classify::classify_column;
use crate::diagnostics::{duplicate_summary, missing_summary};
use crate::error::Result;
use crate::outliers::outlier_report;
use crate::summarize::{column_extremes, numeric_stat};

/// Numeric summary plus its outlier flags.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    pub stat: NumericStat,
    /// Smallest value in the column's dtype.
    pub min: AnyValue<'static>,
    /// Largest value in the column's dtype.
    pub max: AnyValue<'static>,
    pub outliers: OutlierReport,
}

/// Outcome of summarizing one non-categorical column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub result: std::result::Result<NumericSummary, SummaryError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetProfile {
    pub rows: usize,
    pub columns: usize,
    /// Categorical columns in table order.
    pub categorical: Vec<(String, CategoricalStat)>,
    pub text_columns: Vec<String>,
    pub non_categorical: Vec<String>,
    /// One entry per non-categorical column, same order.
    pub summaries: Vec<ColumnSummary>,
    pub missing: MissingSummary,
    pub duplicates: DuplicateSummary,
}

impl DatasetProfile {
    pub fn categorical_names(&self) -> Vec<&str> {
        self.categorical
            .iter()
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Classifies every column, summarizes the non-categorical ones, and
/// collects missing and duplicate diagnostics.
///
/// # Errors
///
/// Fails on invalid options, when polars cannot count a column's distinct
/// values, or when a recorded column cannot be looked up.
pub fn profile_dataframe(df: &DataFrame, options: &EdaOptions) -> Result<DatasetProfile> {
    options.validate()?;

    let mut categorical = Vec::new();
    let mut text_columns = Vec::new();
    let mut non_categorical = Vec::new();
    for column in df.get_columns() {
        let name = column.name().to_string();
        let kind = classify_column(column, options)?;
        debug!(column = %name, dtype = %column.dtype(), kind = ?kind, "classified column");
        match kind {
            ColumnKind::Categorical(stat) => categorical.push((name, stat)),
            ColumnKind::Text => text_columns.push(name),
            ColumnKind::Numeric => non_categorical.push(name),
        }
    }

    let mut summaries = Vec::with_capacity(non_categorical.len());
    for name in &non_categorical {
        let column = df.column(name)?;
        let result = summarize_column(column, options);
        match &result {
            Ok(summary) => debug!(
                column = %name,
                count = summary.stat.count,
                flagged = summary.outliers.flagged,
                "summarized column"
            ),
            Err(error) => warn!(column = %name, %error, "numeric summary failed"),
        }
        summaries.push(ColumnSummary { name: name.clone(), result });
    }

    Ok(DatasetProfile {
        rows: df.height(),
        columns: df.width(),
        categorical,
        text_columns,
        non_categorical,
        summaries,
        missing: missing_summary(df),
        duplicates: duplicate_summary(df),
    })
}

fn summarize_column(
    column: &Column,
    options: &EdaOptions,
) -> std::result::Result<NumericSummary, SummaryError> {
    let stat = numeric_stat(column)?;
    let (min, max) = column_extremes(column, &stat)?;
    Ok(NumericSummary {
        outliers: outlier_report(column, &stat, options.iqr_multiplier),
        stat,
        min,
        max,
    })
}
