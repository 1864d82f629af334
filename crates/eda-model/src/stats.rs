//! Derived statistics records.
//!
//! Every record here is computed fresh for a single report and discarded
//! afterwards.

use serde::{Deserialize, Serialize};

use crate::options::OutlierCounting;

/// Cardinality of a column classified as categorical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoricalStat {
    /// Distinct non-missing values.
    pub unique_values: usize,
    /// Non-missing values.
    pub total_values: usize,
    /// `unique_values / total_values`.
    pub ratio: f64,
}

/// How a column is treated by the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ColumnKind {
    /// Low cardinality; reported with its cardinality statistics.
    Categorical(CategoricalStat),
    /// Textual and not categorical.
    Text,
    /// Everything else; summarized numerically.
    Numeric,
}

/// Distribution summary of a numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericStat {
    /// Non-missing values the summary was computed from.
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation; undefined below two values.
    pub std: Option<f64>,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
}

impl NumericStat {
    pub fn iqr(&self) -> f64 {
        self.q75 - self.q25
    }
}

/// Tukey fence outlier flags for one column, aligned with the table rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    pub lower_fence: f64,
    pub upper_fence: f64,
    /// One flag per table row; missing values are never flagged.
    pub mask: Vec<bool>,
    /// Number of `true` flags in `mask`.
    pub flagged: usize,
}

impl OutlierReport {
    /// The number printed next to the `Outliers:` label.
    pub fn reported_count(&self, counting: OutlierCounting) -> usize {
        match counting {
            OutlierCounting::MaskLength => self.mask.len(),
            OutlierCounting::Flagged => self.flagged,
        }
    }

    /// Row positions whose flag is set.
    pub fn flagged_rows(&self) -> Vec<usize> {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(idx, flag)| flag.then_some(idx))
            .collect()
    }
}

/// Missing-value counts across the whole table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingSummary {
    /// Missing cells per column, in table order.
    pub per_column: Vec<(String, usize)>,
    /// Rows with at least one missing cell.
    pub rows_with_missing: usize,
}

impl MissingSummary {
    pub fn total(&self) -> usize {
        self.per_column.iter().map(|(_, count)| count).sum()
    }

    pub fn columns_with_missing(&self) -> Vec<&str> {
        self.per_column
            .iter()
            .filter(|(_, count)| *count > 0)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Duplicate-row counts across the whole table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateSummary {
    /// Rows identical to an earlier row across every column.
    pub duplicate_rows: usize,
    /// Rows whose collapsed truthiness flag repeats an earlier row's flag.
    pub duplicative_rows: usize,
}
