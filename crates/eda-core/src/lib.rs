//! Descriptive statistics over polars data frames.
//!
//! Columns are classified as categorical, text, or numeric; numeric columns
//! get a distribution summary with Tukey fence outlier flags; the whole
//! table gets missing-value and duplicate-row counts. Nothing here prints;
//! see `eda-report` for the textual report.

pub mod classify;
pub mod diagnostics;
pub mod error;
pub mod outliers;
pub mod profile;
pub mod summarize;
pub mod values;

pub use classify::{categorical_from_counts, categorical_stat, classify_column};
pub use diagnostics::{duplicate_summary, missing_summary};
pub use error::{EdaError, Result};
pub use outliers::outlier_report;
pub use profile::{ColumnSummary, DatasetProfile, NumericSummary, profile_dataframe};
pub use summarize::{column_extremes, numeric_stat};
pub use values::{any_to_display, format_float, is_integer_dtype, present_values, round_to};
