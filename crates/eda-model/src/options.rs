//! Configuration options for dataset summaries.

use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, Result};

/// How the outlier section reports its count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutlierCounting {
    /// Report the length of the outlier mask, i.e. the table's row count.
    ///
    /// This is the historical behavior of the report and stays the default.
    #[default]
    MaskLength,
    /// Report the number of rows actually outside the IQR fences.
    Flagged,
}

/// Options for rendering row tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Maximum number of columns shown when printing rows (None shows all).
    pub max_columns: Option<usize>,

    /// Wrap row tables to this width (None keeps each row on one line).
    pub table_width: Option<u16>,
}

/// Options controlling classification, outlier detection, and report output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdaOptions {
    /// A column is categorical only when `unique / total` is below this ratio.
    pub categorical_max_ratio: f64,

    /// A column is categorical only when it has fewer distinct values than this.
    pub categorical_max_unique: usize,

    /// Tukey fence multiplier applied to the IQR.
    pub iqr_multiplier: f64,

    /// Flagged rows are printed only when the table has at most this many rows.
    pub outlier_row_limit: usize,

    /// Which number the outlier section reports.
    pub outlier_counting: OutlierCounting,

    /// Decimal places used when printing categorical ratios.
    pub ratio_decimals: u32,

    /// Print the greeting banner before the report.
    pub banner: bool,

    /// Row table rendering.
    pub display: DisplayOptions,
}

impl Default for EdaOptions {
    fn default() -> Self {
        Self {
            categorical_max_ratio: 0.05,
            categorical_max_unique: 100,
            iqr_multiplier: 1.5,
            outlier_row_limit: 10,
            outlier_counting: OutlierCounting::MaskLength,
            ratio_decimals: 4,
            banner: true,
            display: DisplayOptions::default(),
        }
    }
}

impl EdaOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_categorical_thresholds(mut self, max_ratio: f64, max_unique: usize) -> Self {
        self.categorical_max_ratio = max_ratio;
        self.categorical_max_unique = max_unique;
        self
    }

    #[must_use]
    pub fn with_iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.iqr_multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_outlier_row_limit(mut self, limit: usize) -> Self {
        self.outlier_row_limit = limit;
        self
    }

    #[must_use]
    pub fn with_outlier_counting(mut self, counting: OutlierCounting) -> Self {
        self.outlier_counting = counting;
        self
    }

    #[must_use]
    pub fn with_ratio_decimals(mut self, decimals: u32) -> Self {
        self.ratio_decimals = decimals;
        self
    }

    #[must_use]
    pub fn with_banner(mut self, enable: bool) -> Self {
        self.banner = enable;
        self
    }

    #[must_use]
    pub fn with_display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    /// Check that thresholds are usable before a run.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range option.
    pub fn validate(&self) -> Result<()> {
        let ratio = self.categorical_max_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(OptionsError::CategoricalRatio(ratio));
        }
        if !self.iqr_multiplier.is_finite() || self.iqr_multiplier < 0.0 {
            return Err(OptionsError::IqrMultiplier(self.iqr_multiplier));
        }
        if self.ratio_decimals > 15 {
            return Err(OptionsError::RatioDecimals(self.ratio_decimals));
        }
        Ok(())
    }
}
