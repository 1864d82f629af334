use thiserror::Error;

/// Reasons a column cannot be summarized numerically.
///
/// All kinds are recoverable: the report prints the message and moves on
/// to the next column.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    /// The column dtype has no numeric interpretation.
    #[error("cannot summarize column '{column}': dtype {dtype} is not numeric")]
    TypeMismatch { column: String, dtype: String },

    /// The column holds infinite values, which leave the quartiles and
    /// fences undefined.
    #[error("cannot summarize column '{column}': {count} infinite values")]
    NonFinite { column: String, count: usize },

    /// A polars reduction over the column failed.
    #[error("cannot summarize column '{column}': {message}")]
    Compute { column: String, message: String },
}

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("categorical_max_ratio must be in (0, 1], got {0}")]
    CategoricalRatio(f64),

    #[error("iqr_multiplier must be finite and non-negative, got {0}")]
    IqrMultiplier(f64),

    #[error("ratio_decimals must be at most 15, got {0}")]
    RatioDecimals(u32),
}

pub type Result<T> = std::result::Result<T, OptionsError>;
