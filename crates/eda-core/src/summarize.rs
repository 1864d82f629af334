//! Numeric column summaries.

use eda_model::{NumericStat, SummaryError};
use polars::prelude::{
    AnyValue, ChunkAgg, ChunkQuantile, ChunkVar, Column, DataType, Float64Chunked, PolarsError,
    QuantileMethod,
};

use crate::values::{is_integer_dtype, is_numeric_dtype, present_values};

/// Computes min, max, mean, sample std and quartiles over non-missing values.
///
/// Quartiles interpolate linearly between the closest ranks. A column without
/// non-missing values yields NaN statistics and a zero count rather than an
/// error.
///
/// # Errors
///
/// [`SummaryError::TypeMismatch`] for non-numeric dtypes,
/// [`SummaryError::NonFinite`] when the column holds infinities, and
/// [`SummaryError::Compute`] when a polars reduction fails.
pub fn numeric_stat(column: &Column) -> Result<NumericStat, SummaryError> {
    let name = column.name().to_string();
    if !is_numeric_dtype(column.dtype()) {
        return Err(SummaryError::TypeMismatch {
            column: name,
            dtype: column.dtype().to_string(),
        });
    }
    let floats = present_values(column)
        .and_then(|series| series.cast(&DataType::Float64))
        .map_err(|error| compute_error(&name, &error))?;
    let values = floats.f64().map_err(|error| compute_error(&name, &error))?;
    summarize_present(&name, values)
}

fn summarize_present(column: &str, values: &Float64Chunked) -> Result<NumericStat, SummaryError> {
    let infinite = values
        .into_iter()
        .flatten()
        .filter(|value| value.is_infinite())
        .count();
    if infinite > 0 {
        return Err(SummaryError::NonFinite {
            column: column.to_string(),
            count: infinite,
        });
    }
    let quartile = |q: f64| {
        values
            .quantile(q, QuantileMethod::Linear)
            .map(|value| value.unwrap_or(f64::NAN))
            .map_err(|error| compute_error(column, &error))
    };
    let count = values.len();
    Ok(NumericStat {
        count,
        min: values.min().unwrap_or(f64::NAN),
        max: values.max().unwrap_or(f64::NAN),
        mean: values.mean().unwrap_or(f64::NAN),
        std: if count > 1 { values.std(1) } else { None },
        q25: quartile(0.25)?,
        median: quartile(0.5)?,
        q75: quartile(0.75)?,
    })
}

/// Min and max in the column's own dtype.
///
/// Integer columns are reduced directly so wide values print exactly; other
/// dtypes reuse the float statistics.
///
/// # Errors
///
/// [`SummaryError::Compute`] when the reduction fails.
pub fn column_extremes(
    column: &Column,
    stat: &NumericStat,
) -> Result<(AnyValue<'static>, AnyValue<'static>), SummaryError> {
    if stat.count == 0 || !is_integer_dtype(column.dtype()) {
        return Ok((AnyValue::Float64(stat.min), AnyValue::Float64(stat.max)));
    }
    let name = column.name().as_str();
    let series = column.as_materialized_series();
    let min = series
        .min_reduce()
        .map_err(|error| compute_error(name, &error))?;
    let max = series
        .max_reduce()
        .map_err(|error| compute_error(name, &error))?;
    Ok((min.into_value(), max.into_value()))
}

fn compute_error(column: &str, error: &PolarsError) -> SummaryError {
    SummaryError::Compute {
        column: column.to_string(),
        message: error.to_string(),
    }
}
