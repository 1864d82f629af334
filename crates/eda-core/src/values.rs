//! Polars `AnyValue` helpers.
//!
//! Missing values are polars nulls and float NaNs; every summary in this
//! crate goes through [`is_missing`] so the two are treated alike.

use polars::prelude::{AnyValue, Column, DataType, PolarsResult, Series};

/// Reads every cell of a column. Out-of-range reads become nulls.
pub fn column_values(column: &Column) -> Vec<AnyValue<'_>> {
    (0..column.len())
        .map(|idx| column.get(idx).unwrap_or(AnyValue::Null))
        .collect()
}

/// The non-missing part of a column: nulls dropped, and NaNs for float dtypes.
pub fn present_values(column: &Column) -> PolarsResult<Series> {
    let series = column.as_materialized_series().drop_nulls();
    if matches!(series.dtype(), DataType::Float32 | DataType::Float64) {
        let not_nan = series.is_not_nan()?;
        series.filter(&not_nan)
    } else {
        Ok(series)
    }
}

pub fn is_missing(value: &AnyValue<'_>) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::Float32(v) => v.is_nan(),
        AnyValue::Float64(v) => v.is_nan(),
        _ => false,
    }
}

/// Converts a numeric AnyValue to f64, returning None for missing or non-numeric values.
pub fn any_to_f64(value: &AnyValue<'_>) -> Option<f64> {
    let number = match value {
        AnyValue::Int8(v) => f64::from(*v),
        AnyValue::Int16(v) => f64::from(*v),
        AnyValue::Int32(v) => f64::from(*v),
        AnyValue::Int64(v) => *v as f64,
        AnyValue::UInt8(v) => f64::from(*v),
        AnyValue::UInt16(v) => f64::from(*v),
        AnyValue::UInt32(v) => f64::from(*v),
        AnyValue::UInt64(v) => *v as f64,
        AnyValue::Float32(v) => f64::from(*v),
        AnyValue::Float64(v) => *v,
        _ => return None,
    };
    if number.is_nan() { None } else { Some(number) }
}

/// Equality key for distinct and duplicate counting. None for missing values.
pub fn value_key(value: &AnyValue<'_>) -> Option<String> {
    if is_missing(value) {
        return None;
    }
    let key = match value {
        AnyValue::Float32(v) => format_float(positive_zero(f64::from(*v))),
        AnyValue::Float64(v) => format_float(positive_zero(*v)),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    };
    Some(key)
}

/// Truthiness of a cell; None for missing values, which are skipped.
pub fn is_truthy(value: &AnyValue<'_>) -> Option<bool> {
    if is_missing(value) {
        return None;
    }
    let truthy = match value {
        AnyValue::Boolean(b) => *b,
        AnyValue::String(s) => !s.is_empty(),
        AnyValue::StringOwned(s) => !s.is_empty(),
        other => any_to_f64(other).is_none_or(|number| number != 0.0),
    };
    Some(truthy)
}

/// Renders a cell for row tables.
pub fn any_to_display(value: &AnyValue<'_>) -> String {
    if is_missing(value) {
        return "NaN".to_string();
    }
    match value {
        AnyValue::Boolean(b) => if *b { "True" } else { "False" }.to_string(),
        AnyValue::Float32(v) => format_float(f64::from(*v)),
        AnyValue::Float64(v) => format_float(*v),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Formats a float the way a scientist's REPL would: `5.5`, `1.0`, `nan`,
/// and exponent form (`1e-07`, `6.1e+18`) for decimal exponents outside
/// `-4..16`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    let scientific = format!("{value:e}");
    if let Some((mantissa, exponent)) = scientific.split_once('e') {
        let exponent: i32 = exponent.parse().unwrap_or(0);
        if !(-4..16).contains(&exponent) {
            let sign = if exponent < 0 { '-' } else { '+' };
            return format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs());
        }
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

pub fn is_integer_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    is_integer_dtype(dtype) || matches!(dtype, DataType::Float32 | DataType::Float64)
}

pub fn is_text_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::String)
}

fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
