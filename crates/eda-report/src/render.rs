//! Textual report emission.

use std::io::Write;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};

use eda_core::{ColumnSummary, DatasetProfile, any_to_display, format_float, round_to};
use eda_model::{EdaOptions, OutlierCounting, OutlierReport};

use crate::rows::flagged_rows_table;

/// Writes the report body for an already computed profile.
///
/// `df` must be the frame the profile was computed from; it is used to
/// print the rows behind outlier flags.
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    df: &DataFrame,
    profile: &DatasetProfile,
    options: &EdaOptions,
) -> Result<()> {
    writeln!(out, "Number of observations (rows) is:\t{}", profile.rows)?;
    writeln!(out, "Number of features (columns) is:\t{}", profile.columns)?;

    writeln!(
        out,
        "{} are likely categorical.",
        format_list(&profile.categorical_names())
    )?;
    for (name, stat) in &profile.categorical {
        writeln!(
            out,
            "{name} column has {} unique values out of total {} - ({})",
            stat.unique_values,
            stat.total_values,
            format_float(round_to(stat.ratio, options.ratio_decimals))
        )?;
    }

    writeln!(
        out,
        "{} are not categorical.",
        format_list(&profile.non_categorical)
    )?;
    for summary in &profile.summaries {
        write_column_summary(out, df, summary, options)?;
    }

    if !profile.text_columns.is_empty() {
        writeln!(
            out,
            "{} are columns of dtype 'object'.",
            format_list(&profile.text_columns)
        )?;
    }

    let missing = &profile.missing;
    writeln!(out, "There are {} NAs in the dataframe in total.", missing.total())?;
    writeln!(out, "{} rows with NAs in the dataframe", missing.rows_with_missing)?;
    writeln!(
        out,
        "Columns with NAs: {}",
        format_list(&missing.columns_with_missing())
    )?;

    let duplicates = &profile.duplicates;
    writeln!(
        out,
        "There are {} duplicate rows in the dataframe.",
        duplicates.duplicate_rows
    )?;
    if duplicates.duplicative_rows > 0 {
        writeln!(
            out,
            "But {} rows with duplicative values",
            duplicates.duplicative_rows
        )?;
    }
    Ok(())
}

fn write_column_summary<W: Write + ?Sized>(
    out: &mut W,
    df: &DataFrame,
    summary: &ColumnSummary,
    options: &EdaOptions,
) -> Result<()> {
    let numeric = match &summary.result {
        Ok(numeric) => numeric,
        Err(error) => {
            writeln!(out, "{error}")?;
            return Ok(());
        }
    };
    let stat = &numeric.stat;
    let extreme = |value: &AnyValue<'_>| {
        if stat.count == 0 {
            format_float(f64::NAN)
        } else {
            any_to_display(value)
        }
    };
    writeln!(out)?;
    writeln!(out, "Statistics for column {}:", summary.name)?;
    writeln!(out, "Min:\t{}", extreme(&numeric.min))?;
    writeln!(out, "Max:\t{}", extreme(&numeric.max))?;
    writeln!(out, "Mean:\t{}", format_float(stat.mean))?;
    writeln!(out, "Std:\t{}", format_float(stat.std.unwrap_or(f64::NAN)))?;
    writeln!(out, "0.25 Quartile:\t{}", format_float(stat.q25))?;
    writeln!(out, "Median:\t{}", format_float(stat.median))?;
    writeln!(out, "0.75 Quartile:\t{}", format_float(stat.q75))?;
    writeln!(out, "IQR:\t{}", format_float(stat.iqr()))?;
    write_outliers(out, df, &numeric.outliers, options)
        .with_context(|| format!("outliers for column {}", summary.name))
}

/// Outlier section.
///
/// With [`OutlierCounting::MaskLength`] the printed count is the mask length
/// (the row count), and the "no outliers" line appears only for empty
/// tables. With [`OutlierCounting::Flagged`] the count is the number of
/// flagged rows and the "no outliers" line appears whenever none are flagged.
fn write_outliers<W: Write + ?Sized>(
    out: &mut W,
    df: &DataFrame,
    outliers: &OutlierReport,
    options: &EdaOptions,
) -> Result<()> {
    let rows = outliers.mask.len();
    let nothing_to_report = match options.outlier_counting {
        OutlierCounting::MaskLength => rows == 0,
        OutlierCounting::Flagged => outliers.flagged == 0,
    };
    if nothing_to_report {
        writeln!(
            out,
            "There are no outliers according to the ± {} IQR rule.",
            format_float(options.iqr_multiplier)
        )?;
        return Ok(());
    }
    writeln!(
        out,
        "Outliers: {}",
        outliers.reported_count(options.outlier_counting)
    )?;
    if rows <= options.outlier_row_limit {
        let table = flagged_rows_table(df, &outliers.mask, &options.display)
            .context("select flagged rows")?;
        writeln!(out, "{table}")?;
    }
    Ok(())
}

/// Formats names as a bracketed, single-quoted list: `['a', 'b']`.
pub fn format_list<S: AsRef<str>>(names: &[S]) -> String {
    let quoted: Vec<String> = names
        .iter()
        .map(|name| format!("'{}'", name.as_ref().replace('\'', "\\'")))
        .collect();
    format!("[{}]", quoted.join(", "))
}
