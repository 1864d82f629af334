//! Quick exploratory data analysis report for polars data frames.
//!
//! [`run_eda`] prints a human-readable summary of a table to stdout:
//! which columns look categorical, distribution statistics and IQR outlier
//! flags for the rest, and missing-value and duplicate-row counts.
//!
//! ```ignore
//! use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
//!
//! let df = DataFrame::new(vec![
//!     Series::new("age".into(), [31i64, 45, 27]).into_column(),
//!     Series::new("city".into(), ["Oslo", "Rome", "Oslo"]).into_column(),
//! ])?;
//! eda_report::run_eda(&df)?;
//! ```

pub mod banner;
pub mod logging;
pub mod render;
pub mod rows;

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use rand::Rng;
use tracing::{info, info_span};

use eda_core::profile_dataframe;
use eda_model::EdaOptions;

pub use banner::banner;
pub use render::{format_list, write_report};
pub use rows::flagged_rows_table;

/// Prints the report for `df` to stdout with default options.
///
/// # Errors
///
/// Fails when stdout cannot be written or the frame cannot be read.
pub fn run_eda(df: &DataFrame) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_eda_with(df, &EdaOptions::default(), &mut out, &mut rand::rng())
}

/// Writes the report for `df` to `out`.
///
/// `rng` only drives the banner line.
///
/// # Errors
///
/// Fails on invalid options, write errors, or polars errors while reading
/// the frame. Per-column summary failures are printed, not returned.
pub fn run_eda_with<W, R>(
    df: &DataFrame,
    options: &EdaOptions,
    out: &mut W,
    rng: &mut R,
) -> Result<()>
where
    W: Write + ?Sized,
    R: Rng + ?Sized,
{
    let span = info_span!("eda", rows = df.height(), columns = df.width());
    let _guard = span.enter();
    let start = Instant::now();

    let profile = profile_dataframe(df, options).context("profile dataframe")?;
    if options.banner {
        writeln!(out, "{}", banner(rng))?;
    }
    write_report(out, df, &profile, options)?;
    out.flush()?;

    info!(
        categorical = profile.categorical.len(),
        non_categorical = profile.non_categorical.len(),
        text = profile.text_columns.len(),
        duration_ms = start.elapsed().as_millis(),
        "eda report complete"
    );
    Ok(())
}
