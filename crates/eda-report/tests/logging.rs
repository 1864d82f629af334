//! Logging runs in its own test binary: the global subscriber can only be
//! installed once per process.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::Level;

use eda_model::EdaOptions;
use eda_report::logging::{LogConfig, LogFormat, SharedWriter, init_logging_with_writer};
use eda_report::run_eda_with;

#[test]
fn report_diagnostics_go_to_the_log_not_the_report() {
    let writer = SharedWriter::new(Vec::new());
    let config = LogConfig::default()
        .with_level(Level::DEBUG)
        .with_format(LogFormat::Json)
        .with_ansi(false);
    init_logging_with_writer(&config, writer.clone()).unwrap();

    let cols: Vec<Column> = vec![
        Series::new("flag".into(), vec![true, false, true]).into_column(),
        Series::new("x".into(), vec![1.0, 2.0, 3.0]).into_column(),
    ];
    let df = DataFrame::new(cols).unwrap();
    let mut out = Vec::new();
    let mut rng = StdRng::seed_from_u64(3);
    run_eda_with(&df, &EdaOptions::default(), &mut out, &mut rng).unwrap();

    let logs = writer
        .with_inner(|bytes| String::from_utf8_lossy(bytes).into_owned())
        .unwrap();
    assert!(logs.contains("classified column"));
    assert!(logs.contains("numeric summary failed"));
    assert!(logs.contains("eda report complete"));

    let report = String::from_utf8(out).unwrap();
    assert!(!report.contains("classified column"));
    assert!(report.contains("Statistics for column x:"));

    // A second global install is refused instead of panicking.
    assert!(init_logging_with_writer(&config, writer.clone()).is_err());
}
