//! Diagnostics for report runs, on `tracing` and `tracing-subscriber`.
//!
//! The report goes to its own writer; classification, failed summaries and
//! timings go through `tracing` to stderr so they never interleave with the
//! report text.
//!
//! # Log Levels
//!
//! - `warn`: numeric summaries that failed for a column
//! - `info`: run completion with column counts and duration
//! - `debug`: per-column classification and summary details
//!
//! # Usage
//!
//! ```ignore
//! use eda_report::logging::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::from_verbosity(2))?;
//! eda_report::run_eda(&df)?;
//! ```

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::dispatcher::{self, SetGlobalDefaultError};
use tracing::{Dispatch, Level};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter, format::FmtSpan},
    layer::SubscriberExt,
};

/// Configuration for report diagnostics.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level for the `eda_*` crates; everything else stays at warn.
    pub level: Level,
    /// ANSI colors for the compact format.
    pub with_ansi: bool,
    pub format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One line per event, without timestamps.
    #[default]
    Compact,
    /// One JSON object per event, plus the `eda` span on close with its timing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            with_ansi: true,
            format: LogFormat::default(),
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from a verbosity count.
    ///
    /// - 0: warn level
    /// - 1: info level
    /// - 2: debug level
    /// - 3+: trace level
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Installs report diagnostics on stderr as the global default.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), SetGlobalDefaultError> {
    init_logging_with_writer(config, io::stderr)
}

/// Installs report diagnostics on `writer` as the global default.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging_with_writer<W>(
    config: &LogConfig,
    writer: W,
) -> Result<(), SetGlobalDefaultError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    dispatcher::set_global_default(build_dispatch(config, writer))
}

/// Builds the subscriber without installing it, for scoped use with
/// [`tracing::dispatcher::with_default`].
pub fn build_dispatch<W>(config: &LogConfig, writer: W) -> Dispatch
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(build_env_filter(config.level));
    match config.format {
        LogFormat::Compact => Dispatch::new(
            registry.with(
                fmt::layer()
                    .compact()
                    .without_time()
                    .with_target(false)
                    .with_ansi(config.with_ansi)
                    .with_writer(writer),
            ),
        ),
        LogFormat::Json => Dispatch::new(
            registry.with(
                fmt::layer()
                    .json()
                    .with_target(false)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(writer),
            ),
        ),
    }
}

/// A `MakeWriter` over a writer shared behind a mutex, so log output can be
/// read back after a run.
pub struct SharedWriter<T> {
    inner: Arc<Mutex<T>>,
}

impl<T> Clone for SharedWriter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Write> SharedWriter<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inner)),
        }
    }

    /// Runs `f` against the wrapped writer; None if the lock is poisoned.
    pub fn with_inner<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.inner.lock().ok().map(|guard| f(&guard))
    }
}

pub struct SharedWriterGuard<T> {
    inner: Arc<Mutex<T>>,
}

impl<T: Write> Write for SharedWriterGuard<T> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("log writer lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("log writer lock poisoned"))?;
        guard.flush()
    }
}

impl<'a, T: Write + 'a> MakeWriter<'a> for SharedWriter<T> {
    type Writer = SharedWriterGuard<T>;

    fn make_writer(&'a self) -> Self::Writer {
        SharedWriterGuard {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// `RUST_LOG` wins when set; otherwise only the `eda_*` crates follow `level`.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = level.as_str().to_lowercase();
        EnvFilter::new(format!(
            "warn,eda_core={level},eda_model={level},eda_report={level}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use eda_model::EdaOptions;

    fn logged_run(config: &LogConfig) -> (String, String) {
        let cols: Vec<Column> = vec![
            Series::new("flag".into(), vec![true, false, true]).into_column(),
            Series::new("x".into(), vec![1.0, 2.0, 3.0]).into_column(),
        ];
        let df = DataFrame::new(cols).expect("frame");
        let writer = SharedWriter::new(Vec::new());
        let dispatch = build_dispatch(config, writer.clone());
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(5);
        dispatcher::with_default(&dispatch, || {
            crate::run_eda_with(&df, &EdaOptions::default(), &mut out, &mut rng)
        })
        .expect("report");
        let logs = writer
            .with_inner(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .expect("logs");
        (logs, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(LogConfig::from_verbosity(0).level, Level::WARN);
        assert_eq!(LogConfig::from_verbosity(1).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(2).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(9).level, Level::TRACE);
    }

    #[test]
    fn compact_format_at_warn_keeps_only_failures() {
        let (logs, report) = logged_run(&LogConfig::default().with_ansi(false));
        assert!(logs.contains("numeric summary failed"));
        assert!(logs.contains("flag"));
        assert!(!logs.contains("classified column"));
        assert!(!logs.contains("eda report complete"));
        assert!(!report.contains("numeric summary failed"));
    }

    #[test]
    fn json_format_at_info_reports_completion() {
        let config = LogConfig::from_verbosity(1).with_format(LogFormat::Json);
        let (logs, _) = logged_run(&config);
        assert!(logs.contains("\"eda report complete\""));
        assert!(logs.contains("\"level\":\"INFO\""));
        assert!(!logs.contains("classified column"));
    }

    #[test]
    fn shared_writer_collects_bytes() {
        let writer = SharedWriter::new(Vec::new());
        let mut guard = writer.make_writer();
        guard.write_all(b"hello").expect("write");
        assert_eq!(writer.with_inner(Vec::len), Some(5));
    }
}
