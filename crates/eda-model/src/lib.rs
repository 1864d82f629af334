pub mod error;
pub mod options;
pub mod stats;

pub use error::{OptionsError, Result, SummaryError};
pub use options::{DisplayOptions, EdaOptions, OutlierCounting};
pub use stats::{
    CategoricalStat, ColumnKind, DuplicateSummary, MissingSummary, NumericStat, OutlierReport,
};
