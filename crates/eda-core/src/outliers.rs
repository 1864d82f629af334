//! Tukey fence outlier flags.

use eda_model::{NumericStat, OutlierReport};
use polars::prelude::Column;

use crate::values::{any_to_f64, column_values};

/// Flags rows whose value lies below `q25 - k * iqr` or above `q75 + k * iqr`.
///
/// The mask has one entry per row of the column (and so of the table).
pub fn outlier_report(column: &Column, stat: &NumericStat, multiplier: f64) -> OutlierReport {
    let iqr = stat.iqr();
    let lower_fence = stat.q25 - multiplier * iqr;
    let upper_fence = stat.q75 + multiplier * iqr;
    let mask: Vec<bool> = column_values(column)
        .iter()
        .map(|value| {
            any_to_f64(value).is_some_and(|number| number < lower_fence || number > upper_fence)
        })
        .collect();
    let flagged = mask.iter().filter(|flag| **flag).count();
    OutlierReport {
        lower_fence,
        upper_fence,
        mask,
        flagged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarize::numeric_stat;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    #[test]
    fn flags_values_beyond_the_fences() {
        let column = Series::new(
            "x".into(),
            vec![Some(1.0), Some(2.0), Some(3.0), Some(2.5), Some(100.0), None, Some(2.0)],
        )
        .into_column();
        let stat = numeric_stat(&column).expect("numeric");
        let report = outlier_report(&column, &stat, 1.5);
        assert_eq!(report.mask.len(), 7);
        assert_eq!(report.flagged, 1);
        assert_eq!(report.flagged_rows(), vec![4]);
    }

    #[test]
    fn constant_column_has_no_outliers() {
        let column = Series::new("x".into(), vec![5i64; 12]).into_column();
        let stat = numeric_stat(&column).expect("numeric");
        let report = outlier_report(&column, &stat, 1.5);
        assert_eq!(report.lower_fence, 5.0);
        assert_eq!(report.upper_fence, 5.0);
        assert_eq!(report.flagged, 0);
    }
}
