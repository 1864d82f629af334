//! Property tests for classification and quantiles.

use polars::prelude::{IntoColumn, NamedFrom, Series};
use proptest::prelude::*;

use eda_core::{categorical_from_counts, categorical_stat, numeric_stat};
use eda_model::EdaOptions;

proptest! {
    #[test]
    fn categorical_iff_low_ratio_and_few_levels(unique in 0usize..300, extra in 0usize..5000) {
        let total = unique.max(1) + extra;
        let options = EdaOptions::default();
        let ratio = unique as f64 / total as f64;
        let expected = ratio < 0.05 && unique < 100;
        prop_assert_eq!(categorical_from_counts(unique, total, &options).is_some(), expected);
    }

    #[test]
    fn column_cardinality_matches_counts(levels in 1i64..8, rows in 1usize..400) {
        let values: Vec<i64> = (0..rows as i64).map(|idx| idx % levels).collect();
        let distinct = (levels as usize).min(rows);
        let column = Series::new("x".into(), values).into_column();
        let stat = categorical_stat(&column, &EdaOptions::default()).unwrap();
        let expected = (distinct as f64 / rows as f64) < 0.05;
        prop_assert_eq!(stat.is_some(), expected);
        if let Some(stat) = stat {
            prop_assert_eq!(stat.unique_values, distinct);
            prop_assert_eq!(stat.total_values, rows);
        }
    }

    #[test]
    fn quartiles_are_ordered(values in prop::collection::vec(-1_000_000i32..1_000_000, 1..200)) {
        let column = Series::new("x".into(), values).into_column();
        let stat = numeric_stat(&column).unwrap();
        prop_assert!(stat.min <= stat.q25);
        prop_assert!(stat.q25 <= stat.median);
        prop_assert!(stat.median <= stat.q75);
        prop_assert!(stat.q75 <= stat.max);
    }

    #[test]
    fn iqr_is_q75_minus_q25(values in prop::collection::vec(-1.0e3f64..1.0e3, 1..100)) {
        let column = Series::new("x".into(), values).into_column();
        let stat = numeric_stat(&column).unwrap();
        prop_assert_eq!(stat.iqr(), stat.q75 - stat.q25);
    }
}
