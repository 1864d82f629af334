//! Tests for report options.

use eda_model::{EdaOptions, OptionsError, OutlierCounting};

#[test]
fn defaults_match_the_classic_report() {
    let options = EdaOptions::default();
    assert_eq!(options.categorical_max_ratio, 0.05);
    assert_eq!(options.categorical_max_unique, 100);
    assert_eq!(options.iqr_multiplier, 1.5);
    assert_eq!(options.outlier_row_limit, 10);
    assert_eq!(options.outlier_counting, OutlierCounting::MaskLength);
    assert_eq!(options.ratio_decimals, 4);
    assert!(options.banner);
    assert_eq!(options.display.max_columns, None);
    assert!(options.validate().is_ok());
}

#[test]
fn builder_overrides() {
    let options = EdaOptions::new()
        .with_categorical_thresholds(0.2, 5)
        .with_iqr_multiplier(3.0)
        .with_outlier_counting(OutlierCounting::Flagged)
        .with_banner(false);
    assert_eq!(options.categorical_max_ratio, 0.2);
    assert_eq!(options.categorical_max_unique, 5);
    assert_eq!(options.iqr_multiplier, 3.0);
    assert_eq!(options.outlier_counting, OutlierCounting::Flagged);
    assert!(!options.banner);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let zero_ratio = EdaOptions::new().with_categorical_thresholds(0.0, 100);
    assert_eq!(
        zero_ratio.validate(),
        Err(OptionsError::CategoricalRatio(0.0))
    );

    let negative_fence = EdaOptions::new().with_iqr_multiplier(-1.0);
    assert_eq!(
        negative_fence.validate(),
        Err(OptionsError::IqrMultiplier(-1.0))
    );

    let too_precise = EdaOptions::new().with_ratio_decimals(20);
    assert_eq!(
        too_precise.validate(),
        Err(OptionsError::RatioDecimals(20))
    );
}

#[test]
fn options_round_trip_through_json() {
    let options = EdaOptions::new().with_outlier_row_limit(25);
    let json = serde_json::to_string(&options).expect("serialize options");
    let round: EdaOptions = serde_json::from_str(&json).expect("deserialize options");
    assert_eq!(round, options);
}
