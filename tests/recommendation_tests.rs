//! Tests for combining picks and analyzing whole sweeps.

use iobench_plot::{
    Analysis, IobenchError, MeasurementRow, MeasurementTable, Metric, Recommendation, Threshold,
};

fn sweep() -> MeasurementTable {
    MeasurementTable::from(vec![
        MeasurementRow::new(1.0, 900.0, 700.0),
        MeasurementRow::new(2.0, 1500.0, 1200.0),
        MeasurementRow::new(4.0, 1540.0, 1500.0),
        MeasurementRow::new(8.0, 1560.0, 1520.0),
    ])
}

#[test]
fn test_combined_is_max_of_picks() {
    let recommendation = Recommendation::new(2.0, 4.0);
    assert_eq!(recommendation.read(), 2.0);
    assert_eq!(recommendation.write(), 4.0);
    assert_eq!(recommendation.combined(), 4.0);

    assert_eq!(Recommendation::new(8.0, 1.0).combined(), 8.0);
    assert_eq!(Recommendation::new(3.0, 3.0).combined(), 3.0);
}

#[test]
fn test_for_metric() {
    let recommendation = Recommendation::new(2.0, 4.0);
    assert_eq!(recommendation.for_metric(Metric::Read), 2.0);
    assert_eq!(recommendation.for_metric(Metric::Write), 4.0);
}

#[test]
fn test_from_table_runs_both_metrics() {
    let recommendation =
        Recommendation::from_table(&sweep(), Threshold::default()).expect("recommendation");
    assert_eq!(recommendation, Recommendation::new(2.0, 4.0));
}

#[test]
fn test_from_table_with_custom_threshold() {
    let threshold = Threshold::new(0.7).expect("threshold");
    let recommendation = Recommendation::from_table(&sweep(), threshold).expect("recommendation");
    assert_eq!(recommendation, Recommendation::new(1.0, 2.0));
}

#[test]
fn test_analysis_reports_peaks_and_recommendation() {
    let analysis = Analysis::new(&sweep(), Threshold::default()).expect("analysis");

    assert_eq!(*analysis.peak_read(), MeasurementRow::new(8.0, 1560.0, 1520.0));
    assert_eq!(*analysis.peak_write(), MeasurementRow::new(8.0, 1560.0, 1520.0));
    assert_eq!(analysis.peak(Metric::Read).multiplier, 8.0);
    assert_eq!(analysis.recommendation().combined(), 4.0);
    assert_eq!(analysis.threshold(), Threshold::default());
}

#[test]
fn test_peaks_are_independent_of_threshold_pick() {
    let table = MeasurementTable::from(vec![
        MeasurementRow::new(1.0, 100.0, 100.0),
        MeasurementRow::new(2.0, 101.0, 300.0),
        MeasurementRow::new(4.0, 500.0, 310.0),
    ]);
    let analysis = Analysis::new(&table, Threshold::default()).expect("analysis");

    assert_eq!(analysis.peak_read().multiplier, 4.0);
    assert_eq!(analysis.peak_write().multiplier, 4.0);
    assert_eq!(analysis.recommendation().read(), 1.0);
    assert_eq!(analysis.recommendation().write(), 2.0);
}

#[test]
fn test_analysis_of_empty_table_fails() {
    let err = Analysis::new(&MeasurementTable::default(), Threshold::default())
        .expect_err("empty table");
    assert!(matches!(err, IobenchError::InvalidInput(_)));
}

#[test]
fn test_analysis_of_single_row() {
    let table = MeasurementTable::from(vec![MeasurementRow::new(4.0, 0.0, 250.0)]);
    let analysis = Analysis::new(&table, Threshold::default()).expect("analysis");
    assert_eq!(analysis.recommendation(), &Recommendation::new(4.0, 4.0));
}

#[test]
fn test_recommendation_serialization() {
    let json = serde_json::to_string(&Recommendation::new(2.0, 4.0)).expect("serialize");
    assert_eq!(json, r#"{"read":2.0,"write":4.0,"combined":4.0}"#);
}
