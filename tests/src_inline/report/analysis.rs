use super::*;
use crate::support::sample_analysis;

#[test]
fn test_zip_roc_pairs_points() {
    let roc = RocData {
        fpr: vec![0.0, 0.5, 1.0],
        tpr: vec![0.0, 0.8, 1.0],
    };
    let points = zip_roc(&roc).unwrap();
    let pairs = points.iter().map(|p| (p.fpr, p.tpr)).collect::<Vec<_>>();
    assert_eq!(pairs, vec![(0.0, 0.0), (0.5, 0.8), (1.0, 1.0)]);
}

#[test]
fn test_zip_roc_length_mismatch() {
    let roc = RocData {
        fpr: vec![0.0, 0.5, 1.0],
        tpr: vec![0.0, 0.8],
    };
    assert_eq!(zip_roc(&roc), Err(RocLengthMismatch { fpr: 3, tpr: 2 }));
}

#[test]
fn test_mismatched_model_omits_only_its_chart() {
    let view = build_analysis_view(Some(&sample_analysis())).unwrap();
    assert_eq!(view.models.len(), 2);
    assert_eq!(view.models[0].roc.as_ref().map(|r| r.len()), Some(3));
    assert!(view.models[1].roc.is_none());
    assert_eq!(view.models[1].auc, "0.7900");
    assert_eq!(view.reference_line, REFERENCE_LINE);
    assert_eq!(view.issues.len(), 1);
}

#[test]
fn test_absent_result_builds_no_view() {
    assert!(build_analysis_view(None).is_none());
}

#[test]
fn test_correlations_in_fixed_order_with_placeholder() {
    let mut result = sample_analysis();
    result.correlation.lar_outcome = None;
    let view = build_analysis_view(Some(&result)).unwrap();
    let cells = view
        .correlations
        .iter()
        .map(|c| (c.label, c.value.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            ("LAR vs PCT", "0.3123"),
            ("LAR vs Outcome", "N/A"),
            ("PCT vs Outcome", "0.2000"),
        ]
    );
}

#[test]
fn test_metric_rows_with_optional_metrics() {
    let result = sample_analysis();
    let full = metric_rows(&result.models[0].metrics);
    let row = |rows: &[MetricRow], label: &str| {
        rows.iter().find(|r| r.label == label).unwrap().value.clone()
    };
    assert_eq!(row(&full, "Sensitivity"), "0.8000");
    assert_eq!(row(&full, "Accuracy"), "0.7700");
    assert_eq!(row(&full, "CV AUC"), "0.8000 ± 0.0500");

    let sparse = metric_rows(&result.models[1].metrics);
    assert_eq!(row(&sparse, "Accuracy"), "N/A");
    assert_eq!(row(&sparse, "CV AUC"), "N/A");
}

#[test]
fn test_cv_auc_combinations() {
    assert_eq!(format_cv_auc(Some(0.81234), None), "0.8123");
    assert_eq!(format_cv_auc(None, Some(0.02)), "N/A");
    assert_eq!(format_cv_auc(Some(0.8), Some(0.0)), "0.8000 ± 0.0000");
}

#[test]
fn test_model_order_preserved() {
    let mut result = sample_analysis();
    result.models.reverse();
    let view = build_analysis_view(Some(&result)).unwrap();
    assert_eq!(view.models[0].name, "Random Forest");
    assert_eq!(view.models[1].name, "Logistic Regression");
}

#[test]
fn test_missing_keys_decode_as_absent() {
    let result: AnalysisResult = serde_json::from_str(r#"{"correlation": {}, "models": []}"#).unwrap();
    let view = build_analysis_view(Some(&result)).unwrap();
    assert!(view.correlations.iter().all(|c| c.value == NOT_AVAILABLE));
    assert!(view.models.is_empty());
}
