use super::*;
use crate::report::analysis::build_analysis_view;
use crate::report::prediction::build_prediction_view;
use crate::support::{sample_analysis, sample_prediction};

#[test]
fn test_prediction_json_envelope() {
    let json = render_prediction_json(&build_prediction_view(&sample_prediction())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tool"], "kira-sepsisrisk");
    assert_eq!(value["kind"], "prediction");
    assert_eq!(value["view"]["risk"]["mortality"], "23.7%");
    assert_eq!(value["view"]["risk"]["tone"], "orange");
    assert_eq!(value["view"]["importance"][0]["feature"], "PCT");
}

#[test]
fn test_analysis_json_null_chart() {
    let json = render_analysis_json(&build_analysis_view(Some(&sample_analysis())).unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["kind"], "analysis");
    assert!(value["view"]["models"][1]["roc"].is_null());
    assert_eq!(value["view"]["models"][0]["roc"][1]["tpr"], 0.8);
    assert_eq!(value["view"]["reference_line"][1]["fpr"], 1.0);
}
