use super::*;
use crate::support::{sample_analysis, sample_prediction};

#[test]
fn test_sample_prediction_is_clean() {
    assert!(check_prediction(&sample_prediction()).is_empty());
}

#[test]
fn test_non_complementary_probabilities_reported() {
    let mut p = sample_prediction();
    p.probability_survived = 0.5;
    let issues = check_prediction(&p);
    assert_eq!(
        issues,
        vec![ContractIssue::ProbabilitiesNotComplementary {
            expired: 0.237,
            survived: 0.5
        }]
    );
}

#[test]
fn test_out_of_range_values_reported() {
    let mut p = sample_prediction();
    p.confidence_score = 140.0;
    p.num_models_used = 0;
    let issues = check_prediction(&p);
    assert!(issues.iter().any(|i| matches!(
        i,
        ContractIssue::OutOfRange { field, .. } if field == "confidence_score"
    )));
    assert!(issues.contains(&ContractIssue::NoModelsUsed));
}

#[test]
fn test_negative_importance_reported() {
    let mut p = sample_prediction();
    p.feature_importance = Some([("LAR", -0.2)].into_iter().collect());
    let issues = check_prediction(&p);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].to_string().contains("feature_importance.LAR"));
}

#[test]
fn test_analysis_mismatch_and_duplicates() {
    let mut a = sample_analysis();
    let dup = a.models[0].clone();
    a.models.push(dup);
    let issues = check_analysis(&a);
    assert!(issues.contains(&ContractIssue::RocLengthMismatch {
        model: "Random Forest".to_string(),
        fpr: 3,
        tpr: 2
    }));
    assert!(issues.contains(&ContractIssue::DuplicateModelName(
        "Logistic Regression".to_string()
    )));
}

#[test]
fn test_correlation_range() {
    let mut a = sample_analysis();
    a.correlation.lar_pct = Some(1.5);
    let issues = check_analysis(&a);
    assert!(issues.iter().any(|i| i.to_string().starts_with("LAR_PCT = 1.5")));
}

#[test]
fn test_unrecognized_outcome_reported() {
    let mut p = sample_prediction();
    if let Some(models) = p.individual_models.as_mut() {
        models[2].prediction = Outcome::Unrecognized("Unknown".to_string());
    }
    let issues = check_prediction(&p);
    assert_eq!(
        issues,
        vec![ContractIssue::UnrecognizedOutcome {
            model: "Logistic Regression".to_string(),
            label: "Unknown".to_string(),
        }]
    );
}
