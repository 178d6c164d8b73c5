//! Soft checks on decoded payloads.
//!
//! Decoding already enforces the shape; these checks cover the value ranges
//! and cross-field relations the service promises but the client does not
//! enforce. Issues are reported, never raised.

use std::collections::BTreeSet;
use std::fmt;

use crate::model::analysis::{AnalysisResult, correlation_order};
use crate::model::prediction::PredictionResult;
use crate::model::risk::Outcome;

/// Allowed gap between `probability_survived` and `1 - expired`.
pub const COMPLEMENT_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub enum ContractIssue {
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
    ProbabilitiesNotComplementary {
        expired: f64,
        survived: f64,
    },
    NoModelsUsed,
    DuplicateModelName(String),
    UnrecognizedOutcome {
        model: String,
        label: String,
    },
    RocLengthMismatch {
        model: String,
        fpr: usize,
        tpr: usize,
    },
}

impl fmt::Display for ContractIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(f, "{} = {} outside [{}, {}]", field, value, min, max),
            Self::ProbabilitiesNotComplementary { expired, survived } => write!(
                f,
                "probability_survived {} does not complement ensemble_probability_expired {}",
                survived, expired
            ),
            Self::NoModelsUsed => f.write_str("num_models_used is zero"),
            Self::DuplicateModelName(name) => write!(f, "duplicate model name '{}'", name),
            Self::UnrecognizedOutcome { model, label } => write!(
                f,
                "model '{}' predicted unrecognized outcome '{}'",
                model, label
            ),
            Self::RocLengthMismatch { model, fpr, tpr } => write!(
                f,
                "model '{}' has {} fpr points but {} tpr points",
                model, fpr, tpr
            ),
        }
    }
}

pub fn check_analysis(result: &AnalysisResult) -> Vec<ContractIssue> {
    let mut issues = Vec::new();

    for &pair in correlation_order() {
        if let Some(v) = result.correlation.get(pair) {
            check_range(&mut issues, pair.key(), v, -1.0, 1.0);
        }
    }

    let mut seen = BTreeSet::new();
    for model in &result.models {
        if !seen.insert(model.name.as_str()) {
            issues.push(ContractIssue::DuplicateModelName(model.name.clone()));
        }
        let m = &model.metrics;
        let metrics = [
            ("Sensitivity", Some(m.sensitivity)),
            ("Specificity", Some(m.specificity)),
            ("PPV", Some(m.ppv)),
            ("NPV", Some(m.npv)),
            ("AUC", Some(m.auc)),
            ("Accuracy", m.accuracy),
            ("CV_AUC_Mean", m.cv_auc_mean),
            ("CV_AUC_Std", m.cv_auc_std),
        ];
        for (name, value) in metrics {
            if let Some(v) = value {
                check_range(&mut issues, &format!("{}.{}", model.name, name), v, 0.0, 1.0);
            }
        }
        let roc = &model.roc_data;
        if roc.fpr.len() != roc.tpr.len() {
            issues.push(ContractIssue::RocLengthMismatch {
                model: model.name.clone(),
                fpr: roc.fpr.len(),
                tpr: roc.tpr.len(),
            });
        }
    }

    issues
}

pub fn check_prediction(result: &PredictionResult) -> Vec<ContractIssue> {
    let mut issues = Vec::new();
    let expired = result.ensemble_probability_expired;
    let survived = result.probability_survived;

    check_range(&mut issues, "ensemble_probability_expired", expired, 0.0, 1.0);
    check_range(&mut issues, "probability_survived", survived, 0.0, 1.0);
    if ((1.0 - expired) - survived).abs() > COMPLEMENT_TOLERANCE {
        issues.push(ContractIssue::ProbabilitiesNotComplementary { expired, survived });
    }
    check_range(
        &mut issues,
        "confidence_score",
        result.confidence_score,
        0.0,
        100.0,
    );
    if result.num_models_used == 0 {
        issues.push(ContractIssue::NoModelsUsed);
    }

    if let Some(models) = &result.individual_models {
        for m in models {
            check_range(
                &mut issues,
                &format!("{}.probability", m.model),
                m.probability,
                0.0,
                1.0,
            );
            if let Outcome::Unrecognized(label) = &m.prediction {
                issues.push(ContractIssue::UnrecognizedOutcome {
                    model: m.model.clone(),
                    label: label.clone(),
                });
            }
        }
    }

    if let Some(importance) = &result.feature_importance {
        for (name, &v) in importance.iter() {
            check_range(
                &mut issues,
                &format!("feature_importance.{}", name),
                v,
                0.0,
                f64::INFINITY,
            );
        }
    }

    issues
}

fn check_range(issues: &mut Vec<ContractIssue>, field: &str, value: f64, min: f64, max: f64) {
    if !(value >= min && value <= max) {
        issues.push(ContractIssue::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/contract.rs"]
mod tests;
