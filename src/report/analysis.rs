use serde::Serialize;
use tracing::warn;

use crate::model::analysis::correlation_order;
use crate::model::{AnalysisResult, ModelMetrics, ModelReport, RocData, check_analysis};
use crate::report::{NOT_AVAILABLE, format_f64_4, format_optional_4};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocPoint {
    pub fpr: f64,
    pub tpr: f64,
}

/// Chance diagonal drawn under every ROC curve.
pub const REFERENCE_LINE: [RocPoint; 2] = [
    RocPoint { fpr: 0.0, tpr: 0.0 },
    RocPoint { fpr: 1.0, tpr: 1.0 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RocLengthMismatch {
    pub fpr: usize,
    pub tpr: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationCell {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelCard {
    pub name: String,
    pub metrics: Vec<MetricRow>,
    pub auc: String,
    /// `None` when the curve could not be built; the rest of the card still
    /// renders.
    pub roc: Option<Vec<RocPoint>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisView {
    pub correlations: Vec<CorrelationCell>,
    pub models: Vec<ModelCard>,
    pub reference_line: [RocPoint; 2],
    pub issues: Vec<String>,
}

/// No result, no view.
pub fn build_analysis_view(result: Option<&AnalysisResult>) -> Option<AnalysisView> {
    let result = result?;

    let correlations = correlation_order()
        .iter()
        .map(|&pair| CorrelationCell {
            key: pair.key(),
            label: pair.label(),
            value: format_optional_4(result.correlation.get(pair)),
        })
        .collect();

    let models = result.models.iter().map(build_model_card).collect();

    Some(AnalysisView {
        correlations,
        models,
        reference_line: REFERENCE_LINE,
        issues: check_analysis(result)
            .iter()
            .map(|issue| issue.to_string())
            .collect(),
    })
}

pub fn build_model_card(model: &ModelReport) -> ModelCard {
    let roc = match zip_roc(&model.roc_data) {
        Ok(points) => Some(points),
        Err(mismatch) => {
            warn!(
                model = %model.name,
                fpr = mismatch.fpr,
                tpr = mismatch.tpr,
                "ROC arrays differ in length; omitting chart"
            );
            None
        }
    };

    ModelCard {
        name: model.name.clone(),
        metrics: metric_rows(&model.metrics),
        auc: format_f64_4(model.metrics.auc),
        roc,
    }
}

pub fn metric_rows(m: &ModelMetrics) -> Vec<MetricRow> {
    vec![
        MetricRow {
            label: "Sensitivity",
            value: format_f64_4(m.sensitivity),
        },
        MetricRow {
            label: "Specificity",
            value: format_f64_4(m.specificity),
        },
        MetricRow {
            label: "PPV",
            value: format_f64_4(m.ppv),
        },
        MetricRow {
            label: "NPV",
            value: format_f64_4(m.npv),
        },
        MetricRow {
            label: "Accuracy",
            value: format_optional_4(m.accuracy),
        },
        MetricRow {
            label: "CV AUC",
            value: format_cv_auc(m.cv_auc_mean, m.cv_auc_std),
        },
    ]
}

/// `mean ± std` when both are present; a lone std has nothing to qualify.
pub fn format_cv_auc(mean: Option<f64>, std: Option<f64>) -> String {
    match (mean, std) {
        (Some(mean), Some(std)) => format!("{} ± {}", format_f64_4(mean), format_f64_4(std)),
        (Some(mean), None) => format_f64_4(mean),
        (None, _) => NOT_AVAILABLE.to_string(),
    }
}

pub fn zip_roc(roc: &RocData) -> Result<Vec<RocPoint>, RocLengthMismatch> {
    if roc.fpr.len() != roc.tpr.len() {
        return Err(RocLengthMismatch {
            fpr: roc.fpr.len(),
            tpr: roc.tpr.len(),
        });
    }
    Ok(roc
        .fpr
        .iter()
        .zip(&roc.tpr)
        .map(|(&fpr, &tpr)| RocPoint { fpr, tpr })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/analysis.rs"]
mod tests;
