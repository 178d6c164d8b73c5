use serde::{Deserialize, Serialize};

/// Response body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub correlation: Correlation,
    #[serde(default)]
    pub models: Vec<ModelReport>,
}

/// Pairwise correlations; the service may leave any pair out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Correlation {
    #[serde(rename = "LAR_PCT", default, skip_serializing_if = "Option::is_none")]
    pub lar_pct: Option<f64>,
    #[serde(rename = "LAR_Outcome", default, skip_serializing_if = "Option::is_none")]
    pub lar_outcome: Option<f64>,
    #[serde(rename = "PCT_Outcome", default, skip_serializing_if = "Option::is_none")]
    pub pct_outcome: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationPair {
    LarPct,
    LarOutcome,
    PctOutcome,
}

impl CorrelationPair {
    pub fn key(self) -> &'static str {
        match self {
            Self::LarPct => "LAR_PCT",
            Self::LarOutcome => "LAR_Outcome",
            Self::PctOutcome => "PCT_Outcome",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LarPct => "LAR vs PCT",
            Self::LarOutcome => "LAR vs Outcome",
            Self::PctOutcome => "PCT vs Outcome",
        }
    }
}

pub fn correlation_order() -> &'static [CorrelationPair] {
    &[
        CorrelationPair::LarPct,
        CorrelationPair::LarOutcome,
        CorrelationPair::PctOutcome,
    ]
}

impl Correlation {
    pub fn get(&self, pair: CorrelationPair) -> Option<f64> {
        match pair {
            CorrelationPair::LarPct => self.lar_pct,
            CorrelationPair::LarOutcome => self.lar_outcome,
            CorrelationPair::PctOutcome => self.pct_outcome,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReport {
    pub name: String,
    pub metrics: ModelMetrics,
    pub roc_data: RocData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    #[serde(rename = "Sensitivity")]
    pub sensitivity: f64,
    #[serde(rename = "Specificity")]
    pub specificity: f64,
    #[serde(rename = "PPV")]
    pub ppv: f64,
    #[serde(rename = "NPV")]
    pub npv: f64,
    #[serde(rename = "AUC")]
    pub auc: f64,
    #[serde(rename = "Accuracy", default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    #[serde(rename = "CV_AUC_Mean", default, skip_serializing_if = "Option::is_none")]
    pub cv_auc_mean: Option<f64>,
    #[serde(rename = "CV_AUC_Std", default, skip_serializing_if = "Option::is_none")]
    pub cv_auc_std: Option<f64>,
}

/// Index-aligned ROC coordinates: point `i` is `(fpr[i], tpr[i])`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RocData {
    #[serde(default)]
    pub fpr: Vec<f64>,
    #[serde(default)]
    pub tpr: Vec<f64>,
}
