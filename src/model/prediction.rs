use serde::{Deserialize, Serialize};

use crate::model::ordered::OrderedMap;
use crate::model::risk::{Outcome, RiskColor};

/// Response body of `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub ensemble_probability_expired: f64,
    pub probability_survived: f64,
    pub confidence_score: f64,
    pub risk_level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_color: Option<RiskColor>,
    pub clinical_recommendation: String,
    pub num_models_used: u32,
    pub model_agreement: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual_models: Option<Vec<IndividualModel>>,
    #[serde(default)]
    pub calculated_features: CalculatedFeatures,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_importance: Option<OrderedMap<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndividualModel {
    pub model: String,
    pub probability: f64,
    pub prediction: Outcome,
}

/// Feature values the service actually used; `None` means neither supplied
/// nor derived.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatedFeatures {
    #[serde(rename = "LAR", default)]
    pub lar: Option<f64>,
    #[serde(rename = "Lactate", default)]
    pub lactate: Option<f64>,
    #[serde(rename = "Albumin", default)]
    pub albumin: Option<f64>,
    #[serde(rename = "PCT", default)]
    pub pct: Option<f64>,
    #[serde(rename = "CRP", default)]
    pub crp: Option<f64>,
    #[serde(rename = "NLR", default)]
    pub nlr: Option<f64>,
    #[serde(rename = "APACHE", default)]
    pub apache: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatedFeature {
    Lar,
    Lactate,
    Albumin,
    Pct,
    Crp,
    Nlr,
    Apache,
}

/// Display order of the biomarker tiles.
pub fn calculated_feature_order() -> &'static [CalculatedFeature] {
    &[
        CalculatedFeature::Lar,
        CalculatedFeature::Lactate,
        CalculatedFeature::Albumin,
        CalculatedFeature::Pct,
        CalculatedFeature::Crp,
        CalculatedFeature::Nlr,
        CalculatedFeature::Apache,
    ]
}

impl CalculatedFeature {
    pub fn key(self) -> &'static str {
        match self {
            Self::Lar => "LAR",
            Self::Lactate => "Lactate",
            Self::Albumin => "Albumin",
            Self::Pct => "PCT",
            Self::Crp => "CRP",
            Self::Nlr => "NLR",
            Self::Apache => "APACHE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Lar => "LAR (Lactate/Albumin)",
            Self::Apache => "APACHE II",
            other => other.key(),
        }
    }
}

impl CalculatedFeatures {
    pub fn get(&self, feature: CalculatedFeature) -> Option<f64> {
        match feature {
            CalculatedFeature::Lar => self.lar,
            CalculatedFeature::Lactate => self.lactate,
            CalculatedFeature::Albumin => self.albumin,
            CalculatedFeature::Pct => self.pct,
            CalculatedFeature::Crp => self.crp,
            CalculatedFeature::Nlr => self.nlr,
            CalculatedFeature::Apache => self.apache,
        }
    }
}
