use std::cmp::Ordering;

use serde::Serialize;

use crate::model::prediction::calculated_feature_order;
use crate::model::{
    CalculatedFeatures, IndividualModel, OrderedMap, Outcome, PredictionResult, check_prediction,
};
use crate::report::risk::{BadgeStyle, PanelStyle, Tone, badge_style, outcome_tone, panel_style, tone_for};
use crate::report::{format_fixed, format_percent};

pub const CLINICAL_DISCLAIMER: &str = "This prediction is generated by machine learning models trained on historical data and should be used as a decision support tool only. Clinical judgment and comprehensive patient assessment by qualified healthcare professionals are essential. This tool does not replace professional medical diagnosis or treatment decisions.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummary {
    pub risk_level: String,
    pub tone: Tone,
    pub panel: PanelStyle,
    pub badge: BadgeStyle,
    pub mortality: String,
    pub survival: String,
    /// Already on a 0–100 scale.
    pub confidence: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberCard {
    pub model: String,
    pub probability: String,
    pub prediction: Outcome,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnsembleSummary {
    pub headline: String,
    pub agreement: String,
    pub members: Vec<MemberCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureTile {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportanceBar {
    pub feature: String,
    pub importance: f64,
    pub percent: String,
    /// Bar length as a share of the full track, capped to `[0, 100]`.
    pub width_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionView {
    pub risk: RiskSummary,
    pub ensemble: EnsembleSummary,
    pub biomarkers: Vec<FeatureTile>,
    pub importance: Vec<ImportanceBar>,
    pub issues: Vec<String>,
    pub disclaimer: &'static str,
}

pub fn build_prediction_view(result: &PredictionResult) -> PredictionView {
    let color = result.risk_color.as_ref();
    let risk = RiskSummary {
        risk_level: result.risk_level.clone(),
        tone: tone_for(color),
        panel: panel_style(color),
        badge: badge_style(color),
        mortality: format_percent(result.ensemble_probability_expired),
        survival: format_percent(result.probability_survived),
        confidence: format_fixed(result.confidence_score, 1),
        recommendation: result.clinical_recommendation.clone(),
    };

    let ensemble = EnsembleSummary {
        headline: format!(
            "Prediction based on {} advanced machine learning models",
            result.num_models_used
        ),
        agreement: result.model_agreement.clone(),
        members: member_cards(result.individual_models.as_deref()),
    };

    PredictionView {
        risk,
        ensemble,
        biomarkers: feature_tiles(&result.calculated_features),
        importance: result
            .feature_importance
            .as_ref()
            .map(importance_bars)
            .unwrap_or_default(),
        issues: check_prediction(result)
            .iter()
            .map(|issue| issue.to_string())
            .collect(),
        disclaimer: CLINICAL_DISCLAIMER,
    }
}

pub fn member_cards(models: Option<&[IndividualModel]>) -> Vec<MemberCard> {
    models
        .unwrap_or_default()
        .iter()
        .map(|m| MemberCard {
            model: m.model.clone(),
            probability: format_percent(m.probability),
            prediction: m.prediction.clone(),
            tone: outcome_tone(&m.prediction),
        })
        .collect()
}

/// One tile per feature the service reported a value for. Null features are
/// dropped, not shown as unavailable.
pub fn feature_tiles(features: &CalculatedFeatures) -> Vec<FeatureTile> {
    calculated_feature_order()
        .iter()
        .filter_map(|&feature| {
            features.get(feature).map(|v| FeatureTile {
                key: feature.key(),
                label: feature.label(),
                value: format_fixed(v, 2),
            })
        })
        .collect()
}

/// Entries by descending importance. The sort is stable, so equal values keep
/// the order the service sent them in.
pub fn sorted_importance(importance: &OrderedMap<f64>) -> Vec<(&str, f64)> {
    let mut entries = importance.iter().map(|(k, &v)| (k, v)).collect::<Vec<_>>();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    entries
}

pub fn importance_bars(importance: &OrderedMap<f64>) -> Vec<ImportanceBar> {
    sorted_importance(importance)
        .into_iter()
        .map(|(feature, v)| ImportanceBar {
            feature: feature.to_string(),
            importance: v,
            percent: format_percent(v),
            width_percent: (v * 100.0).clamp(0.0, 100.0),
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/prediction.rs"]
mod tests;
