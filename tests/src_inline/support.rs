use std::cell::RefCell;

use crate::client::{AnalysisService, CohortUpload, TransportError};
use crate::model::{AnalysisResult, PatientInput, PredictionResult};

pub const ANALYSIS_JSON: &str = r#"{
  "correlation": {"LAR_PCT": 0.31234, "LAR_Outcome": -0.12345, "PCT_Outcome": 0.2},
  "models": [
    {
      "name": "Logistic Regression",
      "metrics": {
        "Sensitivity": 0.8, "Specificity": 0.75, "PPV": 0.6, "NPV": 0.9, "AUC": 0.8123,
        "Accuracy": 0.77, "CV_AUC_Mean": 0.8, "CV_AUC_Std": 0.05
      },
      "roc_data": {"fpr": [0.0, 0.5, 1.0], "tpr": [0.0, 0.8, 1.0]}
    },
    {
      "name": "Random Forest",
      "metrics": {
        "Sensitivity": 0.7, "Specificity": 0.8, "PPV": 0.65, "NPV": 0.85, "AUC": 0.79
      },
      "roc_data": {"fpr": [0.0, 0.4, 1.0], "tpr": [0.0, 0.7]}
    }
  ]
}"#;

pub const PREDICTION_JSON: &str = r#"{
  "ensemble_probability_expired": 0.237,
  "probability_survived": 0.763,
  "confidence_score": 87.25,
  "risk_level": "Moderate Risk",
  "risk_color": "orange",
  "clinical_recommendation": "Close monitoring advised.",
  "num_models_used": 3,
  "model_agreement": "2/3 models predict survival",
  "individual_models": [
    {"model": "XGBoost", "probability": 0.41, "prediction": "Survived"},
    {"model": "Random Forest", "probability": 0.55, "prediction": "Expired"},
    {"model": "Logistic Regression", "probability": 0.12, "prediction": "Survived"}
  ],
  "calculated_features": {
    "LAR": null, "Lactate": 2.5, "Albumin": 3.1, "PCT": null,
    "CRP": 120.0, "NLR": 8.456, "APACHE": 18.0
  },
  "feature_importance": {"LAR": 0.1, "PCT": 0.4, "CRP": 0.2}
}"#;

/// Required fields only.
pub const MINIMAL_PREDICTION_JSON: &str = r#"{
  "ensemble_probability_expired": 0.9,
  "probability_survived": 0.1,
  "confidence_score": 64.0,
  "risk_level": "High Risk",
  "clinical_recommendation": "Escalate care.",
  "num_models_used": 1,
  "model_agreement": "single model"
}"#;

pub fn sample_analysis() -> AnalysisResult {
    serde_json::from_str(ANALYSIS_JSON).unwrap()
}

pub fn sample_prediction() -> PredictionResult {
    serde_json::from_str(PREDICTION_JSON).unwrap()
}

pub fn minimal_prediction() -> PredictionResult {
    serde_json::from_str(MINIMAL_PREDICTION_JSON).unwrap()
}

/// In-memory service that records what it was asked and replays one canned
/// answer per endpoint.
pub struct StubService {
    pub analysis: RefCell<Option<Result<AnalysisResult, TransportError>>>,
    pub prediction: RefCell<Option<Result<PredictionResult, TransportError>>>,
    pub uploads: RefCell<Vec<CohortUpload>>,
    pub patients: RefCell<Vec<PatientInput>>,
}

impl StubService {
    pub fn new() -> Self {
        Self {
            analysis: RefCell::new(None),
            prediction: RefCell::new(None),
            uploads: RefCell::new(Vec::new()),
            patients: RefCell::new(Vec::new()),
        }
    }

    pub fn with_analysis(result: Result<AnalysisResult, TransportError>) -> Self {
        let stub = Self::new();
        *stub.analysis.borrow_mut() = Some(result);
        stub
    }

    pub fn with_prediction(result: Result<PredictionResult, TransportError>) -> Self {
        let stub = Self::new();
        *stub.prediction.borrow_mut() = Some(result);
        stub
    }
}

impl AnalysisService for StubService {
    fn submit_cohort(&self, upload: &CohortUpload) -> Result<AnalysisResult, TransportError> {
        self.uploads.borrow_mut().push(upload.clone());
        self.analysis
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(TransportError::Network("stub exhausted".to_string())))
    }

    fn submit_patient(&self, input: &PatientInput) -> Result<PredictionResult, TransportError> {
        self.patients.borrow_mut().push(input.clone());
        self.prediction
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(TransportError::Network("stub exhausted".to_string())))
    }
}
