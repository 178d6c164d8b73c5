pub mod error;
mod http;

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client as HttpClient;

use crate::config::ApiConfig;
use crate::model::{AnalysisResult, PatientInput, PredictionResult};

pub use error::{ConfigError, TransportError, ValidationError};

pub const PATH_ANALYZE: &str = "/analyze";
pub const PATH_PREDICT: &str = "/predict";
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// A cohort file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CohortUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl CohortUpload {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.csv".to_string());
        Ok(Self { filename, bytes })
    }
}

/// The two calls the views make against the analysis service.
pub trait AnalysisService {
    fn submit_cohort(&self, upload: &CohortUpload) -> Result<AnalysisResult, TransportError>;

    fn submit_patient(&self, input: &PatientInput) -> Result<PredictionResult, TransportError>;
}

/// Blocking HTTP client for the analysis service.
pub struct Client {
    config: ApiConfig,
    http: HttpClient,
}

impl Client {
    pub fn new(config: ApiConfig) -> Result<Self, TransportError> {
        // Cohort analysis trains models server-side; wait as long as it takes.
        let http = HttpClient::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|err| TransportError::Request {
                endpoint: "client",
                reason: err.to_string(),
            })?;
        Ok(Self { config, http })
    }
}

impl AnalysisService for Client {
    fn submit_cohort(&self, upload: &CohortUpload) -> Result<AnalysisResult, TransportError> {
        self.post_cohort_http(upload)
    }

    fn submit_patient(&self, input: &PatientInput) -> Result<PredictionResult, TransportError> {
        self.post_patient_http(input)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/client/tests.rs"]
mod tests;
