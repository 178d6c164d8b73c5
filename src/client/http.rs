use reqwest::blocking::Response;
use reqwest::blocking::multipart::{Form, Part};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::model::{AnalysisResult, PatientInput, PredictionResult, check_analysis, check_prediction};

use super::error::generic_status_message;
use super::{CSV_CONTENT_TYPE, Client, CohortUpload, PATH_ANALYZE, PATH_PREDICT, TransportError};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl Client {
    pub(super) fn post_cohort_http(
        &self,
        upload: &CohortUpload,
    ) -> Result<AnalysisResult, TransportError> {
        let url = self.config.url_for(PATH_ANALYZE);
        let part = Part::bytes(upload.bytes.clone())
            .file_name(upload.filename.clone())
            .mime_str(CSV_CONTENT_TYPE)
            .map_err(|err| TransportError::Request {
                endpoint: PATH_ANALYZE,
                reason: err.to_string(),
            })?;
        let form = Form::new().part("file", part);

        info!(
            endpoint = PATH_ANALYZE,
            filename = %upload.filename,
            bytes = upload.bytes.len(),
            "submitting cohort for analysis"
        );
        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|err| network_error(PATH_ANALYZE, &err))?;

        let result: AnalysisResult = read_json(response, PATH_ANALYZE)?;
        for issue in check_analysis(&result) {
            warn!(issue = %issue, "analysis payload outside contract");
        }
        info!(models = result.models.len(), "cohort analysis received");
        Ok(result)
    }

    pub(super) fn post_patient_http(
        &self,
        input: &PatientInput,
    ) -> Result<PredictionResult, TransportError> {
        let url = self.config.url_for(PATH_PREDICT);
        info!(
            endpoint = PATH_PREDICT,
            missing = input.missing().len(),
            "submitting patient for prediction"
        );
        let response = self
            .http
            .post(&url)
            .json(input)
            .send()
            .map_err(|err| network_error(PATH_PREDICT, &err))?;

        let result: PredictionResult = read_json(response, PATH_PREDICT)?;
        for issue in check_prediction(&result) {
            warn!(issue = %issue, "prediction payload outside contract");
        }
        info!(
            risk_level = %result.risk_level,
            models = result.num_models_used,
            "prediction received"
        );
        Ok(result)
    }
}

fn network_error(endpoint: &'static str, err: &reqwest::Error) -> TransportError {
    warn!(endpoint, error = %err, "no response from analysis service");
    TransportError::Network(err.to_string())
}

fn read_json<T: DeserializeOwned>(
    response: Response,
    endpoint: &'static str,
) -> Result<T, TransportError> {
    let status = response.status();
    let body = response
        .bytes()
        .map_err(|err| network_error(endpoint, &err))?;
    debug!(endpoint, status = status.as_u16(), bytes = body.len(), "response read");

    if !status.is_success() {
        let status = status.as_u16();
        let message = server_message(status, &body);
        warn!(endpoint, status, message = %message, "analysis service rejected request");
        return Err(TransportError::Server { status, message });
    }

    serde_json::from_slice(&body).map_err(|err| TransportError::Decode {
        endpoint,
        reason: err.to_string(),
    })
}

/// Message to surface for a non-success response: the body's `error` field
/// verbatim, or a generic status message.
pub(super) fn server_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| generic_status_message(status))
}
