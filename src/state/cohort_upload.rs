use tracing::debug;

use crate::client::{AnalysisService, CohortUpload, ValidationError};
use crate::model::AnalysisResult;
use crate::state::TransitionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UploadEvent {
    SelectFile(CohortUpload),
    ClearFile,
    Submit,
    Resolve(Box<AnalysisResult>),
    Fail(String),
}

/// Upload view state. A failed upload keeps the last good analysis on
/// screen; only a new success replaces it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadState {
    file: Option<CohortUpload>,
    phase: UploadPhase,
    error: Option<String>,
    analysis: Option<AnalysisResult>,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self) -> Option<&CohortUpload> {
        self.file.as_ref()
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        self.phase == UploadPhase::Idle && self.file.is_some()
    }

    pub fn apply(&self, event: UploadEvent) -> Result<Self, TransitionError> {
        let mut next = self.clone();
        match event {
            UploadEvent::SelectFile(file) => {
                next.file = Some(file);
                next.error = None;
            }
            UploadEvent::ClearFile => {
                next.file = None;
                next.error = None;
            }
            UploadEvent::Submit => {
                if self.phase == UploadPhase::Submitting {
                    debug!("upload submit rejected: already submitting");
                    return Err(TransitionError::AlreadySubmitting);
                }
                if self.file.is_none() {
                    next.error = Some(ValidationError::NoFileSelected.to_string());
                    return Ok(next);
                }
                next.phase = UploadPhase::Submitting;
                next.error = None;
            }
            UploadEvent::Resolve(result) => {
                self.ensure_submitting()?;
                next.phase = UploadPhase::Idle;
                next.analysis = Some(*result);
            }
            UploadEvent::Fail(message) => {
                self.ensure_submitting()?;
                next.phase = UploadPhase::Idle;
                next.error = Some(format!("Upload failed: {}", message));
            }
        }
        Ok(next)
    }

    fn ensure_submitting(&self) -> Result<(), TransitionError> {
        if self.phase != UploadPhase::Submitting {
            debug!(phase = ?self.phase, "upload resolution without submission");
            return Err(TransitionError::NotSubmitting);
        }
        Ok(())
    }
}

/// Runs one submit cycle. Without a selected file the service is never
/// called and the returned state carries the validation message.
pub fn submit_upload<S: AnalysisService + ?Sized>(
    service: &S,
    state: &UploadState,
) -> Result<UploadState, TransitionError> {
    let submitting = state.apply(UploadEvent::Submit)?;
    let Some(file) = submitting.file.as_ref() else {
        return Ok(submitting);
    };
    let event = match service.submit_cohort(file) {
        Ok(result) => UploadEvent::Resolve(Box::new(result)),
        Err(err) => UploadEvent::Fail(err.to_string()),
    };
    submitting.apply(event)
}

#[cfg(test)]
#[path = "../../tests/src_inline/state/cohort_upload.rs"]
mod tests;
