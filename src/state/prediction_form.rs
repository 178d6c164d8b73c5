use tracing::debug;

use crate::client::AnalysisService;
use crate::model::{Biomarker, PatientInput, PredictionResult};
use crate::state::TransitionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// What the form currently shows below the inputs. Holding one or the other
/// keeps a stale prediction from sitting next to a fresh error.
#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Prediction(Box<PredictionResult>),
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Edit { field: Biomarker, value: String },
    Submit,
    Resolve(Box<PredictionResult>),
    Fail(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PredictionFormState {
    input: PatientInput,
    phase: FormPhase,
    outcome: Option<FormOutcome>,
}

impl PredictionFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: PatientInput) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &PatientInput {
        &self.input
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn outcome(&self) -> Option<&FormOutcome> {
        self.outcome.as_ref()
    }

    pub fn prediction(&self) -> Option<&PredictionResult> {
        match &self.outcome {
            Some(FormOutcome::Prediction(p)) => Some(&**p),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Some(FormOutcome::Error(msg)) => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Submit affordance is disabled only while a request is in flight.
    pub fn can_submit(&self) -> bool {
        self.phase != FormPhase::Submitting
    }

    pub fn apply(&self, event: FormEvent) -> Result<Self, TransitionError> {
        let mut next = self.clone();
        match event {
            FormEvent::Edit { field, value } => {
                next.input.set(field, value);
                if matches!(self.phase, FormPhase::Success | FormPhase::Failed) {
                    next.phase = FormPhase::Idle;
                }
            }
            FormEvent::Submit => {
                if self.phase == FormPhase::Submitting {
                    debug!("prediction submit rejected: already submitting");
                    return Err(TransitionError::AlreadySubmitting);
                }
                next.phase = FormPhase::Submitting;
                next.outcome = None;
            }
            FormEvent::Resolve(result) => {
                self.ensure_submitting()?;
                next.phase = FormPhase::Success;
                next.outcome = Some(FormOutcome::Prediction(result));
            }
            FormEvent::Fail(message) => {
                self.ensure_submitting()?;
                next.phase = FormPhase::Failed;
                next.outcome = Some(FormOutcome::Error(format!(
                    "Prediction failed: {}",
                    message
                )));
            }
        }
        Ok(next)
    }

    fn ensure_submitting(&self) -> Result<(), TransitionError> {
        if self.phase != FormPhase::Submitting {
            debug!(phase = ?self.phase, "prediction resolution without submission");
            return Err(TransitionError::NotSubmitting);
        }
        Ok(())
    }
}

/// Runs one full submit cycle: `Submitting`, the service call, then
/// `Success` or `Failed`. Transport errors end up in the returned state.
pub fn submit_prediction<S: AnalysisService + ?Sized>(
    service: &S,
    state: &PredictionFormState,
) -> Result<PredictionFormState, TransitionError> {
    let submitting = state.apply(FormEvent::Submit)?;
    let event = match service.submit_patient(submitting.input()) {
        Ok(result) => FormEvent::Resolve(Box::new(result)),
        Err(err) => FormEvent::Fail(err.to_string()),
    };
    submitting.apply(event)
}

#[cfg(test)]
#[path = "../../tests/src_inline/state/prediction_form.rs"]
mod tests;
