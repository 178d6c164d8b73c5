//! Per-view state machines. Each transition takes the current state by
//! reference and returns the next one; nothing here touches the network
//! except the `submit_*` drivers, which go through [`AnalysisService`].
//!
//! [`AnalysisService`]: crate::client::AnalysisService

pub mod cohort_upload;
pub mod prediction_form;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("no submission is in flight")]
    NotSubmitting,
}

pub use cohort_upload::{UploadEvent, UploadPhase, UploadState, submit_upload};
pub use prediction_form::{
    FormEvent, FormOutcome, FormPhase, PredictionFormState, submit_prediction,
};
