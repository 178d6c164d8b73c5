use super::*;
use crate::client::TransportError;
use crate::support::{StubService, sample_prediction};

fn edit(field: Biomarker, value: &str) -> FormEvent {
    FormEvent::Edit {
        field,
        value: value.to_string(),
    }
}

#[test]
fn test_edits_while_idle_stay_idle() {
    let state = PredictionFormState::new()
        .apply(edit(Biomarker::Lactate, "2.5"))
        .unwrap()
        .apply(edit(Biomarker::Pct, "1.2"))
        .unwrap();
    assert_eq!(state.phase(), FormPhase::Idle);
    assert_eq!(state.input().lactate, "2.5");
    assert_eq!(state.input().pct, "1.2");
    assert!(state.outcome().is_none());
}

#[test]
fn test_double_submit_rejected() {
    let submitting = PredictionFormState::new().apply(FormEvent::Submit).unwrap();
    assert_eq!(submitting.phase(), FormPhase::Submitting);
    assert!(!submitting.can_submit());
    assert_eq!(
        submitting.apply(FormEvent::Submit),
        Err(TransitionError::AlreadySubmitting)
    );
}

#[test]
fn test_resolution_requires_submission() {
    let idle = PredictionFormState::new();
    assert_eq!(
        idle.apply(FormEvent::Fail("x".to_string())),
        Err(TransitionError::NotSubmitting)
    );
    assert_eq!(
        idle.apply(FormEvent::Resolve(Box::new(sample_prediction()))),
        Err(TransitionError::NotSubmitting)
    );
}

#[test]
fn test_failure_clears_previous_prediction() {
    let success = PredictionFormState::new()
        .apply(FormEvent::Submit)
        .unwrap()
        .apply(FormEvent::Resolve(Box::new(sample_prediction())))
        .unwrap();
    assert_eq!(success.phase(), FormPhase::Success);
    assert!(success.prediction().is_some());

    let failed = success
        .apply(FormEvent::Submit)
        .unwrap()
        .apply(FormEvent::Fail("Network Error".to_string()))
        .unwrap();
    assert_eq!(failed.phase(), FormPhase::Failed);
    assert!(failed.prediction().is_none());
    assert_eq!(failed.error(), Some("Prediction failed: Network Error"));
    assert!(failed.can_submit());
}

#[test]
fn test_success_clears_previous_error() {
    let failed = PredictionFormState::new()
        .apply(FormEvent::Submit)
        .unwrap()
        .apply(FormEvent::Fail("boom".to_string()))
        .unwrap();
    let success = failed
        .apply(FormEvent::Submit)
        .unwrap()
        .apply(FormEvent::Resolve(Box::new(sample_prediction())))
        .unwrap();
    assert!(success.error().is_none());
    assert!(success.prediction().is_some());
}

#[test]
fn test_edit_after_result_returns_to_idle() {
    let success = PredictionFormState::new()
        .apply(FormEvent::Submit)
        .unwrap()
        .apply(FormEvent::Resolve(Box::new(sample_prediction())))
        .unwrap();
    let edited = success.apply(edit(Biomarker::Crp, "90")).unwrap();
    assert_eq!(edited.phase(), FormPhase::Idle);
    assert!(edited.prediction().is_some());
    assert_eq!(edited.input().crp, "90");
}

#[test]
fn test_submit_all_empty_sends_six_empty_strings() {
    let stub = StubService::with_prediction(Ok(sample_prediction()));
    let state = submit_prediction(&stub, &PredictionFormState::new()).unwrap();
    assert_eq!(state.phase(), FormPhase::Success);

    let sent = stub.patients.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], PatientInput::default());
    let value = serde_json::to_value(&sent[0]).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 6);
}

#[test]
fn test_submit_surfaces_server_message() {
    let stub = StubService::with_prediction(Err(TransportError::Server {
        status: 500,
        message: "model unavailable".to_string(),
    }));
    let state = submit_prediction(&stub, &PredictionFormState::new()).unwrap();
    assert_eq!(state.phase(), FormPhase::Failed);
    assert_eq!(state.error(), Some("Prediction failed: model unavailable"));
}
