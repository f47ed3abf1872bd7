use super::*;

fn prediction(breed: &str, confidence: &str) -> Prediction {
    Prediction {
        breed: breed.to_owned(),
        confidence: confidence.to_owned(),
    }
}

// =============================================================
// Defaults and file type validation
// =============================================================

#[test]
fn default_state_is_idle() {
    let state = PredictState::default();
    assert!(state.file_name.is_none());
    assert!(state.preview.is_none());
    assert!(!state.loading);
    assert!(state.prediction.is_none());
    assert!(state.error.is_none());
    assert_eq!(state.view(), ResultView::Idle);
}

#[test]
fn accepts_image_content_types() {
    assert!(accepts_file_type("image/png"));
    assert!(accepts_file_type("image/jpeg"));
    assert!(accepts_file_type("image/webp"));
}

#[test]
fn rejects_non_image_content_types() {
    assert!(!accepts_file_type("application/pdf"));
    assert!(!accepts_file_type("text/html"));
    assert!(!accepts_file_type("video/mp4"));
    assert!(!accepts_file_type(""));
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_image_records_file_name() {
    let mut state = PredictState::default();
    state.select_image("cow.jpg");
    assert_eq!(state.file_name.as_deref(), Some("cow.jpg"));
    assert_eq!(state.view(), ResultView::Idle);
}

#[test]
fn select_image_clears_previous_outcome_and_error() {
    let mut state = PredictState::default();
    state.select_image("a.jpg");
    let seq = state.begin_request();
    assert!(state.finish_success(seq, prediction("Gir", "92.3%")));

    state.select_image("b.jpg");
    assert!(state.prediction.is_none());
    assert!(state.error.is_none());
    assert!(state.preview.is_none());

    let seq = state.begin_request();
    assert!(state.finish_failure(seq, "no cattle detected".to_owned()));
    state.select_image("c.jpg");
    assert!(state.error.is_none());
    assert!(state.prediction.is_none());
}

#[test]
fn select_image_replaces_prior_selection() {
    let mut state = PredictState::default();
    state.select_image("a.jpg");
    state.set_preview("data:image/jpeg;base64,AAAA".to_owned());
    state.select_image("b.jpg");
    assert_eq!(state.file_name.as_deref(), Some("b.jpg"));
    assert!(state.preview.is_none());
}

#[test]
fn select_image_supersedes_outstanding_request() {
    let mut state = PredictState::default();
    state.select_image("a.jpg");
    let seq = state.begin_request();

    state.select_image("b.jpg");
    assert!(!state.loading, "new selection clears the in-flight flag");

    // The superseded response must be discarded entirely.
    assert!(!state.finish_success(seq, prediction("Gir", "92.3%")));
    assert!(state.prediction.is_none());
    assert!(!state.finish_failure(seq, "late failure".to_owned()));
    assert!(state.error.is_none());
}

// =============================================================
// Submission gating
// =============================================================

#[test]
fn cannot_submit_without_a_file() {
    let state = PredictState::default();
    assert!(!state.can_submit());
}

#[test]
fn can_submit_with_file_when_not_loading() {
    let mut state = PredictState::default();
    state.select_image("cow.jpg");
    assert!(state.can_submit());
}

#[test]
fn cannot_submit_while_request_in_flight() {
    let mut state = PredictState::default();
    state.select_image("cow.jpg");
    let _seq = state.begin_request();
    assert!(state.loading);
    assert!(!state.can_submit());
}

#[test]
fn begin_request_clears_previous_error() {
    let mut state = PredictState::default();
    state.select_image("cow.jpg");
    let seq = state.begin_request();
    assert!(state.finish_failure(seq, "boom".to_owned()));

    let _seq = state.begin_request();
    assert!(state.error.is_none());
    assert_eq!(state.view(), ResultView::Loading);
}

// =============================================================
// Completion
// =============================================================

#[test]
fn finish_success_publishes_prediction_and_clears_loading() {
    let mut state = PredictState::default();
    state.select_image("cow.jpg");
    let seq = state.begin_request();

    assert!(state.finish_success(seq, prediction("Gir", "92.3%")));
    assert!(!state.loading);
    let outcome = state.prediction.clone().unwrap();
    assert_eq!(outcome.breed, "Gir");
    assert_eq!(outcome.confidence, "92.3%");
    assert_eq!(state.view(), ResultView::Success);
}

#[test]
fn finish_failure_publishes_error_and_clears_loading() {
    let mut state = PredictState::default();
    state.select_image("cow.jpg");
    let seq = state.begin_request();

    assert!(state.finish_failure(seq, "no cattle detected".to_owned()));
    assert!(!state.loading);
    assert!(state.prediction.is_none());
    assert_eq!(state.error.as_deref(), Some("no cattle detected"));
    assert_eq!(state.view(), ResultView::Error);
}

#[test]
fn stale_completion_is_discarded() {
    let mut state = PredictState::default();
    state.select_image("cow.jpg");
    let old = state.begin_request();
    let new = state.begin_request();

    assert!(!state.finish_success(old, prediction("Jersey", "50%")));
    assert!(state.prediction.is_none());
    assert!(state.loading, "only the matching request clears loading");

    assert!(state.finish_success(new, prediction("Gir", "92.3%")));
    assert_eq!(state.prediction.clone().unwrap().breed, "Gir");
}

#[test]
fn success_replaces_previous_outcome() {
    let mut state = PredictState::default();
    state.select_image("cow.jpg");
    let seq = state.begin_request();
    assert!(state.finish_success(seq, prediction("Jersey", "50.0%")));

    let seq = state.begin_request();
    assert!(state.finish_success(seq, prediction("Sahiwal", "88.1%")));
    assert_eq!(state.prediction.clone().unwrap().breed, "Sahiwal");
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_from_success_returns_to_idle() {
    let mut state = PredictState::default();
    state.select_image("cow.jpg");
    state.set_preview("data:image/jpeg;base64,AAAA".to_owned());
    let seq = state.begin_request();
    assert!(state.finish_success(seq, prediction("Gir", "92.3%")));

    state.reset();
    assert!(state.file_name.is_none());
    assert!(state.preview.is_none());
    assert!(state.prediction.is_none());
    assert!(state.error.is_none());
    assert_eq!(state.view(), ResultView::Idle);
}

#[test]
fn reset_from_error_returns_to_idle() {
    let mut state = PredictState::default();
    state.select_image("cow.jpg");
    let seq = state.begin_request();
    assert!(state.finish_failure(seq, "boom".to_owned()));

    state.reset();
    assert!(state.file_name.is_none());
    assert!(state.error.is_none());
    assert_eq!(state.view(), ResultView::Idle);
}

#[test]
fn reset_supersedes_outstanding_request() {
    let mut state = PredictState::default();
    state.select_image("cow.jpg");
    let seq = state.begin_request();

    state.reset();
    assert!(!state.finish_success(seq, prediction("Gir", "92.3%")));
    assert_eq!(state.view(), ResultView::Idle);
}

// =============================================================
// View precedence
// =============================================================

#[test]
fn loading_takes_precedence_over_error_and_success() {
    let state = PredictState {
        loading: true,
        error: Some("boom".to_owned()),
        prediction: Some(prediction("Gir", "92.3%")),
        ..PredictState::default()
    };
    assert_eq!(state.view(), ResultView::Loading);
}

#[test]
fn error_takes_precedence_over_success() {
    let state = PredictState {
        error: Some("boom".to_owned()),
        prediction: Some(prediction("Gir", "92.3%")),
        ..PredictState::default()
    };
    assert_eq!(state.view(), ResultView::Error);
}

// =============================================================
// SelectedFile holder
// =============================================================

#[test]
fn selected_file_default_is_empty() {
    let holder = SelectedFile::default();
    assert!(holder.is_empty());
}

#[test]
fn selected_file_clear_is_empty() {
    let mut holder = SelectedFile::default();
    holder.clear();
    assert!(holder.is_empty());
}
