use super::*;

// =============================================================
// Push
// =============================================================

#[test]
fn push_appends_in_order() {
    let mut state = ToastState::default();
    state.push(ToastLevel::Success, "Prediction completed!", "Identified as Gir");
    state.push(ToastLevel::Error, "Prediction failed", "Enter a valid image and try again.");

    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].level, ToastLevel::Success);
    assert_eq!(state.toasts[1].level, ToastLevel::Error);
    assert_eq!(state.toasts[1].title, "Prediction failed");
}

#[test]
fn push_returns_distinct_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Error, "t", "m");
    let b = state.push(ToastLevel::Error, "t", "m");
    assert_ne!(a, b);
}

// =============================================================
// Dismiss
// =============================================================

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastLevel::Success, "a", "first");
    let b = state.push(ToastLevel::Error, "b", "second");

    state.dismiss(&a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastLevel::Success, "a", "first");
    state.dismiss("no-such-toast");
    assert_eq!(state.toasts.len(), 1);
}
