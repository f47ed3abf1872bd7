#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Severity of a transient notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub level: ToastLevel,
    pub title: String,
    pub message: String,
}

/// Queue of active toasts, provided as shared context.
///
/// The predict state machine never touches this directly; components
/// push notifications here so user alerting stays a presentation
/// concern.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its identifier for later dismissal.
    pub fn push(&mut self, level: ToastLevel, title: &str, message: &str) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            level,
            title: title.to_owned(),
            message: message.to_owned(),
        });
        id
    }

    /// Remove the toast with the given identifier, if still present.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}
