//! Transient toast notifications.
//!
//! The toast queue lives in [`ToastState`] context; this module owns
//! the presentation side: rendering the queue and timing out entries.

use leptos::prelude::*;

use crate::state::toast::{ToastLevel, ToastState};

/// How long a toast stays on screen.
#[cfg(feature = "hydrate")]
const TOAST_TTL: std::time::Duration = std::time::Duration::from_secs(4);

/// Push a notification and schedule its automatic dismissal.
pub fn notify(toasts: RwSignal<ToastState>, level: ToastLevel, title: &str, message: &str) {
    let id = toasts
        .try_update(|t| t.push(level, title, message))
        .unwrap_or_default();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_TTL).await;
        toasts.update(|t| t.dismiss(&id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Overlay rendering the active toasts with manual dismiss buttons.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .iter()
                    .map(|toast| {
                        let class = match toast.level {
                            ToastLevel::Success => "toast toast--success",
                            ToastLevel::Error => "toast toast--error",
                        };
                        let id = toast.id.clone();
                        view! {
                            <div class=class role="status">
                                <div class="toast__body">
                                    <strong class="toast__title">{toast.title.clone()}</strong>
                                    <span class="toast__message">{toast.message.clone()}</span>
                                </div>
                                <button
                                    class="toast__close"
                                    on:click=move |_| toasts.update(|t| t.dismiss(&id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
