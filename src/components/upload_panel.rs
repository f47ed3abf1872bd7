//! Upload panel: file intake (picker + drag-and-drop), preview, and the
//! submit action that drives the prediction request.

use leptos::prelude::*;

use crate::components::toast_host::notify;
use crate::net::api::PredictorConfig;
use crate::state::predict::{PredictState, SelectedFile};
use crate::state::toast::{ToastLevel, ToastState};

/// Validate and accept a file from either intake path.
///
/// Non-image types are rejected with a toast and no state change.
/// Accepted files replace the current selection, clear any previous
/// outcome or error, and kick off the async preview read.
#[cfg(feature = "hydrate")]
fn accept_file(
    file: web_sys::File,
    predict: RwSignal<PredictState>,
    selected: RwSignal<SelectedFile, LocalStorage>,
    toasts: RwSignal<ToastState>,
) {
    if !crate::state::predict::accepts_file_type(&file.type_()) {
        notify(
            toasts,
            ToastLevel::Error,
            "Invalid file type",
            "Please select an image file.",
        );
        return;
    }

    predict.update(|p| p.select_image(&file.name()));
    selected.update(|s| s.file = Some(file.clone()));
    crate::util::file_reader::read_as_data_url(&file, move |url| {
        predict.update(|p| p.set_preview(url));
    });
}

/// Upload card: drop zone, hidden file input, preview, and submit.
#[component]
pub fn UploadPanel() -> impl IntoView {
    let predict = expect_context::<RwSignal<PredictState>>();
    let selected = expect_context::<RwSignal<SelectedFile, LocalStorage>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = use_context::<PredictorConfig>().unwrap_or_default();
    // Copy handle so the submit closure stays `Copy` for reuse in the view.
    let endpoint = StoredValue::new(config.endpoint);

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|list| list.get(0)) {
                accept_file(file, predict, selected, toasts);
            }
            // Allow re-selecting the same file to fire another change event.
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    // Drag events must suppress the browser default so dropping a file
    // does not navigate away to display it.
    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        predict.update(|p| p.drag_over = true);
    };

    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        predict.update(|p| p.drag_over = false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        predict.update(|p| p.drag_over = false);
        #[cfg(feature = "hydrate")]
        {
            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|list| list.get(0));
            if let Some(file) = file {
                accept_file(file, predict, selected, toasts);
            }
        }
    };

    let on_submit = move |()| {
        if selected.get_untracked().is_empty() {
            notify(
                toasts,
                ToastLevel::Error,
                "No image selected",
                "Please select an image first.",
            );
            return;
        }
        if !predict.get_untracked().can_submit() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = selected.get_untracked().file else {
                return;
            };
            let endpoint = endpoint.get_value();
            let seq = predict
                .try_update(PredictState::begin_request)
                .unwrap_or_default();

            leptos::task::spawn_local(async move {
                match crate::net::api::request_prediction(&endpoint, &file).await {
                    Ok(prediction) => {
                        let breed = prediction.breed.clone();
                        let applied = predict
                            .try_update(|p| p.finish_success(seq, prediction))
                            .unwrap_or(false);
                        if applied {
                            notify(
                                toasts,
                                ToastLevel::Success,
                                "Prediction completed!",
                                &format!("Identified as {breed}"),
                            );
                        }
                    }
                    Err(message) => {
                        // The specific message goes to the results panel;
                        // the toast stays generic.
                        let applied = predict
                            .try_update(|p| p.finish_failure(seq, message))
                            .unwrap_or(false);
                        if applied {
                            notify(
                                toasts,
                                ToastLevel::Error,
                                "Prediction failed",
                                "Enter a valid image and try again.",
                            );
                        }
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = endpoint;
        }
    };

    let zone_class = move || {
        if predict.get().drag_over {
            "upload-zone upload-zone--active"
        } else {
            "upload-zone"
        }
    };

    view! {
        <section class="card upload-panel">
            <header class="card__header">
                <h2>"Upload Image"</h2>
                <p>"Upload a clear image of your cattle or buffalo for accurate breed identification"</p>
            </header>

            <div
                class=zone_class
                on:drop=on_drop
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
            >
                <input
                    id="image-upload"
                    class="upload-zone__input"
                    type="file"
                    accept="image/*"
                    on:change=on_file_change
                />
                <p class="upload-zone__prompt">
                    {move || {
                        if predict.get().drag_over {
                            "Drop your image here"
                        } else {
                            "Drag & drop your image"
                        }
                    }}
                </p>
                <p class="upload-zone__hint">"or click to browse files"</p>
                <label for="image-upload" class="btn btn--outline">
                    "Select Image"
                </label>
            </div>

            <Show when=move || predict.get().preview.is_some()>
                <div class="upload-panel__preview">
                    <img
                        src=move || predict.get().preview.unwrap_or_default()
                        alt="Upload preview"
                    />
                </div>
                <button
                    class="btn btn--primary upload-panel__submit"
                    disabled=move || predict.get().loading
                    on:click=move |_| on_submit(())
                >
                    {move || if predict.get().loading { "Analyzing..." } else { "Identify Breed" }}
                </button>
            </Show>
        </section>
    }
}
