//! Asynchronous file-to-data-URL reading for the upload preview.

/// Read `file` into a data URL and invoke `on_load` with the result.
///
/// Reading happens asynchronously in the browser; decode failures are
/// logged and the preview is simply skipped, leaving the selection
/// intact.
#[cfg(feature = "hydrate")]
pub fn read_as_data_url(file: &web_sys::File, on_load: impl Fn(String) + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Ok(reader) = web_sys::FileReader::new() else {
        leptos::logging::warn!("FileReader unavailable; skipping preview");
        return;
    };

    let reader_handle = reader.clone();
    let onload = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_ev| {
        if let Ok(value) = reader_handle.result() {
            if let Some(url) = value.as_string() {
                on_load(url);
            }
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    // The closure must outlive the read; the reader keeps the only handle.
    onload.forget();

    if reader.read_as_data_url(file).is_err() {
        leptos::logging::warn!("failed to read image for preview");
    }
}
