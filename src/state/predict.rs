#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use crate::net::types::Prediction;

/// State for the upload-and-predict flow.
///
/// Drives the four mutually exclusive result views. At most one of
/// `prediction` and `error` is populated at any time: selecting a new
/// image clears both, and a completed request sets exactly one.
#[derive(Clone, Debug, Default)]
pub struct PredictState {
    /// Name of the currently selected image file.
    pub file_name: Option<String>,
    /// Data URL for the preview, read asynchronously after selection.
    pub preview: Option<String>,
    /// In-flight flag; while set the submit control is disabled.
    pub loading: bool,
    /// Outcome of the last completed request.
    pub prediction: Option<Prediction>,
    /// Message from the last failed request.
    pub error: Option<String>,
    /// Cosmetic flag for drag-and-drop hover styling.
    pub drag_over: bool,
    /// Identifier of the latest issued request. Responses carrying an
    /// older identifier are discarded so a superseded request can never
    /// overwrite newer state.
    pub request_seq: u64,
}

impl PredictState {
    /// Record a newly accepted image selection.
    ///
    /// Clears any previous outcome or error so stale results never
    /// linger under a new image, and invalidates any outstanding
    /// request. The preview arrives later via [`set_preview`].
    ///
    /// [`set_preview`]: PredictState::set_preview
    pub fn select_image(&mut self, file_name: &str) {
        self.request_seq += 1;
        self.file_name = Some(file_name.to_owned());
        self.preview = None;
        self.loading = false;
        self.prediction = None;
        self.error = None;
    }

    /// Attach the preview data URL once the file has been read.
    pub fn set_preview(&mut self, data_url: String) {
        self.preview = Some(data_url);
    }

    /// Whether a prediction may be submitted right now.
    pub fn can_submit(&self) -> bool {
        self.file_name.is_some() && !self.loading
    }

    /// Mark a request as issued and return its identifier.
    ///
    /// Completion handlers must pass the identifier back so stale
    /// responses can be recognized and dropped.
    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    /// Apply a successful response for request `seq`.
    ///
    /// Returns `false` without touching state if the request has been
    /// superseded by a newer selection, reset, or submission.
    pub fn finish_success(&mut self, seq: u64, prediction: Prediction) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.loading = false;
        self.prediction = Some(prediction);
        self.error = None;
        true
    }

    /// Apply a failed response for request `seq`.
    ///
    /// Returns `false` without touching state if the request is stale.
    pub fn finish_failure(&mut self, seq: u64, message: String) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.loading = false;
        self.prediction = None;
        self.error = Some(message);
        true
    }

    /// Return to the empty state, clearing the selected image, outcome,
    /// and error. Any outstanding request is invalidated.
    pub fn reset(&mut self) {
        *self = Self {
            request_seq: self.request_seq + 1,
            ..Self::default()
        };
    }

    /// Which result view to show. Precedence is Loading > Error >
    /// Success > Idle; the transitions above guarantee the earlier
    /// flags clear the later ones, so precedence only matters here.
    pub fn view(&self) -> ResultView {
        if self.loading {
            ResultView::Loading
        } else if self.error.is_some() {
            ResultView::Error
        } else if self.prediction.is_some() {
            ResultView::Success
        } else {
            ResultView::Idle
        }
    }
}

/// The four mutually exclusive result views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultView {
    #[default]
    Idle,
    Loading,
    Error,
    Success,
}

/// Whether a file's declared content type is acceptable for upload.
pub fn accepts_file_type(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Holder for the raw browser file handle of the pending upload.
///
/// The handle only exists in the browser build; server rendering and
/// native tests see an empty holder, which keeps the rest of the state
/// layer free of wasm-only types.
#[derive(Clone, Debug, Default)]
pub struct SelectedFile {
    #[cfg(feature = "hydrate")]
    pub file: Option<web_sys::File>,
}

impl SelectedFile {
    /// True when no file handle is held (always true outside the browser).
    pub fn is_empty(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.file.is_none()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            true
        }
    }

    /// Drop the held file handle.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
