//! HTTP client for the external breed-classification service.
//!
//! Client-side (hydrate): one multipart POST per submission via
//! `gloo-net`. Server-side (SSR): a stub error, since predictions are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Everything is funneled into `Result<Prediction, String>`: transport
//! failures, non-2xx statuses, undecodable bodies, and payloads that
//! report an application-level error. Callers surface the message in
//! the results panel and never panic.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::types::Prediction;

/// Fallback message when the service reports a failure without saying why.
pub const FALLBACK_ERROR: &str = "Breed could not be identified";

/// Form field name the service expects the image under.
#[cfg(feature = "hydrate")]
const FILE_FIELD: &str = "file";

/// Configuration for the classification endpoint.
///
/// Provided as context by the app shell so deployments and tests can
/// inject their own endpoint instead of the reference deployment's
/// loopback address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictorConfig {
    pub endpoint: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000/predict".to_owned(),
        }
    }
}

/// Interpret the service's JSON payload as a prediction or a failure.
///
/// The service reports application-level failures on HTTP 200: an
/// `error` field (or `message`, which the reference deployment actually
/// sends), or a payload with no `breed`, is a failure. Breed and
/// confidence are extracted verbatim.
///
/// # Errors
///
/// Returns the reported failure message, or [`FALLBACK_ERROR`] when the
/// payload gives none.
pub fn parse_prediction(data: &serde_json::Value) -> Result<Prediction, String> {
    let reported = data
        .get("error")
        .or_else(|| data.get("message"))
        .and_then(|v| v.as_str());
    if let Some(message) = reported {
        if message.trim().is_empty() {
            return Err(FALLBACK_ERROR.to_owned());
        }
        return Err(message.to_owned());
    }

    let Some(breed) = data.get("breed").and_then(|v| v.as_str()) else {
        return Err(FALLBACK_ERROR.to_owned());
    };
    let confidence = data
        .get("confidence")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_owned();

    Ok(Prediction {
        breed: breed.to_owned(),
        confidence,
    })
}

/// Upload the selected image and await the breed prediction.
///
/// Issues a single multipart POST with the file under the `file` field.
/// Non-2xx statuses become `Server error: <status text>`; transport and
/// decode failures are stringified.
///
/// # Errors
///
/// Returns the human-readable failure message for every failure path.
#[cfg(feature = "hydrate")]
pub async fn request_prediction(endpoint: &str, file: &web_sys::File) -> Result<Prediction, String> {
    let form = web_sys::FormData::new().map_err(|_| "failed to build form data".to_owned())?;
    form.append_with_blob(FILE_FIELD, file)
        .map_err(|_| "failed to attach image".to_owned())?;

    let resp = gloo_net::http::Request::post(endpoint)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.ok() {
        return Err(format!("Server error: {}", resp.status_text()));
    }

    let data: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
    parse_prediction(&data)
}
