/// A completed breed prediction returned by the classification service.
///
/// `confidence` is an opaque, server-formatted string (for example
/// `"92.30%"`). It is displayed verbatim and never parsed client-side;
/// that formatting contract belongs to the external service.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Prediction {
    pub breed: String,
    pub confidence: String,
}
