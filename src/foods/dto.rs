use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct RecognizeRequest {
    pub image_b64: String,
}

/// Ranked food-name candidates from a meal photo. Resolve them to items via
/// the search endpoint.
#[derive(Debug, Serialize)]
pub struct RecognizeResponse {
    pub candidates: Vec<String>,
}
