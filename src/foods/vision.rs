use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::config::LookupConfig;
use crate::foods::error::LookupError;

/// How many ranked candidate names a recognition pass returns.
const CANDIDATE_LIMIT: usize = 5;

/// Photo-to-food-name recognition. Returns ranked names only; callers
/// resolve them into `FoodItem`s through the food-data search.
#[async_trait]
pub trait VisionClient: Send + Sync {
    async fn recognize(&self, image_b64: &str) -> Result<Vec<String>, LookupError>;
}

/// Clarifai food-item-recognition model.
pub struct ClarifaiVision {
    http: reqwest::Client,
    config: LookupConfig,
}

impl ClarifaiVision {
    pub fn new(http: reqwest::Client, config: LookupConfig) -> Self {
        Self { http, config }
    }
}

#[async_trait]
impl VisionClient for ClarifaiVision {
    async fn recognize(&self, image_b64: &str) -> Result<Vec<String>, LookupError> {
        let url = format!(
            "{}/v2/models/{}/versions/{}/outputs",
            self.config.vision_base_url, self.config.vision_model, self.config.vision_model_version
        );
        let body = json!({
            "inputs": [
                { "data": { "image": { "base64": image_b64 } } }
            ]
        });
        let payload = self
            .http
            .post(&url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Key {}", self.config.vision_api_key),
            )
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;
        let candidates = parse_outputs_payload(payload)?;
        debug!(candidates = candidates.len(), "meal photo recognized");
        Ok(candidates)
    }
}

#[derive(Debug, Deserialize)]
struct OutputsPayload {
    outputs: Vec<Output>,
}

#[derive(Debug, Deserialize)]
struct Output {
    data: OutputData,
}

#[derive(Debug, Deserialize)]
struct OutputData {
    #[serde(default)]
    concepts: Vec<Concept>,
}

#[derive(Debug, Deserialize)]
struct Concept {
    name: String,
}

/// Pull the top ranked concept names out of an untyped Clarifai payload.
pub(crate) fn parse_outputs_payload(payload: serde_json::Value) -> Result<Vec<String>, LookupError> {
    let parsed: OutputsPayload =
        serde_json::from_value(payload).map_err(|e| LookupError::Parse(e.to_string()))?;
    let first = parsed
        .outputs
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::Parse("response carries no outputs".into()))?;
    Ok(first
        .data
        .concepts
        .into_iter()
        .take(CANDIDATE_LIMIT)
        .map(|c| c.name)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn concept(name: &str, value: f64) -> serde_json::Value {
        json!({ "id": name, "name": name, "value": value })
    }

    #[test]
    fn top_candidates_come_back_ranked_and_capped() {
        let payload = json!({
            "outputs": [
                {
                    "data": {
                        "concepts": [
                            concept("pizza", 0.98),
                            concept("cheese", 0.91),
                            concept("tomato", 0.84),
                            concept("basil", 0.61),
                            concept("bread", 0.55),
                            concept("olive", 0.42),
                            concept("flour", 0.31)
                        ]
                    }
                }
            ]
        });
        let candidates = parse_outputs_payload(payload).expect("parse");
        assert_eq!(candidates.len(), 5);
        assert_eq!(candidates[0], "pizza");
        assert_eq!(candidates[4], "bread");
    }

    #[test]
    fn empty_outputs_are_a_parse_error() {
        let payload = json!({ "outputs": [] });
        match parse_outputs_payload(payload) {
            Err(LookupError::Parse(_)) => {}
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_concepts_mean_no_candidates() {
        let payload = json!({ "outputs": [ { "data": {} } ] });
        let candidates = parse_outputs_payload(payload).expect("parse");
        assert!(candidates.is_empty());
    }
}
