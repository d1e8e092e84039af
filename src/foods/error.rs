use thiserror::Error;

/// Failures talking to the food-data and vision providers.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("lookup request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a payload that doesn't match its wire shape.
    #[error("unexpected response shape: {0}")]
    Parse(String),

    #[error("product not found")]
    NotFound,
}
