use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LogWeightRequest {
    pub weight_kg: f64,
    /// YYYY-MM-DD; defaults to today (UTC) when absent.
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WeightEntryResponse {
    pub date: String,
    pub weight_kg: f64,
}

#[derive(Debug, Serialize)]
pub struct WeightHistoryResponse {
    pub entries: Vec<WeightEntryResponse>,
}
