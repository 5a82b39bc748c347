use serde::{Deserialize, Serialize};

/// One month of aggregated feedback. The month label is opaque (e.g. "2025-01")
/// and is never parsed as a date; the order the caller sends points in is the
/// chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingPoint {
    pub month: String,
    pub avg_rating: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
    pub data: Vec<RatingPoint>,
}

/// Wire response for POST /predict. Both arms are returned with 200 OK: the
/// upstream consumers key on the body shape, not the status code.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PredictionResponse {
    Predicted { predicted_rating: f64 },
    Rejected { error: String },
}
