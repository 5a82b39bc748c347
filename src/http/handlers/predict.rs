use axum::Json;

use crate::{
    models::{PredictionRequest, PredictionResponse},
    predictor::predict_next_rating,
};

/// POST /predict
///
/// An undersized series answers 200 OK with an error body rather than a 4xx.
/// That matches what the dashboard consuming this endpoint expects; changing
/// the status-code contract needs a coordinated frontend release.
pub async fn predict_handler(
    Json(payload): Json<PredictionRequest>,
) -> Json<PredictionResponse> {
    match predict_next_rating(&payload.data) {
        Ok(predicted_rating) => {
            tracing::info!(
                "Predicted rating {} from {} months of data",
                predicted_rating,
                payload.data.len()
            );
            Json(PredictionResponse::Predicted { predicted_rating })
        }
        Err(err) => {
            tracing::warn!(
                "Rejected prediction request with {} data points: {}",
                payload.data.len(),
                err
            );
            Json(PredictionResponse::Rejected {
                error: err.to_string(),
            })
        }
    }
}
