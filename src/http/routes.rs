use axum::{
    Router,
    routing::{get, post},
};

use crate::http::handlers::{health_handler, predict_handler};

pub fn create_http_routes() -> Router {
    Router::new()
        .route("/", get(health_handler))
        .route("/predict", post(predict_handler))
}
