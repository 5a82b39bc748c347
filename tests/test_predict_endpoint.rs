use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use rating_forecast_be::create_http_routes;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn post_predict(body: Value) -> (StatusCode, Value) {
    let app = create_http_routes();

    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let parsed = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, parsed)
}

#[tokio::test]
async fn test_predict_returns_rounded_rating() {
    let (status, body) = post_predict(json!({
        "data": [
            { "month": "2025-01", "avg_rating": 1.0 },
            { "month": "2025-02", "avg_rating": 2.0 },
            { "month": "2025-03", "avg_rating": 3.0 }
        ]
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "predicted_rating": 4.0 }));
}

#[tokio::test]
async fn test_insufficient_data_is_200_with_error_body() {
    let (status, body) = post_predict(json!({
        "data": [{ "month": "2025-01", "avg_rating": 4.2 }]
    }))
    .await;

    // Contract quirk: the error ships with a success status, the body shape
    // is what distinguishes the two outcomes.
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "error": "Need at least 2 months of data for prediction" })
    );
}

#[tokio::test]
async fn test_empty_series_is_200_with_error_body() {
    let (status, body) = post_predict(json!({ "data": [] })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "error": "Need at least 2 months of data for prediction" })
    );
}

#[tokio::test]
async fn test_malformed_body_is_rejected_before_the_predictor() {
    let (status, _) = post_predict(json!({
        "data": [{ "month": "2025-01", "avg_rating": "not a number" }]
    }))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_health_route() {
    let app = create_http_routes();

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let parsed: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed, json!({ "ok": true }));
}
