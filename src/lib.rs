pub mod errors;
mod http;
mod middleware;
pub mod models;
pub mod predictor;

use middleware::cors_layer;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

pub use http::create_http_routes;

pub async fn start_server() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let app = create_http_routes()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .fallback(|| async { "404 Not Found" });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8000);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("Failed to bind address");

    tracing::info!("Rating forecast server running at http://127.0.0.1:{port}/predict");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
