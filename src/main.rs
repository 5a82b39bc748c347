#[tokio::main]
async fn main() {
    rating_forecast_be::start_server().await;
}
