use server::config;
use server::routes;
use server::state;

use axum::{
    routing::{get, post},
    Extension, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();
    let sessions = state::new_sessions();

    // CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // Move exporter
        .route(
            "/api/export",
            post(routes::export::export_game).delete(routes::export::clear_exports),
        )
        // Gallery
        .route("/api/gallery", get(routes::gallery::current))
        .route("/api/gallery/image", get(routes::gallery::current_image))
        .route("/api/gallery/next", post(routes::gallery::next))
        .route("/api/gallery/prev", post(routes::gallery::prev))
        // Statistics
        .route("/api/stats/series", post(routes::stats::stats_series))
        .route("/api/stats/chart/{kind}", post(routes::stats::stats_chart))
        // Shared state
        .layer(Extension(config.clone()))
        .layer(Extension(sessions))
        .layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    axum::serve(listener, app).await.expect("Server error");
}
