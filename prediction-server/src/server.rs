use crate::config::Config;
use crate::handlers;
use crate::model::KnnModel;
use crate::scaler::StandardScaler;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the HTTP router with all routes and shared read-only state
pub fn build_router(scaler: Arc<StandardScaler>, model: Arc<KnnModel>) -> Router {
    Router::new()
        .route("/", get(handlers::root_handler))
        .route("/predict", post(handlers::predict_handler))
        .route("/health", get(handlers::health_handler))
        .route("/ready", get(handlers::ready_handler))
        .layer(Extension(scaler))
        .layer(Extension(model))
        .layer(TraceLayer::new_for_http())
}

pub async fn start(
    config: Config,
    scaler: Arc<StandardScaler>,
    model: Arc<KnnModel>,
) -> anyhow::Result<()> {
    let app = build_router(scaler, model);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Prediction server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
