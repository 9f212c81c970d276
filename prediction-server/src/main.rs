use anyhow::{Context, Result};
use prediction_server::{server, Config, KnnModel, StandardScaler};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting prediction server");

    // Load configuration
    let config = Config::from_env()?;

    // Load the fitted scaler; any failure here aborts startup
    tracing::info!("Loading scaler from {}", config.scaler_path);
    let scaler = StandardScaler::load_from_file(&config.scaler_path)
        .await
        .context("Error loading scaler artifact")?;

    // Load the k-NN model
    tracing::info!("Loading model from {}", config.model_path);
    let model = KnnModel::load_from_file(&config.model_path)
        .await
        .context("Error loading model artifact")?;
    tracing::info!(
        "Model loaded: {} samples, k = {}",
        model.sample_count(),
        model.k()
    );

    // Start HTTP server
    server::start(config, Arc::new(scaler), Arc::new(model)).await?;

    Ok(())
}
