use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub model_path: String,
    pub scaler_path: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "models/knn_model.json".to_string()),
            scaler_path: env::var("SCALER_PATH")
                .unwrap_or_else(|_| "models/scaler.json".to_string()),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
