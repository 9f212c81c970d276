use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid artifact: {0}")]
    InvalidArtifact(String),
}
