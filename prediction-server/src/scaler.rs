use crate::error::{ServerError, ServerResult};
use common::{ScalerArtifact, FEATURE_COLUMNS};
use ndarray::{Array1, Array2};

/// Fitted standard scaler
///
/// Centers and scales each feature column with the statistics the training
/// pipeline exported alongside the model.
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl StandardScaler {
    pub async fn load_from_file(path: &str) -> ServerResult<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        let artifact: ScalerArtifact = serde_json::from_str(&contents)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: ScalerArtifact) -> ServerResult<Self> {
        artifact.validate(&FEATURE_COLUMNS)?;

        Ok(Self {
            mean: Array1::from(artifact.mean),
            scale: Array1::from(artifact.scale),
        })
    }

    /// Transform a batch of feature rows into the scaled space.
    ///
    /// Each column is centered and scaled independently: `(x - mean) / scale`.
    pub fn transform(&self, batch: &Array2<f64>) -> ServerResult<Array2<f64>> {
        if batch.ncols() != self.mean.len() {
            return Err(ServerError::Model(format!(
                "Batch has {} columns, scaler expects {}",
                batch.ncols(),
                self.mean.len()
            )));
        }

        let mut scaled = batch.clone();
        for mut row in scaled.rows_mut() {
            row -= &self.mean;
            row /= &self.scale;
        }

        Ok(scaled)
    }
}
