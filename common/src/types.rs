use crate::error::CommonError;
use serde::{Deserialize, Serialize};

/// Feature columns the artifacts are fitted on, in fitted order.
///
/// Declared once and shared between the training exporter and the serving
/// encoder, so column order can never drift silently between the two. Both
/// artifact kinds carry their own `feature_names` and are checked against
/// this list at load time.
pub const FEATURE_COLUMNS: [&str; 9] = [
    "Engine_Size",
    "Make_Hyundai",
    "Make_Mercedes",
    "Mileage",
    "Options_Full",
    "Options_Standard",
    "Type_Accent",
    "Type_Land Cruiser",
    "Year",
];

/// Prediction request body
///
/// JSON keys follow the external contract the artifacts were fitted against
/// (capitalized, underscore-separated), hence the renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "Year")]
    pub year: i64,
    #[serde(rename = "Engine_Size")]
    pub engine_size: f64,
    #[serde(rename = "Mileage")]
    pub mileage: f64,
    #[serde(rename = "Type")]
    pub car_type: String,
    #[serde(rename = "Make")]
    pub make: String,
    #[serde(rename = "Options")]
    pub options: String,
}

/// Successful prediction response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub pred: f64,
}

/// Error response body for failed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Prediction task the model artifact was exported for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    Regression,
    Classification,
}

/// Fitted standard scaler artifact (exported by the training pipeline)
///
/// `feature_names` records the column order the scaler was fitted on;
/// the server refuses to start if it disagrees with its own schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub feature_names: Vec<String>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl ScalerArtifact {
    /// Check the artifact against the serving schema.
    ///
    /// The scaler must have been fitted on exactly the declared columns, in
    /// the declared order, with one nonzero scale entry per column.
    pub fn validate(&self, expected_columns: &[&str]) -> Result<(), CommonError> {
        validate_feature_names(&self.feature_names, expected_columns)?;
        if self.mean.len() != expected_columns.len() {
            return Err(CommonError::InvalidArtifact(format!(
                "scaler mean has {} entries, expected {}",
                self.mean.len(),
                expected_columns.len()
            )));
        }
        if self.scale.len() != expected_columns.len() {
            return Err(CommonError::InvalidArtifact(format!(
                "scaler scale has {} entries, expected {}",
                self.scale.len(),
                expected_columns.len()
            )));
        }
        if let Some(i) = self.scale.iter().position(|s| *s == 0.0) {
            return Err(CommonError::InvalidArtifact(format!(
                "scaler scale is zero for column {}",
                self.feature_names[i]
            )));
        }
        Ok(())
    }
}

/// Fitted k-nearest-neighbors model artifact
///
/// `samples` are training rows in the scaled feature space; `targets` holds
/// one value per row (prices for regression, numeric labels for
/// classification).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnnModelArtifact {
    pub feature_names: Vec<String>,
    pub k: usize,
    pub task: Task,
    pub samples: Vec<Vec<f64>>,
    pub targets: Vec<f64>,
}

impl KnnModelArtifact {
    /// Check the artifact against the serving schema.
    pub fn validate(&self, expected_columns: &[&str]) -> Result<(), CommonError> {
        validate_feature_names(&self.feature_names, expected_columns)?;
        if self.samples.is_empty() {
            return Err(CommonError::InvalidArtifact(
                "model has no training samples".to_string(),
            ));
        }
        if self.k == 0 {
            return Err(CommonError::InvalidArtifact("k must be at least 1".to_string()));
        }
        if self.k > self.samples.len() {
            return Err(CommonError::InvalidArtifact(format!(
                "k = {} exceeds sample count {}",
                self.k,
                self.samples.len()
            )));
        }
        if self.targets.len() != self.samples.len() {
            return Err(CommonError::InvalidArtifact(format!(
                "{} targets for {} samples",
                self.targets.len(),
                self.samples.len()
            )));
        }
        if let Some((i, row)) = self
            .samples
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected_columns.len())
        {
            return Err(CommonError::InvalidArtifact(format!(
                "sample {} has {} columns, expected {}",
                i,
                row.len(),
                expected_columns.len()
            )));
        }
        Ok(())
    }
}

fn validate_feature_names(actual: &[String], expected: &[&str]) -> Result<(), CommonError> {
    if actual.len() != expected.len() || actual.iter().zip(expected).any(|(a, e)| a != e) {
        return Err(CommonError::InvalidArtifact(format!(
            "artifact feature columns {:?} do not match serving schema {:?}",
            actual, expected
        )));
    }
    Ok(())
}
