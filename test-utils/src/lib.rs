use anyhow::{Context, Result};
/// Test utilities for integration tests
/// Builds throwaway model and scaler artifacts on disk
use common::{KnnModelArtifact, ScalerArtifact, Task, FEATURE_COLUMNS};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn feature_names() -> Vec<String> {
    FEATURE_COLUMNS.iter().map(|c| c.to_string()).collect()
}

/// Scaler that passes encoded vectors through unchanged, so expected
/// predictions stay easy to compute by hand.
pub fn identity_scaler() -> ScalerArtifact {
    scaler(vec![0.0; FEATURE_COLUMNS.len()], vec![1.0; FEATURE_COLUMNS.len()])
}

pub fn scaler(mean: Vec<f64>, scale: Vec<f64>) -> ScalerArtifact {
    ScalerArtifact {
        feature_names: feature_names(),
        mean,
        scale,
    }
}

pub fn regression_model(k: usize, samples: Vec<Vec<f64>>, targets: Vec<f64>) -> KnnModelArtifact {
    model(k, Task::Regression, samples, targets)
}

pub fn classification_model(
    k: usize,
    samples: Vec<Vec<f64>>,
    targets: Vec<f64>,
) -> KnnModelArtifact {
    model(k, Task::Classification, samples, targets)
}

fn model(k: usize, task: Task, samples: Vec<Vec<f64>>, targets: Vec<f64>) -> KnnModelArtifact {
    KnnModelArtifact {
        feature_names: feature_names(),
        k,
        task,
        samples,
        targets,
    }
}

/// Artifact files in a throwaway directory
///
/// The directory lives as long as the value; dropping it cleans up.
pub struct ArtifactDir {
    _dir: TempDir,
    pub model_path: PathBuf,
    pub scaler_path: PathBuf,
}

/// Write both artifacts into a fresh temp directory
pub fn write_artifacts(
    scaler: &ScalerArtifact,
    model: &KnnModelArtifact,
) -> Result<ArtifactDir> {
    let dir = TempDir::new().context("Failed to create artifact directory")?;

    let scaler_path = dir.path().join("scaler.json");
    fs::write(&scaler_path, serde_json::to_vec(scaler)?)
        .with_context(|| format!("Failed to write {}", scaler_path.display()))?;

    let model_path = dir.path().join("knn_model.json");
    fs::write(&model_path, serde_json::to_vec(model)?)
        .with_context(|| format!("Failed to write {}", model_path.display()))?;

    Ok(ArtifactDir {
        _dir: dir,
        model_path,
        scaler_path,
    })
}
