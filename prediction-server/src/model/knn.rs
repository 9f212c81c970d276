use crate::error::{ServerError, ServerResult};
use crate::model::distance::euclidean_distance;
use common::{KnnModelArtifact, Task, FEATURE_COLUMNS};
use ndarray::{Array2, ArrayView1};

/// k-nearest-neighbors model
///
/// Holds the scaled training matrix exported by the training pipeline and
/// answers single-row queries against it. Immutable after load; shared
/// read-only across request tasks.
pub struct KnnModel {
    samples: Array2<f64>,
    targets: Vec<f64>,
    k: usize,
    task: Task,
}

impl KnnModel {
    pub async fn load_from_file(path: &str) -> ServerResult<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        let artifact: KnnModelArtifact = serde_json::from_str(&contents)?;
        Self::from_artifact(artifact)
    }

    pub fn from_artifact(artifact: KnnModelArtifact) -> ServerResult<Self> {
        artifact.validate(&FEATURE_COLUMNS)?;

        let rows = artifact.samples.len();
        let cols = FEATURE_COLUMNS.len();
        let flat: Vec<f64> = artifact.samples.into_iter().flatten().collect();
        let samples = Array2::from_shape_vec((rows, cols), flat)
            .map_err(|e| ServerError::Model(format!("Bad sample matrix: {}", e)))?;

        Ok(Self {
            samples,
            targets: artifact.targets,
            k: artifact.k,
            task: artifact.task,
        })
    }

    pub fn sample_count(&self) -> usize {
        self.samples.nrows()
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn task(&self) -> Task {
        self.task
    }

    /// Predict one scaled feature row.
    ///
    /// Ranks every training sample by euclidean distance and aggregates the
    /// k nearest targets: mean for regression, majority vote for
    /// classification. Equal distances keep training-sample order.
    pub fn predict(&self, row: ArrayView1<f64>) -> ServerResult<f64> {
        if row.len() != self.samples.ncols() {
            return Err(ServerError::Model(format!(
                "Input row has {} features, model expects {}",
                row.len(),
                self.samples.ncols()
            )));
        }

        let mut neighbors: Vec<(f64, f64)> = self
            .samples
            .rows()
            .into_iter()
            .zip(self.targets.iter())
            .map(|(sample, &target)| (euclidean_distance(row, sample), target))
            .collect();

        // Stable sort: ties on distance resolve in sample order
        neighbors.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        neighbors.truncate(self.k);

        let pred = match self.task {
            Task::Regression => {
                neighbors.iter().map(|(_, target)| target).sum::<f64>() / neighbors.len() as f64
            }
            Task::Classification => majority_vote(&neighbors),
        };

        Ok(pred)
    }
}

/// Most frequent label among the nearest neighbors.
///
/// Labels are exact numeric class encodings, so plain equality is the right
/// grouping. A tied vote goes to the label seen first, i.e. the one with the
/// nearer representative.
fn majority_vote(neighbors: &[(f64, f64)]) -> f64 {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for &(_, label) in neighbors {
        match counts.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label, 1)),
        }
    }

    let mut winner = (f64::NAN, 0usize);
    for &(label, n) in &counts {
        if n > winner.1 {
            winner = (label, n);
        }
    }
    winner.0
}
