use crate::error::ServerResult;
use crate::features;
use crate::model::KnnModel;
use crate::scaler::StandardScaler;
use axum::{Extension, Json};
use common::{PredictRequest, PredictResponse};
use ndarray::Axis;
use std::sync::Arc;

pub async fn predict_handler(
    Extension(scaler): Extension<Arc<StandardScaler>>,
    Extension(model): Extension<Arc<KnnModel>>,
    Json(req): Json<PredictRequest>,
) -> ServerResult<Json<PredictResponse>> {
    // 1. Encode named fields into the fixed feature vector
    let encoded = features::encode(&req);

    // 2. Scale as a single-row batch
    let batch = encoded.insert_axis(Axis(0));
    let scaled = scaler.transform(&batch)?;

    // 3. Single-row inference
    let pred = model.predict(scaled.row(0))?;

    Ok(Json(PredictResponse { pred }))
}
