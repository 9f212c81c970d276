use common::PredictRequest;
use ndarray::Array1;

/// Encode a request into the model's feature vector.
///
/// Numeric fields pass through unchanged; Type, Make and Options are
/// one-hot encoded against their distinguished literals. A category value
/// outside the distinguished set leaves every indicator in its dimension at
/// zero rather than erroring. Values follow [`common::FEATURE_COLUMNS`]
/// order.
pub fn encode(req: &PredictRequest) -> Array1<f64> {
    Array1::from(vec![
        req.engine_size,
        flag(req.make == "Hyundai"),
        flag(req.make == "Mercedes"),
        req.mileage,
        flag(req.options == "Full"),
        flag(req.options == "Standard"),
        flag(req.car_type == "Accent"),
        flag(req.car_type == "Land Cruiser"),
        req.year as f64,
    ])
}

fn flag(set: bool) -> f64 {
    if set {
        1.0
    } else {
        0.0
    }
}
