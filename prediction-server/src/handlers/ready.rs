use axum::Json;
use serde_json::{json, Value};

pub async fn ready_handler() -> Json<Value> {
    // Artifacts are loaded before the listener binds, so a served request
    // implies the model and scaler are in place.
    Json(json!({
        "status": "ready"
    }))
}
