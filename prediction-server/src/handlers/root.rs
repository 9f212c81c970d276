use axum::Json;
use serde_json::{json, Value};

/// Welcome endpoint
///
/// Fixed payload, independent of server state once the process serves.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Tuwaiq Academy"
    }))
}
