use axum::body::Body;
use axum::http::StatusCode;
use axum::Router;
use common::{KnnModelArtifact, ScalerArtifact};
/// Integration tests for the prediction service
/// Drive the real router against artifacts loaded from disk, exactly as the
/// binary does at startup.
use http::Request;
use prediction_server::{server, KnnModel, StandardScaler};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Encoded feature row for the Accent/Hyundai/Full request below
const ACCENT_ROW: [f64; 9] = [2.0, 1.0, 0.0, 50000.0, 1.0, 0.0, 1.0, 0.0, 2015.0];
/// Encoded feature row for the Land Cruiser/Mercedes/Standard request below
const CRUISER_ROW: [f64; 9] = [4.5, 0.0, 1.0, 150000.0, 0.0, 1.0, 0.0, 1.0, 1990.0];

fn accent_request() -> Value {
    json!({
        "Year": 2015,
        "Engine_Size": 2.0,
        "Mileage": 50000,
        "Type": "Accent",
        "Make": "Hyundai",
        "Options": "Full"
    })
}

fn cruiser_request() -> Value {
    json!({
        "Year": 1990,
        "Engine_Size": 4.5,
        "Mileage": 150000,
        "Type": "Land Cruiser",
        "Make": "Mercedes",
        "Options": "Standard"
    })
}

/// Load both artifacts from disk and build the router, as main does.
async fn router_from_artifacts(
    scaler_artifact: &ScalerArtifact,
    model_artifact: &KnnModelArtifact,
) -> Router {
    let artifacts = test_utils::write_artifacts(scaler_artifact, model_artifact).unwrap();

    let scaler = StandardScaler::load_from_file(artifacts.scaler_path.to_str().unwrap())
        .await
        .unwrap();
    let model = KnnModel::load_from_file(artifacts.model_path.to_str().unwrap())
        .await
        .unwrap();

    server::build_router(Arc::new(scaler), Arc::new(model))
}

/// Router over an identity scaler and a k=1 model keyed to the two fixture
/// requests: Accent rows predict 54000, Land Cruiser rows predict 250000.
async fn two_car_router() -> Router {
    router_from_artifacts(
        &test_utils::identity_scaler(),
        &test_utils::regression_model(
            1,
            vec![ACCENT_ROW.to_vec(), CRUISER_ROW.to_vec()],
            vec![54000.0, 250000.0],
        ),
    )
    .await
}

fn post_predict(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}

#[tokio::test]
async fn test_welcome_route() {
    let app = two_car_router().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["message"], "Welcome to Tuwaiq Academy");
}

#[tokio::test]
async fn test_predict_returns_nearest_target() {
    let app = two_car_router().await;

    let response = app.oneshot(post_predict(&accent_request())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["pred"], 54000.0);
}

#[tokio::test]
async fn test_predict_missing_field_is_rejected() {
    let app = two_car_router().await;

    let mut body = accent_request();
    body.as_object_mut().unwrap().remove("Mileage");

    let response = app.oneshot(post_predict(&body)).await.unwrap();

    // Rejected by the extractor; the handler never runs
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_string(response).await.contains("Mileage"));
}

#[tokio::test]
async fn test_predict_mistyped_field_is_rejected() {
    let app = two_car_router().await;

    let mut body = accent_request();
    body["Year"] = json!("twenty-fifteen");

    let response = app.oneshot(post_predict(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_predict_unknown_category_falls_through() {
    let app = two_car_router().await;

    let mut body = accent_request();
    body["Type"] = json!("Camry");
    body["Make"] = json!("Toyota");

    // All Type/Make indicators drop to zero; the row still sits nearest the
    // Accent sample and predicts normally.
    let response = app.oneshot(post_predict(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["pred"], 54000.0);
}

#[tokio::test]
async fn test_concurrent_predictions_are_independent() {
    let app = two_car_router().await;

    let accent = app.clone().oneshot(post_predict(&accent_request()));
    let cruiser = app.oneshot(post_predict(&cruiser_request()));

    let (accent_response, cruiser_response) = tokio::join!(accent, cruiser);

    let accent_value = body_json(accent_response.unwrap()).await;
    let cruiser_value = body_json(cruiser_response.unwrap()).await;

    assert_eq!(accent_value["pred"], 54000.0);
    assert_eq!(cruiser_value["pred"], 250000.0);
}

#[tokio::test]
async fn test_predict_applies_scaler_before_model() {
    // Scaler centered on the Accent row maps that request to the origin.
    // A second training sample sits at the RAW Accent row, so skipping the
    // scaling step would pick the wrong neighbor.
    let app = router_from_artifacts(
        &test_utils::scaler(ACCENT_ROW.to_vec(), vec![1.0; 9]),
        &test_utils::regression_model(
            1,
            vec![vec![0.0; 9], ACCENT_ROW.to_vec()],
            vec![77000.0, 11111.0],
        ),
    )
    .await;

    let response = app.oneshot(post_predict(&accent_request())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["pred"], 77000.0);
}

#[tokio::test]
async fn test_classification_model_predicts_label() {
    let app = router_from_artifacts(
        &test_utils::identity_scaler(),
        &test_utils::classification_model(
            3,
            vec![
                ACCENT_ROW.to_vec(),
                ACCENT_ROW.to_vec(),
                CRUISER_ROW.to_vec(),
            ],
            vec![1.0, 1.0, 2.0],
        ),
    )
    .await;

    let response = app.oneshot(post_predict(&accent_request())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let value = body_json(response).await;
    assert_eq!(value["pred"], 1.0);
}

#[tokio::test]
async fn test_load_rejects_mismatched_feature_schema() {
    let mut model = test_utils::regression_model(1, vec![ACCENT_ROW.to_vec()], vec![54000.0]);
    model.feature_names.reverse();

    let artifacts = test_utils::write_artifacts(&test_utils::identity_scaler(), &model).unwrap();

    let result = KnnModel::load_from_file(artifacts.model_path.to_str().unwrap()).await;
    assert!(result.is_err());

    // The scaler loader applies the same schema check
    let mut scaler = test_utils::identity_scaler();
    scaler.feature_names.reverse();
    let artifacts = test_utils::write_artifacts(
        &scaler,
        &test_utils::regression_model(1, vec![ACCENT_ROW.to_vec()], vec![54000.0]),
    )
    .unwrap();

    let result = StandardScaler::load_from_file(artifacts.scaler_path.to_str().unwrap()).await;
    assert!(result.is_err());
}
