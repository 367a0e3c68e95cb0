//! HTTP request handlers for the REST API.

use std::time::Instant;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};
use tracing::debug;

use super::{ApiState, PredictionRequest, PredictionResponse};
use crate::error::ApiError;

/// Build all API routes.
pub fn api_routes() -> axum::Router<ApiState> {
    axum::Router::new()
        // Liveness greeting
        .route("/", get(read_root))
        // Prediction endpoint
        .route("/predict", post(predict))
        // Health check
        .route("/health", get(health_check))
}

/// Returns the static service greeting, regardless of any state.
async fn read_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Healthcare AI Model Service is running."
    }))
}

/// Run the risk policy over the submitted patient attribute bag.
///
/// A body that is not a well-formed [`PredictionRequest`] never reaches
/// the policy: the extractor rejection is recorded as a validation error
/// and surfaced as HTTP 422.
async fn predict(
    State(state): State<ApiState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let start = Instant::now();

    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            state.metrics.record_validation_error();
            return Err(ApiError::from(rejection));
        }
    };

    let assessment = state.policy.assess(&request.patient_data);
    state
        .metrics
        .record_prediction(assessment.label, start.elapsed());

    debug!(label = %assessment.label, "prediction served");

    Ok(Json(PredictionResponse {
        prediction: assessment.label,
        confidence: assessment.confidence,
        model_version: state.model_version.clone(),
    }))
}

/// Server start time, set once at process start.
static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// Returns basic health status, version, and uptime.
async fn health_check() -> Json<serde_json::Value> {
    let start = START_TIME.get_or_init(Instant::now);
    let uptime_secs = start.elapsed().as_secs();
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": uptime_secs
    }))
}
