//! REST API for the medgate prediction service.
//!
//! Provides the prediction endpoint, a static liveness greeting, a health
//! check, and the metrics-scrape route.

pub mod handlers;
pub mod monitoring;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use medgate_core::{RequestMetrics, RiskPolicy};
use medgate_types::risk::RiskLabel;

/// Shared state accessible by all API handlers.
#[derive(Clone)]
pub struct ApiState {
    /// The decision rule applied to every prediction request.
    pub policy: Arc<dyn RiskPolicy>,
    /// Request counters and latency aggregates.
    pub metrics: Arc<RequestMetrics>,
    /// Version tag reported in every prediction response.
    pub model_version: String,
}

/// Body of `POST /predict`.
///
/// `patient_data` must be a JSON object; its keys and values are otherwise
/// unconstrained, and any key may be absent.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PredictionRequest {
    /// Loosely-typed patient attribute bag.
    pub patient_data: serde_json::Map<String, serde_json::Value>,
}

/// Body of a successful `POST /predict` response.
///
/// Created fresh per request and discarded after serialization.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PredictionResponse {
    /// The risk classification.
    pub prediction: RiskLabel,
    /// Confidence attached to the classification.
    pub confidence: f64,
    /// Static version tag of the serving model.
    pub model_version: String,
}

/// Build the API router with all routes.
pub fn build_router(state: ApiState, cors_origins: &[String]) -> Router {
    let cors = if cors_origins.is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<_> = cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(handlers::api_routes())
        .merge(monitoring::monitoring_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
