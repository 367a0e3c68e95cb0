//! Monitoring API routes.
//!
//! Exposes the request counters collected by
//! [`RequestMetrics`](medgate_core::RequestMetrics) as a JSON snapshot.
//! The path and format are owned by this module, not by the prediction
//! handler it instruments.

use axum::{Json, Router, extract::State, routing::get};

use medgate_core::MetricsSnapshot;

use super::ApiState;

/// Build monitoring API routes.
pub fn monitoring_routes() -> Router<ApiState> {
    Router::new().route("/metrics", get(metrics_snapshot))
}

/// Point-in-time view of the service's operational counters.
async fn metrics_snapshot(State(state): State<ApiState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
