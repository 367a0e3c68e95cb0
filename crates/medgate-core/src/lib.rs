//! Core logic for the medgate prediction service.
//!
//! The decision rule lives behind the [`RiskPolicy`](policy::RiskPolicy)
//! trait so a real model can replace the hardcoded threshold without
//! touching the HTTP layer. [`metrics`] provides the in-process request
//! counters exposed by the monitoring endpoint.

pub mod metrics;
pub mod policy;

pub use metrics::{MetricsSnapshot, RequestMetrics};
pub use policy::{AgeThresholdPolicy, RiskAssessment, RiskPolicy};
