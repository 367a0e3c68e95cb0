//! HTTP layer for the medgate prediction service.
//!
//! Provides the REST API (prediction, liveness, health, metrics) on top of
//! the policy and metrics collaborators from `medgate-core`.

pub mod api;
pub mod error;

pub use api::{ApiState, build_router};
pub use error::ApiError;
