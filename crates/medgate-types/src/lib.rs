//! Shared types for the medgate prediction service.
//!
//! Provides the service [`config`](crate::config), the top-level
//! [`error`](crate::error) type, and the [`risk`](crate::risk) label
//! vocabulary used by the policy and API layers.

pub mod config;
pub mod error;
pub mod risk;

pub use error::{MedgateError, Result};
