//! Error types for the medgate service.

use thiserror::Error;

/// Top-level error type for the medgate service.
///
/// Covers the startup-time failure surface (configuration, socket binding).
/// Request-time validation failures never reach this type; they are mapped
/// to client errors at the API boundary.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MedgateError {
    /// The requested config file does not exist.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was probed.
        path: String,
    },

    /// Configuration is malformed or semantically invalid.
    #[error("invalid config: {reason}")]
    ConfigInvalid {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// The configured bind address could not be parsed.
    #[error("invalid bind address: {addr}")]
    InvalidBindAddress {
        /// The offending `host:port` string.
        addr: String,
    },

    /// Underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, MedgateError>;
