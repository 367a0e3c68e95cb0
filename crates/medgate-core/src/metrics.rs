//! In-process request metrics.
//!
//! [`RequestMetrics`] is the instrumentation collaborator for the
//! prediction handler: it counts requests by outcome and aggregates
//! handler latency. Counters are monotonic for the process lifetime and
//! lock-free; all methods take `&self`, so a single instance is shared
//! behind an `Arc` by every handler.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use medgate_types::risk::RiskLabel;

/// Lock-free metrics collector for the prediction endpoint.
#[derive(Debug)]
pub struct RequestMetrics {
    requests_total: AtomicU64,
    high_risk_total: AtomicU64,
    low_risk_total: AtomicU64,
    validation_errors_total: AtomicU64,
    latency_count: AtomicU64,
    latency_total_us: AtomicU64,
    latency_min_us: AtomicU64,
    latency_max_us: AtomicU64,
}

impl RequestMetrics {
    /// Create a new collector with all counters at zero.
    pub fn new() -> Self {
        Self {
            requests_total: AtomicU64::new(0),
            high_risk_total: AtomicU64::new(0),
            low_risk_total: AtomicU64::new(0),
            validation_errors_total: AtomicU64::new(0),
            latency_count: AtomicU64::new(0),
            latency_total_us: AtomicU64::new(0),
            // min starts at MAX so the first observation always wins.
            latency_min_us: AtomicU64::new(u64::MAX),
            latency_max_us: AtomicU64::new(0),
        }
    }

    /// Record a successful prediction and its handler latency.
    pub fn record_prediction(&self, label: RiskLabel, latency: Duration) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        match label {
            RiskLabel::HighRisk => self.high_risk_total.fetch_add(1, Ordering::Relaxed),
            RiskLabel::LowRisk => self.low_risk_total.fetch_add(1, Ordering::Relaxed),
        };

        let us = latency.as_micros().min(u64::MAX as u128) as u64;
        self.latency_count.fetch_add(1, Ordering::Relaxed);
        self.latency_total_us.fetch_add(us, Ordering::Relaxed);
        self.latency_min_us.fetch_min(us, Ordering::Relaxed);
        self.latency_max_us.fetch_max(us, Ordering::Relaxed);
    }

    /// Record a request rejected at the validation boundary.
    pub fn record_validation_error(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.validation_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time snapshot of all counters.
    ///
    /// Counters are read individually with relaxed ordering; under
    /// concurrent writes the snapshot is approximate, never torn per
    /// counter.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let count = self.latency_count.load(Ordering::Relaxed);
        let total_us = self.latency_total_us.load(Ordering::Relaxed);
        let min = self.latency_min_us.load(Ordering::Relaxed);
        let max = self.latency_max_us.load(Ordering::Relaxed);

        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            high_risk_total: self.high_risk_total.load(Ordering::Relaxed),
            low_risk_total: self.low_risk_total.load(Ordering::Relaxed),
            validation_errors_total: self.validation_errors_total.load(Ordering::Relaxed),
            latency: LatencySnapshot {
                count,
                total_us,
                min_us: (count > 0).then_some(min),
                max_us: (count > 0).then_some(max),
                mean_us: if count > 0 {
                    total_us as f64 / count as f64
                } else {
                    0.0
                },
            },
        }
    }
}

impl Default for RequestMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable snapshot served by the metrics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// All prediction requests, including rejected ones.
    pub requests_total: u64,
    /// Predictions that classified high risk.
    pub high_risk_total: u64,
    /// Predictions that classified low risk.
    pub low_risk_total: u64,
    /// Requests rejected at the validation boundary.
    pub validation_errors_total: u64,
    /// Handler latency aggregates for successful predictions.
    pub latency: LatencySnapshot,
}

/// Latency aggregates in microseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencySnapshot {
    /// Number of observations.
    pub count: u64,
    /// Sum of all observations.
    pub total_us: u64,
    /// Smallest observation, absent until the first prediction.
    pub min_us: Option<u64>,
    /// Largest observation, absent until the first prediction.
    pub max_us: Option<u64>,
    /// Arithmetic mean, 0.0 until the first prediction.
    pub mean_us: f64,
}
