//! Risk label vocabulary.
//!
//! The service emits one of a small closed set of risk categories. The
//! wire representation uses the human-readable labels consumers already
//! depend on (`"High Risk"` / `"Low Risk"`), so the enum carries explicit
//! serde renames rather than a casing convention.

use serde::{Deserialize, Serialize};

/// A risk classification label returned by the prediction endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    /// Patient is considered high risk.
    #[serde(rename = "High Risk")]
    HighRisk,

    /// Patient is considered low risk.
    #[serde(rename = "Low Risk")]
    LowRisk,
}

impl RiskLabel {
    /// The wire-format string for this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::HighRisk => "High Risk",
            RiskLabel::LowRisk => "Low Risk",
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
