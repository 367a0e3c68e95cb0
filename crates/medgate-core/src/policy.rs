//! Risk policy trait and the age-threshold implementation.
//!
//! The policy is the seam where a trained model would plug in. Today the
//! only implementation is [`AgeThresholdPolicy`]: a single strict
//! comparison against an age threshold, returning a fixed confidence per
//! label. No ML, no feature extraction, just one attribute lookup.

use serde_json::{Map, Value};

use medgate_types::risk::RiskLabel;

/// Outcome of a policy evaluation: a label and its reported confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    /// The risk classification.
    pub label: RiskLabel,

    /// Confidence attached to the label. Static per label for the
    /// threshold policy, not derived from any probabilistic model.
    pub confidence: f64,
}

/// A risk classification policy.
///
/// Implementations must be pure with respect to the attribute bag: the
/// same input always yields the same assessment, with no side effects.
pub trait RiskPolicy: Send + Sync {
    /// Assess a patient attribute bag and produce a classification.
    fn assess(&self, patient_data: &Map<String, Value>) -> RiskAssessment;
}

/// The hardcoded decision rule: `age > threshold` means high risk.
///
/// The `age` attribute is read from the bag and defaults to 0 when absent
/// or non-numeric, so an empty bag always classifies low risk. The
/// comparison is strict: a patient exactly at the threshold is low risk.
pub struct AgeThresholdPolicy {
    threshold: f64,
    high_confidence: f64,
    low_confidence: f64,
}

impl AgeThresholdPolicy {
    /// Create a policy with explicit threshold and confidence values.
    pub fn new(threshold: f64, high_confidence: f64, low_confidence: f64) -> Self {
        Self {
            threshold,
            high_confidence,
            low_confidence,
        }
    }

    /// Build the policy from the model section of the service config.
    pub fn from_config(model: &medgate_types::config::ModelConfig) -> Self {
        Self::new(
            model.age_threshold,
            model.high_risk_confidence,
            model.low_risk_confidence,
        )
    }
}

impl Default for AgeThresholdPolicy {
    fn default() -> Self {
        Self::from_config(&medgate_types::config::ModelConfig::default())
    }
}

impl RiskPolicy for AgeThresholdPolicy {
    fn assess(&self, patient_data: &Map<String, Value>) -> RiskAssessment {
        let age = patient_data
            .get("age")
            .and_then(Value::as_f64)
            .unwrap_or(0.0);

        if age > self.threshold {
            RiskAssessment {
                label: RiskLabel::HighRisk,
                confidence: self.high_confidence,
            }
        } else {
            RiskAssessment {
                label: RiskLabel::LowRisk,
                confidence: self.low_confidence,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn patient(entries: Value) -> Map<String, Value> {
        entries.as_object().expect("test input must be an object").clone()
    }

    fn policy() -> AgeThresholdPolicy {
        AgeThresholdPolicy::default()
    }

    #[test]
    fn age_above_threshold_is_high_risk() {
        let assessment = policy().assess(&patient(json!({"age": 65})));
        assert_eq!(assessment.label, RiskLabel::HighRisk);
        assert_eq!(assessment.confidence, 0.92);
    }

    #[test]
    fn age_below_threshold_is_low_risk() {
        let assessment = policy().assess(&patient(json!({"age": 30})));
        assert_eq!(assessment.label, RiskLabel::LowRisk);
        assert_eq!(assessment.confidence, 0.75);
    }

    #[test]
    fn threshold_boundary_is_strict() {
        let p = policy();
        assert_eq!(p.assess(&patient(json!({"age": 60}))).label, RiskLabel::LowRisk);
        assert_eq!(p.assess(&patient(json!({"age": 61}))).label, RiskLabel::HighRisk);
    }

    #[test]
    fn fractional_age_participates_in_comparison() {
        let assessment = policy().assess(&patient(json!({"age": 60.5})));
        assert_eq!(assessment.label, RiskLabel::HighRisk);
    }

    #[test]
    fn missing_age_defaults_to_zero() {
        let assessment = policy().assess(&patient(json!({"name": "Ada"})));
        assert_eq!(assessment.label, RiskLabel::LowRisk);
        assert_eq!(assessment.confidence, 0.75);
    }

    #[test]
    fn empty_bag_is_low_risk() {
        let assessment = policy().assess(&Map::new());
        assert_eq!(assessment.label, RiskLabel::LowRisk);
    }

    #[test]
    fn non_numeric_age_treated_as_absent() {
        let p = policy();
        for bad_age in [json!("sixty-five"), json!(true), json!(null), json!([65])] {
            let assessment = p.assess(&patient(json!({"age": bad_age.clone()})));
            assert_eq!(assessment.label, RiskLabel::LowRisk, "age={bad_age}");
        }
    }

    #[test]
    fn negative_age_is_low_risk() {
        let assessment = policy().assess(&patient(json!({"age": -5})));
        assert_eq!(assessment.label, RiskLabel::LowRisk);
    }

    #[test]
    fn extra_attributes_are_ignored() {
        let assessment = policy().assess(&patient(json!({
            "age": 70,
            "smoker": true,
            "blood_pressure": "140/90"
        })));
        assert_eq!(assessment.label, RiskLabel::HighRisk);
    }

    #[test]
    fn assessment_is_idempotent() {
        let p = policy();
        let bag = patient(json!({"age": 72}));
        let first = p.assess(&bag);
        let second = p.assess(&bag);
        assert_eq!(first, second);
    }

    #[test]
    fn custom_threshold_respected() {
        let p = AgeThresholdPolicy::new(40.0, 0.9, 0.6);
        let assessment = p.assess(&patient(json!({"age": 45})));
        assert_eq!(assessment.label, RiskLabel::HighRisk);
        assert_eq!(assessment.confidence, 0.9);
    }

    #[test]
    fn from_config_uses_model_section() {
        let mut model = medgate_types::config::ModelConfig::default();
        model.age_threshold = 50.0;
        model.low_risk_confidence = 0.5;
        let p = AgeThresholdPolicy::from_config(&model);
        let assessment = p.assess(&patient(json!({"age": 49})));
        assert_eq!(assessment.label, RiskLabel::LowRisk);
        assert_eq!(assessment.confidence, 0.5);
    }

    #[test]
    fn usable_as_trait_object() {
        let p: Box<dyn RiskPolicy> = Box::new(policy());
        let assessment = p.assess(&patient(json!({"age": 80})));
        assert_eq!(assessment.label, RiskLabel::HighRisk);
    }
}
