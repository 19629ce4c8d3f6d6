use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{
    RelationshipProfile, Tier, DEFAULT_AGE_AT_START, DEFAULT_FINANCIAL_COMPATIBILITY,
    DEFAULT_INTIMACY_FREQUENCY,
};

/// Request to evaluate a relationship profile.
///
/// Every range here mirrors the model's input contract; requests that
/// fail validation are rejected with a field-level message before the
/// model runs. Out-of-range values are never clamped. The three
/// premium-only fields are optional and fall back to their documented
/// neutral defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(range(min = 0.0, max = 10.0, message = "must be between 0.0 and 10.0"))]
    #[serde(alias = "compatibility")]
    pub compatibility: f64,
    #[validate(range(min = 0.5, max = 10.0, message = "must be between 0.5 and 10.0"))]
    #[serde(alias = "positive_negative_ratio", rename = "positiveNegativeRatio")]
    pub positive_negative_ratio: f64,
    #[validate(range(max = 20, message = "must be between 0 and 20"))]
    #[serde(alias = "conflict_frequency", rename = "conflictFrequency")]
    pub conflict_frequency: u8,
    #[validate(range(max = 10, message = "must be between 0 and 10"))]
    #[serde(alias = "four_horsemen_severity", rename = "fourHorsemenSeverity")]
    pub four_horsemen_severity: u8,
    #[validate(range(max = 10, message = "must be between 0 and 10"))]
    #[serde(alias = "repair_success", rename = "repairSuccess")]
    pub repair_success: u8,
    #[validate(range(min = 0.0, max = 10.0, message = "must be between 0.0 and 10.0"))]
    #[serde(alias = "shared_values", rename = "sharedValues")]
    pub shared_values: f64,
    #[validate(range(max = 10, message = "must be between 0 and 10"))]
    #[serde(alias = "external_stress", rename = "externalStress")]
    pub external_stress: u8,
    #[validate(range(min = 1, message = "must be at least 1 month"))]
    #[serde(alias = "time_together_months", rename = "timeTogetherMonths")]
    pub time_together_months: u32,
    #[serde(default = "default_tier")]
    pub tier: Tier,
    #[validate(range(max = 30, message = "must be between 0 and 30"))]
    #[serde(default, alias = "intimacy_frequency", rename = "intimacyFrequency")]
    pub intimacy_frequency: Option<u8>,
    #[validate(range(min = 18, max = 50, message = "must be between 18 and 50"))]
    #[serde(default, alias = "age_at_start", rename = "ageAtStart")]
    pub age_at_start: Option<u8>,
    #[validate(range(min = 0.0, max = 10.0, message = "must be between 0.0 and 10.0"))]
    #[serde(default, alias = "financial_compatibility", rename = "financialCompatibility")]
    pub financial_compatibility: Option<f64>,
    /// Premium only: opt in to the Monte Carlo survival envelope.
    #[serde(default, alias = "include_confidence_band", rename = "includeConfidenceBand")]
    pub include_confidence_band: bool,
    /// Seed for the confidence band draws; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_tier() -> Tier {
    Tier::Free
}

impl PredictRequest {
    /// Build the immutable profile the model consumes, filling the
    /// premium-only fields with their neutral defaults when absent.
    /// Callers must have run `validate()` first.
    pub fn to_profile(&self) -> RelationshipProfile {
        RelationshipProfile {
            compatibility: self.compatibility,
            positive_negative_ratio: self.positive_negative_ratio,
            conflict_frequency: self.conflict_frequency,
            four_horsemen_severity: self.four_horsemen_severity,
            repair_success: self.repair_success,
            shared_values: self.shared_values,
            external_stress: self.external_stress,
            time_together_months: self.time_together_months,
            intimacy_frequency: self.intimacy_frequency.unwrap_or(DEFAULT_INTIMACY_FREQUENCY),
            age_at_start: self.age_at_start.unwrap_or(DEFAULT_AGE_AT_START),
            financial_compatibility: self
                .financial_compatibility
                .unwrap_or(DEFAULT_FINANCIAL_COMPATIBILITY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> PredictRequest {
        PredictRequest {
            compatibility: 6.5,
            positive_negative_ratio: 3.5,
            conflict_frequency: 4,
            four_horsemen_severity: 3,
            repair_success: 6,
            shared_values: 6.0,
            external_stress: 4,
            time_together_months: 18,
            tier: Tier::Free,
            intimacy_frequency: None,
            age_at_start: None,
            financial_compatibility: None,
            include_confidence_band: false,
            seed: None,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(base_request().validate().is_ok());
    }

    #[test]
    fn out_of_range_ratio_rejected() {
        let mut req = base_request();
        req.positive_negative_ratio = 0.2;
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("positive_negative_ratio"));
    }

    #[test]
    fn out_of_range_premium_field_rejected() {
        let mut req = base_request();
        req.age_at_start = Some(17);
        assert!(req.validate().is_err());
    }

    #[test]
    fn missing_premium_fields_get_neutral_defaults() {
        let profile = base_request().to_profile();
        assert_eq!(profile.intimacy_frequency, DEFAULT_INTIMACY_FREQUENCY);
        assert_eq!(profile.age_at_start, DEFAULT_AGE_AT_START);
        assert_eq!(profile.financial_compatibility, DEFAULT_FINANCIAL_COMPATIBILITY);
    }

    #[test]
    fn camel_case_payload_deserializes() {
        let json = r#"{
            "compatibility": 6.5,
            "positiveNegativeRatio": 3.5,
            "conflictFrequency": 4,
            "fourHorsemenSeverity": 3,
            "repairSuccess": 6,
            "sharedValues": 6.0,
            "externalStress": 4,
            "timeTogetherMonths": 18,
            "tier": "premium",
            "intimacyFrequency": 12
        }"#;
        let req: PredictRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.tier, Tier::Premium);
        assert_eq!(req.intimacy_frequency, Some(12));
        assert!(!req.include_confidence_band);
    }
}
