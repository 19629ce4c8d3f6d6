use crate::models::{HazardCoefficients, RelationshipProfile, Tier};

/// Gottman "magic ratio" threshold; ratios below it add hazard.
pub const HEALTHY_RATIO_THRESHOLD: f64 = 5.0;

/// Reference age the premium age-deviation term is measured against.
pub const REFERENCE_AGE_YEARS: f64 = 28.0;

/// Calculate the monthly dissolution hazard for a profile.
///
/// Linear additive model: protective factors (compatibility, interaction
/// ratio, shared values, repair success, and for premium intimacy and
/// financial compatibility) subtract from the baseline, harmful factors
/// (conflicts, Four Horsemen, external stress, age deviation) add to it.
/// The result is clamped to the configured floor so the hazard is always
/// strictly positive. Premium terms are applied only for `Tier::Premium`;
/// the tier selects a whole coefficient preset upstream, so the free
/// preset's premium entries are never read.
///
/// The profile must already be range-validated; this function does no
/// bounds checking.
pub fn compute_hazard_rate(
    profile: &RelationshipProfile,
    tier: Tier,
    coefficients: &HazardCoefficients,
) -> f64 {
    let mut penalty = coefficients.positive_ratio
        * (HEALTHY_RATIO_THRESHOLD - profile.positive_negative_ratio)
        + coefficients.conflict_frequency * f64::from(profile.conflict_frequency)
        + coefficients.four_horsemen * f64::from(profile.four_horsemen_severity)
        - coefficients.compatibility * profile.compatibility
        - coefficients.shared_values * profile.shared_values
        + coefficients.external_stress * f64::from(profile.external_stress)
        - coefficients.repair_success * f64::from(profile.repair_success);

    if tier == Tier::Premium {
        let age_deviation = (f64::from(profile.age_at_start) - REFERENCE_AGE_YEARS).abs();
        penalty += -coefficients.intimacy * (f64::from(profile.intimacy_frequency) / 10.0)
            + coefficients.age_deviation * age_deviation
            - coefficients.financial * profile.financial_compatibility;
    }

    (coefficients.base_rate + penalty).max(coefficients.floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typical_profile() -> RelationshipProfile {
        RelationshipProfile {
            compatibility: 6.5,
            positive_negative_ratio: 3.5,
            conflict_frequency: 4,
            four_horsemen_severity: 3,
            repair_success: 6,
            shared_values: 6.0,
            external_stress: 4,
            time_together_months: 18,
            intimacy_frequency: 8,
            age_at_start: 25,
            financial_compatibility: 6.0,
        }
    }

    #[test]
    fn typical_free_profile_matches_hand_computation() {
        // 0.035 + 0.012*1.5 + 0.008*4 + 0.009*3 - 0.006*6.5 - 0.005*6
        //       + 0.007*4 - 0.006*6 = 0.035
        let hazard =
            compute_hazard_rate(&typical_profile(), Tier::Free, &HazardCoefficients::free());
        assert!((hazard - 0.035).abs() < 1e-12);
    }

    #[test]
    fn hazard_never_below_floor() {
        // All protective factors maxed out, no harm at all.
        let profile = RelationshipProfile {
            compatibility: 10.0,
            positive_negative_ratio: 10.0,
            conflict_frequency: 0,
            four_horsemen_severity: 0,
            repair_success: 10,
            shared_values: 10.0,
            external_stress: 0,
            time_together_months: 120,
            intimacy_frequency: 30,
            age_at_start: 28,
            financial_compatibility: 10.0,
        };
        let coefficients = HazardCoefficients::free();
        let hazard = compute_hazard_rate(&profile, Tier::Free, &coefficients);
        assert_eq!(hazard, coefficients.floor);
    }

    #[test]
    fn worst_case_is_high_but_finite() {
        let profile = RelationshipProfile {
            compatibility: 0.0,
            positive_negative_ratio: 0.5,
            conflict_frequency: 20,
            four_horsemen_severity: 10,
            repair_success: 0,
            shared_values: 0.0,
            external_stress: 10,
            time_together_months: 1,
            intimacy_frequency: 0,
            age_at_start: 50,
            financial_compatibility: 0.0,
        };
        let coefficients = HazardCoefficients::free();
        let hazard = compute_hazard_rate(&profile, Tier::Free, &coefficients);
        assert!(hazard.is_finite());
        assert!(hazard > 0.3);
    }

    #[test]
    fn premium_terms_ignored_for_free_tier() {
        let mut profile = typical_profile();
        let coefficients = HazardCoefficients::free();
        let before = compute_hazard_rate(&profile, Tier::Free, &coefficients);

        profile.intimacy_frequency = 30;
        profile.financial_compatibility = 10.0;
        profile.age_at_start = 50;
        let after = compute_hazard_rate(&profile, Tier::Free, &coefficients);

        assert_eq!(before, after);
    }

    #[test]
    fn premium_intimacy_reduces_hazard() {
        let coefficients = HazardCoefficients::premium();
        let low = RelationshipProfile {
            intimacy_frequency: 2,
            ..typical_profile()
        };
        let high = RelationshipProfile {
            intimacy_frequency: 20,
            ..typical_profile()
        };
        let hazard_low = compute_hazard_rate(&low, Tier::Premium, &coefficients);
        let hazard_high = compute_hazard_rate(&high, Tier::Premium, &coefficients);
        assert!(hazard_high < hazard_low);
    }

    #[test]
    fn age_deviation_is_symmetric() {
        let coefficients = HazardCoefficients::premium();
        let younger = RelationshipProfile {
            age_at_start: 23,
            ..typical_profile()
        };
        let older = RelationshipProfile {
            age_at_start: 33,
            ..typical_profile()
        };
        let hazard_younger = compute_hazard_rate(&younger, Tier::Premium, &coefficients);
        let hazard_older = compute_hazard_rate(&older, Tier::Premium, &coefficients);
        assert!((hazard_younger - hazard_older).abs() < 1e-12);
    }
}
