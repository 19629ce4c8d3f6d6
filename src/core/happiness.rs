use crate::models::{FactorImpact, HappinessWeights, RelationshipProfile, Tier};

use crate::core::hazard::REFERENCE_AGE_YEARS;

/// A relationship is never scored at absolute zero.
pub const HAPPINESS_MIN: f64 = 10.0;
pub const HAPPINESS_MAX: f64 = 100.0;

/// Per-factor signed contributions to the happiness score, in the
/// canonical display order. Premium factors are appended only for
/// `Tier::Premium`. The contributions plus the weight set's base equal
/// the raw (pre-clamp) score.
pub fn impact_breakdown(
    profile: &RelationshipProfile,
    tier: Tier,
    weights: &HappinessWeights,
) -> Vec<FactorImpact> {
    let mut impacts = vec![
        impact("Compatibility", weights.compatibility * profile.compatibility),
        impact(
            "Pos:Neg Ratio",
            weights.positive_ratio * profile.positive_negative_ratio,
        ),
        impact(
            "Conflicts/month",
            -weights.conflict_frequency * f64::from(profile.conflict_frequency),
        ),
        impact(
            "Four Horsemen",
            -weights.four_horsemen * f64::from(profile.four_horsemen_severity),
        ),
        impact("Shared Values", weights.shared_values * profile.shared_values),
        impact(
            "External Stress",
            -weights.external_stress * f64::from(profile.external_stress),
        ),
        impact(
            "Repair Success",
            weights.repair_success * f64::from(profile.repair_success),
        ),
    ];

    if tier == Tier::Premium {
        let age_deviation = (f64::from(profile.age_at_start) - REFERENCE_AGE_YEARS).abs();
        impacts.push(impact(
            "Intimacy",
            weights.intimacy * (f64::from(profile.intimacy_frequency) / 10.0),
        ));
        impacts.push(impact("Age at Start", -weights.age_deviation * age_deviation));
        impacts.push(impact(
            "Financial Compatibility",
            weights.financial * profile.financial_compatibility,
        ));
    }

    impacts
}

/// Unclamped linear happiness score: base plus the summed factor impacts.
pub fn raw_happiness_score(
    profile: &RelationshipProfile,
    tier: Tier,
    weights: &HappinessWeights,
) -> f64 {
    weights.base
        + impact_breakdown(profile, tier, weights)
            .iter()
            .map(|factor| factor.impact)
            .sum::<f64>()
}

/// Happiness score clamped to `[HAPPINESS_MIN, HAPPINESS_MAX]`.
pub fn happiness_score(
    profile: &RelationshipProfile,
    tier: Tier,
    weights: &HappinessWeights,
) -> f64 {
    raw_happiness_score(profile, tier, weights).clamp(HAPPINESS_MIN, HAPPINESS_MAX)
}

#[inline]
fn impact(factor: &str, value: f64) -> FactorImpact {
    FactorImpact {
        factor: factor.to_string(),
        impact: value,
    }
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

    fn extreme_profile(best: bool) -> RelationshipProfile {
        if best {
            RelationshipProfile {
                compatibility: 10.0,
                positive_negative_ratio: 10.0,
                conflict_frequency: 0,
                four_horsemen_severity: 0,
                repair_success: 10,
                shared_values: 10.0,
                external_stress: 0,
                time_together_months: 240,
                intimacy_frequency: 30,
                age_at_start: 28,
                financial_compatibility: 10.0,
            }
        } else {
            RelationshipProfile {
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
            }
        }
    }

    #[test]
    fn score_clamped_at_extreme_corners() {
        for tier in [Tier::Free, Tier::Premium] {
            let weights = match tier {
                Tier::Free => HappinessWeights::free(),
                Tier::Premium => HappinessWeights::premium(),
            };
            let best = happiness_score(&extreme_profile(true), tier, &weights);
            let worst = happiness_score(&extreme_profile(false), tier, &weights);
            assert!((HAPPINESS_MIN..=HAPPINESS_MAX).contains(&best));
            assert!((HAPPINESS_MIN..=HAPPINESS_MAX).contains(&worst));
            assert_eq!(best, HAPPINESS_MAX);
            assert_eq!(worst, HAPPINESS_MIN);
        }
    }

    #[test]
    fn breakdown_sums_to_raw_score() {
        let profile = typical_profile();
        for (tier, weights) in [
            (Tier::Free, HappinessWeights::free()),
            (Tier::Premium, HappinessWeights::premium()),
        ] {
            let breakdown = impact_breakdown(&profile, tier, &weights);
            let sum: f64 = breakdown.iter().map(|f| f.impact).sum();
            let raw = raw_happiness_score(&profile, tier, &weights);
            assert!((weights.base + sum - raw).abs() < 1e-9);
        }
    }

    #[test]
    fn breakdown_order_is_canonical() {
        let profile = typical_profile();
        let free = impact_breakdown(&profile, Tier::Free, &HappinessWeights::free());
        let labels: Vec<&str> = free.iter().map(|f| f.factor.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Compatibility",
                "Pos:Neg Ratio",
                "Conflicts/month",
                "Four Horsemen",
                "Shared Values",
                "External Stress",
                "Repair Success",
            ]
        );

        let premium = impact_breakdown(&profile, Tier::Premium, &HappinessWeights::premium());
        assert_eq!(premium.len(), 10);
        assert_eq!(premium[7].factor, "Intimacy");
        assert_eq!(premium[8].factor, "Age at Start");
        assert_eq!(premium[9].factor, "Financial Compatibility");
    }

    #[test]
    fn free_tier_ignores_premium_inputs() {
        let weights = HappinessWeights::free();
        let mut profile = typical_profile();
        let before = happiness_score(&profile, Tier::Free, &weights);

        profile.financial_compatibility = 10.0;
        profile.intimacy_frequency = 30;
        let after = happiness_score(&profile, Tier::Free, &weights);

        assert_eq!(before, after);
    }

    #[test]
    fn typical_free_score_matches_hand_computation() {
        // 65 + 4*6.5 + 3.2*3.5 - 2.5*4 - 3.8*3 + 3.5*6 - 3*4 + 4.2*6 = 115.0
        let raw = raw_happiness_score(&typical_profile(), Tier::Free, &HappinessWeights::free());
        assert!((raw - 115.0).abs() < 1e-9);

        // The reported score is ceiling-clamped.
        let clamped = happiness_score(&typical_profile(), Tier::Free, &HappinessWeights::free());
        assert_eq!(clamped, HAPPINESS_MAX);
    }
}
