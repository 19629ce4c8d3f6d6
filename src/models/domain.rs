use serde::{Deserialize, Serialize};

/// Feature tier deciding which coefficient preset and which optional
/// inputs are active. How a caller earns `Premium` (payment, feature
/// flag) is not this service's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Premium,
}

/// Neutral defaults for the premium-only inputs, applied when a caller
/// does not supply them.
pub const DEFAULT_INTIMACY_FREQUENCY: u8 = 8;
pub const DEFAULT_AGE_AT_START: u8 = 25;
pub const DEFAULT_FINANCIAL_COMPATIBILITY: f64 = 6.0;

/// Validated relationship metrics for a single evaluation.
///
/// Constructed once per request from a validated `PredictRequest` and
/// passed by reference into the model; the model performs no bounds
/// checking of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipProfile {
    pub compatibility: f64,
    #[serde(rename = "positiveNegativeRatio")]
    pub positive_negative_ratio: f64,
    #[serde(rename = "conflictFrequency")]
    pub conflict_frequency: u8,
    #[serde(rename = "fourHorsemenSeverity")]
    pub four_horsemen_severity: u8,
    #[serde(rename = "repairSuccess")]
    pub repair_success: u8,
    #[serde(rename = "sharedValues")]
    pub shared_values: f64,
    #[serde(rename = "externalStress")]
    pub external_stress: u8,
    #[serde(rename = "timeTogetherMonths")]
    pub time_together_months: u32,
    #[serde(rename = "intimacyFrequency")]
    pub intimacy_frequency: u8,
    #[serde(rename = "ageAtStart")]
    pub age_at_start: u8,
    #[serde(rename = "financialCompatibility")]
    pub financial_compatibility: f64,
}

/// Hazard-rate coefficients for one tier.
///
/// Values are stored as positive magnitudes; the sign convention
/// (protective factors reduce hazard, harmful factors increase it) is
/// applied inside the hazard formula. The premium-only entries are
/// never read when the free preset is selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardCoefficients {
    /// Healthy-relationship baseline hazard per month.
    pub base_rate: f64,
    /// Lower clamp keeping the hazard strictly positive.
    pub floor: f64,
    pub positive_ratio: f64,
    pub conflict_frequency: f64,
    pub four_horsemen: f64,
    pub compatibility: f64,
    pub shared_values: f64,
    pub external_stress: f64,
    pub repair_success: f64,
    pub intimacy: f64,
    pub age_deviation: f64,
    pub financial: f64,
}

impl HazardCoefficients {
    pub fn free() -> Self {
        Self {
            base_rate: 0.035,
            floor: 0.01,
            positive_ratio: 0.012,
            conflict_frequency: 0.008,
            four_horsemen: 0.009,
            compatibility: 0.006,
            shared_values: 0.005,
            external_stress: 0.007,
            repair_success: 0.006,
            intimacy: 0.0,
            age_deviation: 0.0,
            financial: 0.0,
        }
    }

    pub fn premium() -> Self {
        Self {
            base_rate: 0.033,
            floor: 0.01,
            positive_ratio: 0.012,
            conflict_frequency: 0.008,
            four_horsemen: 0.009,
            compatibility: 0.006,
            shared_values: 0.005,
            external_stress: 0.007,
            repair_success: 0.006,
            intimacy: 0.002,
            age_deviation: 0.001,
            financial: 0.001,
        }
    }
}

impl Default for HazardCoefficients {
    fn default() -> Self {
        Self::free()
    }
}

/// Happiness-score weights for one tier. Same storage convention as
/// `HazardCoefficients`: positive magnitudes, signs live in the formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HappinessWeights {
    /// Additive base the weighted terms adjust around.
    pub base: f64,
    pub compatibility: f64,
    pub positive_ratio: f64,
    pub conflict_frequency: f64,
    pub four_horsemen: f64,
    pub shared_values: f64,
    pub external_stress: f64,
    pub repair_success: f64,
    pub intimacy: f64,
    pub age_deviation: f64,
    pub financial: f64,
}

impl HappinessWeights {
    pub fn free() -> Self {
        Self {
            base: 65.0,
            compatibility: 4.0,
            positive_ratio: 3.2,
            conflict_frequency: 2.5,
            four_horsemen: 3.8,
            shared_values: 3.5,
            external_stress: 3.0,
            repair_success: 4.2,
            intimacy: 0.0,
            age_deviation: 0.0,
            financial: 0.0,
        }
    }

    pub fn premium() -> Self {
        Self {
            base: 60.0,
            compatibility: 4.0,
            positive_ratio: 3.2,
            conflict_frequency: 2.5,
            four_horsemen: 3.8,
            shared_values: 3.5,
            external_stress: 3.0,
            repair_success: 4.2,
            intimacy: 0.9,
            age_deviation: 0.4,
            financial: 1.4,
        }
    }
}

impl Default for HappinessWeights {
    fn default() -> Self {
        Self::free()
    }
}

/// Full coefficient preset for one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientSet {
    pub hazard: HazardCoefficients,
    pub happiness: HappinessWeights,
}

impl CoefficientSet {
    pub fn free() -> Self {
        Self {
            hazard: HazardCoefficients::free(),
            happiness: HappinessWeights::free(),
        }
    }

    pub fn premium() -> Self {
        Self {
            hazard: HazardCoefficients::premium(),
            happiness: HappinessWeights::premium(),
        }
    }
}

/// Both tier presets, as loaded from configuration. The tier of an
/// incoming request selects which preset is used; presets are swapped
/// whole, never blended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelCoefficients {
    pub free: CoefficientSet,
    pub premium: CoefficientSet,
}

impl ModelCoefficients {
    pub fn preset(&self, tier: Tier) -> &CoefficientSet {
        match tier {
            Tier::Free => &self.free,
            Tier::Premium => &self.premium,
        }
    }
}

impl Default for ModelCoefficients {
    fn default() -> Self {
        Self {
            free: CoefficientSet::free(),
            premium: CoefficientSet::premium(),
        }
    }
}

/// Monte Carlo and curve-grid parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Length of the survival curve grid in months (inclusive upper end).
    pub curve_months: u32,
    /// Number of hazard draws for the confidence band.
    pub draws: usize,
    /// Standard deviation of the hazard noise distribution.
    pub noise_std: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            curve_months: 240,
            draws: 500,
            noise_std: 0.005,
        }
    }
}

/// One point of the survival curve.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurvePoint {
    pub months: u32,
    #[serde(rename = "probabilityPct")]
    pub probability_pct: f64,
}

/// Headline survival probabilities at 1, 5 and 10 years.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MilestoneProbabilities {
    #[serde(rename = "oneYearPct")]
    pub one_year_pct: f64,
    #[serde(rename = "fiveYearPct")]
    pub five_year_pct: f64,
    #[serde(rename = "tenYearPct")]
    pub ten_year_pct: f64,
}

/// Signed contribution of a single factor to the happiness score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorImpact {
    pub factor: String,
    pub impact: f64,
}

/// One point of the 5th/95th percentile survival envelope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BandPoint {
    pub months: u32,
    #[serde(rename = "p5Pct")]
    pub p5_pct: f64,
    #[serde(rename = "p95Pct")]
    pub p95_pct: f64,
}

/// Complete model output for one evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(rename = "monthlyHazardRate")]
    pub monthly_hazard_rate: f64,
    #[serde(rename = "survivalCurve")]
    pub survival_curve: Vec<CurvePoint>,
    pub milestones: MilestoneProbabilities,
    /// Clamped happiness score, still fractional; responses round it.
    #[serde(rename = "happinessScore")]
    pub happiness_score: f64,
    #[serde(rename = "impactBreakdown")]
    pub impact_breakdown: Vec<FactorImpact>,
    #[serde(rename = "confidenceBand", skip_serializing_if = "Option::is_none")]
    pub confidence_band: Option<Vec<BandPoint>>,
}
