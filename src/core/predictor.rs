use crate::core::{
    happiness::{happiness_score, impact_breakdown},
    hazard::compute_hazard_rate,
    survival::{confidence_band, milestone_probabilities, survival_curve},
};
use crate::models::{ModelCoefficients, Prediction, RelationshipProfile, SimulationParams, Tier};

/// Per-request evaluation options.
#[derive(Debug, Clone, Copy)]
pub struct PredictOptions {
    /// Attach the Monte Carlo survival envelope (premium tier only).
    pub include_confidence_band: bool,
    /// Seed for the envelope draws; the same seed reproduces the band.
    pub seed: u64,
}

impl Default for PredictOptions {
    fn default() -> Self {
        Self {
            include_confidence_band: false,
            seed: 0,
        }
    }
}

/// Main prediction orchestrator.
///
/// Holds the two tier coefficient presets and the simulation parameters;
/// each call maps one validated profile to the full output bundle:
/// hazard rate, survival curve, milestone probabilities, happiness score,
/// impact breakdown and the optional confidence band. Evaluations are
/// pure and independent of one another.
#[derive(Debug, Clone)]
pub struct Predictor {
    coefficients: ModelCoefficients,
    simulation: SimulationParams,
}

impl Predictor {
    pub fn new(coefficients: ModelCoefficients, simulation: SimulationParams) -> Self {
        Self {
            coefficients,
            simulation,
        }
    }

    pub fn with_default_coefficients() -> Self {
        Self {
            coefficients: ModelCoefficients::default(),
            simulation: SimulationParams::default(),
        }
    }

    /// Evaluate a profile without the confidence band.
    pub fn predict(&self, profile: &RelationshipProfile, tier: Tier) -> Prediction {
        self.predict_with_options(profile, tier, PredictOptions::default())
    }

    /// Evaluate a profile; the band is attached only when requested and
    /// the tier is premium.
    pub fn predict_with_options(
        &self,
        profile: &RelationshipProfile,
        tier: Tier,
        options: PredictOptions,
    ) -> Prediction {
        let preset = self.coefficients.preset(tier);

        let hazard = compute_hazard_rate(profile, tier, &preset.hazard);
        let curve = survival_curve(hazard, self.simulation.curve_months);
        let milestones = milestone_probabilities(hazard);
        let score = happiness_score(profile, tier, &preset.happiness);
        let breakdown = impact_breakdown(profile, tier, &preset.happiness);

        let band = if options.include_confidence_band && tier == Tier::Premium {
            Some(confidence_band(
                hazard,
                preset.hazard.floor,
                self.simulation.curve_months,
                self.simulation.draws,
                self.simulation.noise_std,
                options.seed,
            ))
        } else {
            None
        };

        Prediction {
            monthly_hazard_rate: hazard,
            survival_curve: curve,
            milestones,
            happiness_score: score,
            impact_breakdown: breakdown,
            confidence_band: band,
        }
    }
}

impl Default for Predictor {
    fn default() -> Self {
        Self::with_default_coefficients()
    }
}
