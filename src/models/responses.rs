use serde::{Deserialize, Serialize};

use crate::models::domain::{
    BandPoint, CurvePoint, FactorImpact, MilestoneProbabilities, Prediction, Tier,
};

/// Response for the predict endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub tier: Tier,
    #[serde(rename = "monthlyHazardRate")]
    pub monthly_hazard_rate: f64,
    #[serde(rename = "survivalCurve")]
    pub survival_curve: Vec<CurvePoint>,
    pub milestones: MilestoneProbabilities,
    /// Happiness score rounded to a whole number in [10, 100].
    #[serde(rename = "happinessScore")]
    pub happiness_score: u8,
    #[serde(rename = "impactBreakdown")]
    pub impact_breakdown: Vec<FactorImpact>,
    #[serde(rename = "confidenceBand", skip_serializing_if = "Option::is_none")]
    pub confidence_band: Option<Vec<BandPoint>>,
    /// Relationship duration echoed back for report display; it plays
    /// no part in the hazard computation.
    #[serde(rename = "timeTogetherMonths")]
    pub time_together_months: u32,
}

impl PredictResponse {
    pub fn from_prediction(prediction: Prediction, tier: Tier, time_together_months: u32) -> Self {
        Self {
            tier,
            monthly_hazard_rate: prediction.monthly_hazard_rate,
            survival_curve: prediction.survival_curve,
            milestones: prediction.milestones,
            happiness_score: prediction.happiness_score.round() as u8,
            impact_breakdown: prediction.impact_breakdown,
            confidence_band: prediction.confidence_band,
            time_together_months,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
