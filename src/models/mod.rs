// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BandPoint, CoefficientSet, CurvePoint, FactorImpact, HappinessWeights, HazardCoefficients,
    MilestoneProbabilities, ModelCoefficients, Prediction, RelationshipProfile, SimulationParams,
    Tier,
};
pub use requests::PredictRequest;
pub use responses::{ErrorResponse, HealthResponse, PredictResponse};
