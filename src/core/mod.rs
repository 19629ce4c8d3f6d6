// Core model exports
pub mod happiness;
pub mod hazard;
pub mod predictor;
pub mod survival;

pub use happiness::{happiness_score, impact_breakdown, raw_happiness_score};
pub use hazard::compute_hazard_rate;
pub use predictor::{PredictOptions, Predictor};
pub use survival::{confidence_band, milestone_probabilities, survival_curve, survival_probability};
