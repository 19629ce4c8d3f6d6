//! Amora Algo - Relationship survival prediction service for the Amora app
//!
//! This library provides the predictive model used by the Amora app: a
//! deterministic mapping from relationship metrics to a monthly hazard
//! rate, an exponential survival curve, a happiness score and a
//! per-factor impact breakdown, with tier-gated premium inputs.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{compute_hazard_rate, survival_probability, PredictOptions, Predictor};
pub use crate::models::{
    ModelCoefficients, Prediction, PredictRequest, PredictResponse, RelationshipProfile,
    SimulationParams, Tier,
};
