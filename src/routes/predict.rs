use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{PredictOptions, Predictor};
use crate::models::{ErrorResponse, HealthResponse, PredictRequest, PredictResponse, Tier};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub predictor: Predictor,
}

/// Configure all prediction routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/predict", web::post().to(predict));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Prediction endpoint
///
/// POST /api/v1/predict
///
/// Request body:
/// ```json
/// {
///   "compatibility": 6.5,
///   "positiveNegativeRatio": 3.5,
///   "conflictFrequency": 4,
///   "fourHorsemenSeverity": 3,
///   "repairSuccess": 6,
///   "sharedValues": 6.0,
///   "externalStress": 4,
///   "timeTogetherMonths": 18,
///   "tier": "free",
///   "includeConfidenceBand": false
/// }
/// ```
async fn predict(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> impl Responder {
    // Reject out-of-range fields before the model sees anything;
    // values are never clamped into range.
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for predict request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let tier = req.tier;
    let profile = req.to_profile();

    if req.include_confidence_band && tier == Tier::Free {
        tracing::debug!("Confidence band requested on free tier; skipping");
    }

    let options = PredictOptions {
        include_confidence_band: req.include_confidence_band,
        seed: req.seed.unwrap_or_else(rand::random),
    };

    let prediction = state.predictor.predict_with_options(&profile, tier, options);

    tracing::info!(
        "Evaluated {:?} profile: hazard={:.4}/month, happiness={:.1}, 1yr={:.1}%",
        tier,
        prediction.monthly_hazard_rate,
        prediction.happiness_score,
        prediction.milestones.one_year_pct
    );

    HttpResponse::Ok().json(PredictResponse::from_prediction(
        prediction,
        tier,
        profile.time_together_months,
    ))
}
