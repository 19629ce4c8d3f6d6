use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::models::{BandPoint, CurvePoint, MilestoneProbabilities};

/// Milestone horizons surfaced as headline metrics.
pub const ONE_YEAR_MONTHS: u32 = 12;
pub const FIVE_YEARS_MONTHS: u32 = 60;
pub const TEN_YEARS_MONTHS: u32 = 120;

/// Exponential survival law `S(t) = exp(-hazard * t)` with `t` in months.
///
/// `S(0)` is exactly 1, the curve is non-increasing in `t`, and for a
/// fixed `t` it decreases as the hazard grows.
#[inline]
pub fn survival_probability(hazard: f64, months: f64) -> f64 {
    (-hazard * months).exp()
}

/// Evaluate the survival curve on the canonical grid of integer months
/// `0..=curve_months`, reported as percentages.
pub fn survival_curve(hazard: f64, curve_months: u32) -> Vec<CurvePoint> {
    (0..=curve_months)
        .map(|months| CurvePoint {
            months,
            probability_pct: survival_probability(hazard, f64::from(months)) * 100.0,
        })
        .collect()
}

/// Survival probabilities at the 1/5/10-year milestones, as percentages.
pub fn milestone_probabilities(hazard: f64) -> MilestoneProbabilities {
    MilestoneProbabilities {
        one_year_pct: survival_probability(hazard, f64::from(ONE_YEAR_MONTHS)) * 100.0,
        five_year_pct: survival_probability(hazard, f64::from(FIVE_YEARS_MONTHS)) * 100.0,
        ten_year_pct: survival_probability(hazard, f64::from(TEN_YEARS_MONTHS)) * 100.0,
    }
}

/// 5th/95th percentile survival envelope from hazard noise draws.
///
/// Hazard samples come from `Normal(hazard, noise_std)`, floor-clamped so
/// no draw can push survival above 100%. Because `S(t)` is monotone
/// decreasing in the hazard, the per-month envelope follows from the
/// 95th/5th percentile hazard draws directly; there is no need to rank
/// the curve at every grid point.
///
/// This is a presentational uncertainty illustration around the point
/// estimate, not a calibrated confidence interval. The same seed always
/// reproduces the same band.
pub fn confidence_band(
    hazard: f64,
    floor: f64,
    curve_months: u32,
    draws: usize,
    noise_std: f64,
    seed: u64,
) -> Vec<BandPoint> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut samples: Vec<f64> = match Normal::new(hazard, noise_std) {
        Ok(normal) => (0..draws.max(1))
            .map(|_| normal.sample(&mut rng).max(floor))
            .collect(),
        // Degenerate noise configuration: fall back to the point estimate.
        Err(_) => vec![hazard.max(floor)],
    };
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let last = samples.len() - 1;
    let hazard_p5 = samples[percentile_index(last, 0.05)];
    let hazard_p95 = samples[percentile_index(last, 0.95)];

    (0..=curve_months)
        .map(|months| {
            let t = f64::from(months);
            BandPoint {
                months,
                // High hazard draw bounds survival from below and vice versa.
                p5_pct: survival_probability(hazard_p95, t) * 100.0,
                p95_pct: survival_probability(hazard_p5, t) * 100.0,
            }
        })
        .collect()
}

#[inline]
fn percentile_index(last: usize, quantile: f64) -> usize {
    ((last as f64) * quantile).round() as usize
}
