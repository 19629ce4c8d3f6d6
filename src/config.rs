use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::models::{
    CoefficientSet, HappinessWeights, HazardCoefficients, ModelCoefficients, SimulationParams,
};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub simulation: SimulationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Coefficient presets as external configuration.
///
/// Any value left out of the file falls back to the built-in preset for
/// its tier, so tuning a single coefficient never requires restating the
/// whole table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelSettings {
    #[serde(default)]
    pub free: PresetConfig,
    #[serde(default)]
    pub premium: PresetConfig,
}

impl ModelSettings {
    pub fn coefficients(&self) -> ModelCoefficients {
        ModelCoefficients {
            free: self.free.apply(CoefficientSet::free()),
            premium: self.premium.apply(CoefficientSet::premium()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresetConfig {
    #[serde(default)]
    pub hazard: HazardConfig,
    #[serde(default)]
    pub happiness: HappinessConfig,
}

impl PresetConfig {
    fn apply(&self, base: CoefficientSet) -> CoefficientSet {
        CoefficientSet {
            hazard: self.hazard.apply(base.hazard),
            happiness: self.happiness.apply(base.happiness),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HazardConfig {
    pub base_rate: Option<f64>,
    pub floor: Option<f64>,
    pub positive_ratio: Option<f64>,
    pub conflict_frequency: Option<f64>,
    pub four_horsemen: Option<f64>,
    pub compatibility: Option<f64>,
    pub shared_values: Option<f64>,
    pub external_stress: Option<f64>,
    pub repair_success: Option<f64>,
    pub intimacy: Option<f64>,
    pub age_deviation: Option<f64>,
    pub financial: Option<f64>,
}

impl HazardConfig {
    fn apply(&self, base: HazardCoefficients) -> HazardCoefficients {
        HazardCoefficients {
            base_rate: self.base_rate.unwrap_or(base.base_rate),
            floor: self.floor.unwrap_or(base.floor),
            positive_ratio: self.positive_ratio.unwrap_or(base.positive_ratio),
            conflict_frequency: self.conflict_frequency.unwrap_or(base.conflict_frequency),
            four_horsemen: self.four_horsemen.unwrap_or(base.four_horsemen),
            compatibility: self.compatibility.unwrap_or(base.compatibility),
            shared_values: self.shared_values.unwrap_or(base.shared_values),
            external_stress: self.external_stress.unwrap_or(base.external_stress),
            repair_success: self.repair_success.unwrap_or(base.repair_success),
            intimacy: self.intimacy.unwrap_or(base.intimacy),
            age_deviation: self.age_deviation.unwrap_or(base.age_deviation),
            financial: self.financial.unwrap_or(base.financial),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HappinessConfig {
    pub base: Option<f64>,
    pub compatibility: Option<f64>,
    pub positive_ratio: Option<f64>,
    pub conflict_frequency: Option<f64>,
    pub four_horsemen: Option<f64>,
    pub shared_values: Option<f64>,
    pub external_stress: Option<f64>,
    pub repair_success: Option<f64>,
    pub intimacy: Option<f64>,
    pub age_deviation: Option<f64>,
    pub financial: Option<f64>,
}

impl HappinessConfig {
    fn apply(&self, base: HappinessWeights) -> HappinessWeights {
        HappinessWeights {
            base: self.base.unwrap_or(base.base),
            compatibility: self.compatibility.unwrap_or(base.compatibility),
            positive_ratio: self.positive_ratio.unwrap_or(base.positive_ratio),
            conflict_frequency: self.conflict_frequency.unwrap_or(base.conflict_frequency),
            four_horsemen: self.four_horsemen.unwrap_or(base.four_horsemen),
            shared_values: self.shared_values.unwrap_or(base.shared_values),
            external_stress: self.external_stress.unwrap_or(base.external_stress),
            repair_success: self.repair_success.unwrap_or(base.repair_success),
            intimacy: self.intimacy.unwrap_or(base.intimacy),
            age_deviation: self.age_deviation.unwrap_or(base.age_deviation),
            financial: self.financial.unwrap_or(base.financial),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulationSettings {
    pub curve_months: Option<u32>,
    pub draws: Option<usize>,
    pub noise_std: Option<f64>,
}

impl SimulationSettings {
    pub fn params(&self) -> SimulationParams {
        let defaults = SimulationParams::default();
        SimulationParams {
            curve_months: self.curve_months.unwrap_or(defaults.curve_months),
            draws: self.draws.unwrap_or(defaults.draws),
            noise_std: self.noise_std.unwrap_or(defaults.noise_std),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

/// Coefficient or simulation values that make the model ill-defined.
/// Checked once at startup; requests never see these.
#[derive(Debug, Error)]
pub enum ModelConfigError {
    #[error("{tier} hazard floor must be positive, got {value}")]
    NonPositiveFloor { tier: &'static str, value: f64 },
    #[error("{tier} base hazard rate must be positive, got {value}")]
    NonPositiveBaseRate { tier: &'static str, value: f64 },
    #[error("simulation draw count must be at least 1")]
    ZeroDraws,
    #[error("simulation noise standard deviation must be non-negative, got {0}")]
    NegativeNoise(f64),
    #[error("survival curve must span at least 120 months to cover the milestones, got {0}")]
    CurveTooShort(u32),
}

/// Fail-fast startup validation of the loaded coefficient tables.
pub fn validate_model(
    coefficients: &ModelCoefficients,
    simulation: &SimulationParams,
) -> Result<(), ModelConfigError> {
    for (tier, preset) in [
        ("free", &coefficients.free),
        ("premium", &coefficients.premium),
    ] {
        if preset.hazard.floor <= 0.0 {
            return Err(ModelConfigError::NonPositiveFloor {
                tier,
                value: preset.hazard.floor,
            });
        }
        if preset.hazard.base_rate <= 0.0 {
            return Err(ModelConfigError::NonPositiveBaseRate {
                tier,
                value: preset.hazard.base_rate,
            });
        }
    }
    if simulation.draws == 0 {
        return Err(ModelConfigError::ZeroDraws);
    }
    if simulation.noise_std < 0.0 {
        return Err(ModelConfigError::NegativeNoise(simulation.noise_std));
    }
    if simulation.curve_months < 120 {
        return Err(ModelConfigError::CurveTooShort(simulation.curve_months));
    }
    Ok(())
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with AMORA_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with AMORA_)
            // e.g., AMORA_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("AMORA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("AMORA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
