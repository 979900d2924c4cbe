//! Runtime configuration
//!
//! Every section falls back to the defaults in [`crate::constants`], so a
//! config file only needs the values it changes:
//!
//! ```json
//! { "simulation": { "seed": 42 }, "chart": { "samples": 50 } }
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::constants::chart::{
    ANNOTATE_EVERY, CURVE_SAMPLES, DO_CURVE_RANGE_MG_L, MAX_CURVE_SAMPLES, TEMP_CURVE_RANGE_C,
};
use crate::constants::sensors::{PREDICTION_WINDOW, READING_MAX, READING_MIN};
use crate::dosage::DosageModel;
use crate::errors::ConfigError;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnviroChlorConfig {
    /// Dosage formula coefficients
    pub dosage: DosageModel,
    /// Simulated sensor behaviour
    pub simulation: SimulationConfig,
    /// Chart sampling
    pub chart: ChartConfig,
}

/// Simulated sensor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Lowest simulated value
    pub reading_min: f64,
    /// Upper bound of simulated values (exclusive)
    pub reading_max: f64,
    /// Readings averaged by the trend prediction
    pub prediction_window: usize,
    /// Seed for reproducible runs; `None` uses the thread RNG
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            reading_min: READING_MIN,
            reading_max: READING_MAX,
            prediction_window: PREDICTION_WINDOW,
            seed: None,
        }
    }
}

/// Chart sampling settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Samples per curve
    pub samples: usize,
    /// DO axis `(start, end)` in mg/L
    pub dissolved_oxygen_range: (f64, f64),
    /// Temperature axis `(start, end)` in °C
    pub temperature_range: (f64, f64),
    /// Label every Nth sample
    pub annotate_every: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            samples: CURVE_SAMPLES,
            dissolved_oxygen_range: DO_CURVE_RANGE_MG_L,
            temperature_range: TEMP_CURVE_RANGE_C,
            annotate_every: ANNOTATE_EVERY,
        }
    }
}

impl EnviroChlorConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Pretty JSON, suitable for writing back to disk
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;
        if !(sim.reading_min.is_finite() && sim.reading_max.is_finite()) {
            return Err(ConfigError::Invalid {
                reason: "simulation range must be finite",
            });
        }
        if sim.reading_min >= sim.reading_max {
            return Err(ConfigError::Invalid {
                reason: "reading_min must be below reading_max",
            });
        }
        if sim.prediction_window == 0 {
            return Err(ConfigError::Invalid {
                reason: "prediction_window must be at least 1",
            });
        }

        let chart = &self.chart;
        if chart.samples == 0 {
            return Err(ConfigError::Invalid {
                reason: "chart needs at least one sample",
            });
        }
        if chart.samples > MAX_CURVE_SAMPLES {
            return Err(ConfigError::Invalid {
                reason: "chart samples exceed the supported maximum",
            });
        }
        if chart.annotate_every == 0 {
            return Err(ConfigError::Invalid {
                reason: "annotate_every must be at least 1",
            });
        }
        for (start, end) in [chart.dissolved_oxygen_range, chart.temperature_range] {
            if !(start.is_finite() && end.is_finite() && start <= end) {
                return Err(ConfigError::Invalid {
                    reason: "chart ranges must be finite and ascending",
                });
            }
        }

        Ok(())
    }
}
