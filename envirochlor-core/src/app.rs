//! Application context for presentation shells
//!
//! Owns the three simulated sensors and the configuration, and exposes the
//! two operator actions:
//!
//! - **Read values**: draw one chlorine and one DO reading
//! - **Show graphs**: build the chart model from everything read so far
//!
//! Both actions validate the operator fields first. A bad field returns an
//! error and leaves every sensor untouched.
//!
//! ```rust
//! use envirochlor_core::{AppContext, EnviroChlorConfig, RawInputs, SequenceRandom};
//!
//! let mut app = AppContext::new(EnviroChlorConfig::default(), |_| SequenceRandom::new([4.0]))?;
//! let raw = RawInputs::new("2", "7", "10");
//!
//! let report = app.read_values(&raw)?;
//! assert_eq!(report.chlorine, 4.0);
//!
//! let chart = app.show_graphs(&raw)?;
//! assert_eq!(chart.trend.predicted, 4.0);
//! # Ok::<(), envirochlor_core::DosageError>(())
//! ```

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::{ChartBuilder, DosageChart, TrendChart};
use crate::config::EnviroChlorConfig;
use crate::errors::DosageResult;
use crate::input::{OperatorInputs, RawInputs};
use crate::random::{RandomSource, SeededRandom, ThreadRandom};
use crate::sensor::{Sensor, SensorChannel};

/// Result of one "read values" action
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadingReport {
    /// New chlorine reading (mg/L)
    pub chlorine: f64,
    /// New dissolved oxygen reading (mg/L)
    pub dissolved_oxygen: f64,
    /// Operator fields at the time of reading
    pub inputs: OperatorInputs,
}

impl fmt::Display for ReadingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Chlorine value: {:.2} mg/L, DO value: {:.2} mg/L, Temperature value: {:.2} °C",
            self.chlorine, self.dissolved_oxygen, self.inputs.temperature
        )?;
        write!(
            f,
            "NTU Inlet: {:.2}, NTU Outlet: {:.2}",
            self.inputs.turbidity_inlet, self.inputs.turbidity_outlet
        )
    }
}

/// Sensors, configuration and chart builder for one session
#[derive(Debug)]
pub struct AppContext<R> {
    config: EnviroChlorConfig,
    charts: ChartBuilder,
    chlorine: Sensor<R>,
    dissolved_oxygen: Sensor<R>,
    temperature: Sensor<R>,
}

impl<R: RandomSource> AppContext<R> {
    /// Create the session; `source_for` supplies each sensor's random source
    pub fn new(
        config: EnviroChlorConfig,
        mut source_for: impl FnMut(SensorChannel) -> R,
    ) -> DosageResult<Self> {
        let sim = &config.simulation;
        let mut sensor = |channel: SensorChannel| {
            Sensor::new(channel, source_for(channel))
                .with_range(sim.reading_min, sim.reading_max)
                .and_then(|built| built.with_prediction_window(sim.prediction_window))
        };

        let chlorine = sensor(SensorChannel::Chlorine)?;
        let dissolved_oxygen = sensor(SensorChannel::DissolvedOxygen)?;
        let temperature = sensor(SensorChannel::Temperature)?;

        Ok(Self {
            charts: ChartBuilder::new(config.dosage, config.chart.clone()),
            config,
            chlorine,
            dissolved_oxygen,
            temperature,
        })
    }

    /// "Read values": draw chlorine and DO, echo the operator fields
    ///
    /// The temperature sensor is not drawn; temperature comes from the
    /// operator.
    pub fn read_values(&mut self, raw: &RawInputs) -> DosageResult<ReadingReport> {
        let inputs = raw.parse()?;

        let chlorine = self.chlorine.read_value();
        let dissolved_oxygen = self.dissolved_oxygen.read_value();

        Ok(ReadingReport {
            chlorine,
            dissolved_oxygen,
            inputs,
        })
    }

    /// "Show graphs": chart model for the current fields and history
    ///
    /// Needs at least one prior read for the chlorine prediction. DO falls
    /// back to 0 when it has never been read.
    pub fn show_graphs(&self, raw: &RawInputs) -> DosageResult<DosageChart> {
        let inputs = raw.parse()?;

        let trend = TrendChart::from_history(
            self.chlorine.history(),
            self.chlorine.prediction_window(),
        )?;
        let dissolved_oxygen = self.dissolved_oxygen.last_value().unwrap_or(0.0);

        Ok(self
            .charts
            .build(&inputs.with_dissolved_oxygen(dissolved_oxygen), trend))
    }

    /// Active configuration
    pub fn config(&self) -> &EnviroChlorConfig {
        &self.config
    }

    /// Chlorine sensor
    pub fn chlorine(&self) -> &Sensor<R> {
        &self.chlorine
    }

    /// Dissolved oxygen sensor
    pub fn dissolved_oxygen(&self) -> &Sensor<R> {
        &self.dissolved_oxygen
    }

    /// Temperature sensor
    pub fn temperature(&self) -> &Sensor<R> {
        &self.temperature
    }

    /// All sensors in display order
    pub fn sensors(&self) -> [&Sensor<R>; 3] {
        [&self.chlorine, &self.dissolved_oxygen, &self.temperature]
    }
}

impl AppContext<ThreadRandom> {
    /// Session drawing from the thread RNG
    pub fn with_thread_random(config: EnviroChlorConfig) -> DosageResult<Self> {
        Self::new(config, |_| ThreadRandom)
    }
}

impl AppContext<SeededRandom> {
    /// Reproducible session; each sensor gets its own stream derived from `seed`
    pub fn seeded(config: EnviroChlorConfig, seed: u64) -> DosageResult<Self> {
        Self::new(config, |channel| SeededRandom::new(seed.wrapping_add(channel_offset(channel))))
    }
}

impl AppContext<Box<dyn RandomSource>> {
    /// Seeded when the config has a seed, thread RNG otherwise
    pub fn from_config(config: EnviroChlorConfig) -> DosageResult<Self> {
        match config.simulation.seed {
            Some(seed) => Self::new(config, |channel| -> Box<dyn RandomSource> {
                Box::new(SeededRandom::new(seed.wrapping_add(channel_offset(channel))))
            }),
            None => Self::new(config, |_| -> Box<dyn RandomSource> { Box::new(ThreadRandom) }),
        }
    }
}

fn channel_offset(channel: SensorChannel) -> u64 {
    match channel {
        SensorChannel::Chlorine => 0,
        SensorChannel::DissolvedOxygen => 1,
        SensorChannel::Temperature => 2,
    }
}
