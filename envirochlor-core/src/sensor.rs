//! Simulated water-quality sensors
//!
//! A [`Sensor`] draws readings from its [`RandomSource`] and keeps every value
//! in an append-only [`SensorHistory`]. The history is the sensor's only
//! state: nothing is reordered, removed or persisted.
//!
//! ## Trend Prediction
//!
//! [`Sensor::predict_next`] is a trailing moving average, not a forecast:
//!
//! ```text
//! len == 0       -> InsufficientData
//! len <  window  -> latest reading
//! len >= window  -> mean of the last `window` readings
//! ```

use core::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::sensors::{
    MIN_READINGS_FOR_PREDICTION, PREDICTION_WINDOW, READING_MAX, READING_MIN,
};
use crate::errors::{DosageError, DosageResult};
use crate::random::RandomSource;

/// Measured quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorChannel {
    /// Free chlorine (mg/L)
    Chlorine,
    /// Dissolved oxygen (mg/L)
    DissolvedOxygen,
    /// Water temperature (°C)
    Temperature,
}

impl SensorChannel {
    /// Short display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Chlorine => "Chlorine",
            Self::DissolvedOxygen => "DO",
            Self::Temperature => "Temperature",
        }
    }

    /// Unit of the readings
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Chlorine | Self::DissolvedOxygen => "mg/L",
            Self::Temperature => "°C",
        }
    }
}

impl fmt::Display for SensorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single reading, ordered by arrival
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Channel the reading belongs to
    pub channel: SensorChannel,
    /// Zero-based arrival index
    pub sequence: usize,
    /// Measured value
    pub value: f64,
}

/// Append-only readings for one channel
#[derive(Debug, Clone, PartialEq)]
pub struct SensorHistory {
    channel: SensorChannel,
    readings: Vec<SensorReading>,
}

impl SensorHistory {
    /// Empty history for `channel`
    pub fn new(channel: SensorChannel) -> Self {
        Self {
            channel,
            readings: Vec::new(),
        }
    }

    /// Append a value; its sequence number is the current length
    pub fn push(&mut self, value: f64) -> SensorReading {
        let reading = SensorReading {
            channel: self.channel,
            sequence: self.readings.len(),
            value,
        };
        self.readings.push(reading);
        reading
    }

    /// Channel this history records
    pub fn channel(&self) -> SensorChannel {
        self.channel
    }

    /// Number of readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True before the first reading
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Most recent reading
    pub fn last(&self) -> Option<&SensorReading> {
        self.readings.last()
    }

    /// All readings, oldest first
    pub fn readings(&self) -> &[SensorReading] {
        &self.readings
    }

    /// All values, oldest first
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.readings.iter().map(|reading| reading.value)
    }

    /// The last `n` readings (fewer if the history is shorter)
    pub fn tail(&self, n: usize) -> &[SensorReading] {
        &self.readings[self.readings.len().saturating_sub(n)..]
    }

    /// Mean of the last `window` readings, if there are that many
    pub fn trailing_mean(&self, window: usize) -> Option<f64> {
        if window == 0 || self.readings.len() < window {
            return None;
        }

        let sum: f64 = self.tail(window).iter().map(|reading| reading.value).sum();
        Some(sum / window as f64)
    }

    /// Trailing-average prediction of the next value
    pub fn predict_next(&self, window: usize) -> DosageResult<f64> {
        let last = self.last().ok_or(DosageError::InsufficientData {
            required: MIN_READINGS_FOR_PREDICTION,
            available: 0,
        })?;

        Ok(self.trailing_mean(window).unwrap_or(last.value))
    }
}

impl Extend<f64> for SensorHistory {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, values: I) {
        for value in values {
            self.push(value);
        }
    }
}

/// Simulated sensor for one channel
#[derive(Debug, Clone)]
pub struct Sensor<R> {
    history: SensorHistory,
    source: R,
    min: f64,
    max: f64,
    prediction_window: usize,
}

impl<R: RandomSource> Sensor<R> {
    /// Sensor drawing from `[0, 14)` with a 5-reading prediction window
    pub fn new(channel: SensorChannel, source: R) -> Self {
        Self {
            history: SensorHistory::new(channel),
            source,
            min: READING_MIN,
            max: READING_MAX,
            prediction_window: PREDICTION_WINDOW,
        }
    }

    /// Draw from `[min, max)` instead of the default span
    pub fn with_range(mut self, min: f64, max: f64) -> DosageResult<Self> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(DosageError::InvalidRange { min, max });
        }

        self.min = min;
        self.max = max;
        Ok(self)
    }

    /// Average over `window` readings when predicting
    pub fn with_prediction_window(mut self, window: usize) -> DosageResult<Self> {
        if window == 0 {
            return Err(DosageError::InvalidWindow { window });
        }

        self.prediction_window = window;
        Ok(self)
    }

    /// Draw a reading, record it, return it
    pub fn read_value(&mut self) -> f64 {
        let value = self.source.next_in_range(self.min, self.max);
        let reading = self.history.push(value);
        debug!(
            "{} reading #{}: {:.2} {}",
            reading.channel,
            reading.sequence,
            value,
            reading.channel.unit()
        );
        value
    }

    /// Trailing-average prediction; needs at least one prior read
    pub fn predict_next(&self) -> DosageResult<f64> {
        self.history.predict_next(self.prediction_window)
    }

    /// Channel display name
    pub fn name(&self) -> &'static str {
        self.history.channel().name()
    }

    /// Channel being measured
    pub fn channel(&self) -> SensorChannel {
        self.history.channel()
    }

    /// Everything read so far
    pub fn history(&self) -> &SensorHistory {
        &self.history
    }

    /// Latest value, if any
    pub fn last_value(&self) -> Option<f64> {
        self.history.last().map(|reading| reading.value)
    }

    /// Readings averaged by [`Sensor::predict_next`]
    pub fn prediction_window(&self) -> usize {
        self.prediction_window
    }

    /// Sampling range `(min, max)`; max is exclusive
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}
