//! Simulated Sensor Specifications

/// Lowest value a simulated sensor can draw.
pub const READING_MIN: f64 = 0.0;

/// Upper bound of a simulated draw (exclusive).
///
/// The same span is used for every channel, including temperature.
pub const READING_MAX: f64 = 14.0;

/// Number of trailing readings averaged by the trend prediction.
///
/// With fewer readings than this the prediction is the latest value.
pub const PREDICTION_WINDOW: usize = 5;

/// Readings needed before any prediction can be made.
pub const MIN_READINGS_FOR_PREDICTION: usize = 1;
