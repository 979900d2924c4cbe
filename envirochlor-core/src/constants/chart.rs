//! Chart Sampling Defaults

/// Samples taken along each dosage curve.
pub const CURVE_SAMPLES: usize = 100;

/// Largest sample count a chart config may ask for.
pub const MAX_CURVE_SAMPLES: usize = 10_000;

/// Dissolved oxygen axis range (mg/L), inclusive.
pub const DO_CURVE_RANGE_MG_L: (f64, f64) = (0.0, 14.0);

/// Temperature axis range (°C), inclusive.
pub const TEMP_CURVE_RANGE_C: (f64, f64) = (0.0, 30.0);

/// Label every Nth sample of a curve.
pub const ANNOTATE_EVERY: usize = 10;

/// Scale for the relative-difference curve.
pub const PERCENT: f64 = 100.0;
