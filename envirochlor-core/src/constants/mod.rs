//! Constants for EnviroChlor Core
//!
//! Every coefficient and default used by the engine is defined here, with
//! units in the name where it has one.
//!
//! ## Organization
//!
//! - **Dosage**: coefficients of the linear dosage formulas
//! - **Sensors**: simulated sensor ranges and prediction window
//! - **Chart**: sampling of the dosage curves

/// Linear dosage formula coefficients.
pub mod dosage;

/// Simulated sensor ranges and trend prediction settings.
pub mod sensors;

/// Chart sampling defaults.
pub mod chart;

// Re-export commonly used constants for convenience
pub use dosage::{
    DO_DOSAGE_INTERCEPT_MG_L, DO_DOSAGE_SLOPE, TEMP_DOSAGE_INTERCEPT_MG_L, TEMP_DOSAGE_SLOPE,
    TURBIDITY_DOSAGE_INTERCEPT_MG_L, TURBIDITY_DOSAGE_SLOPE, TURBIDITY_TEMP_DOSAGE_SLOPE,
    MIN_DOSAGE_MG_L,
};

pub use sensors::{READING_MIN, READING_MAX, PREDICTION_WINDOW};

pub use chart::{CURVE_SAMPLES, MAX_CURVE_SAMPLES, DO_CURVE_RANGE_MG_L, TEMP_CURVE_RANGE_C, ANNOTATE_EVERY};
