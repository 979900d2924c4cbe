//! Dosage Formula Coefficients
//!
//! All three estimates are straight lines clamped at [`MIN_DOSAGE_MG_L`].
//! Changing any value here changes the default [`crate::DosageModel`].

// ===== DISSOLVED OXYGEN =====

/// Dosage with no dissolved oxygen present (mg/L).
pub const DO_DOSAGE_INTERCEPT_MG_L: f64 = 10.0;

/// Dosage reduction per mg/L of dissolved oxygen.
///
/// Reaches zero at 20 mg/L DO.
pub const DO_DOSAGE_SLOPE: f64 = 0.5;

// ===== TEMPERATURE =====

/// Dosage at 0 °C (mg/L).
pub const TEMP_DOSAGE_INTERCEPT_MG_L: f64 = 8.0;

/// Dosage reduction per °C.
///
/// Reaches zero at 26.67 °C.
pub const TEMP_DOSAGE_SLOPE: f64 = 0.3;

// ===== TURBIDITY AND TEMPERATURE =====

/// Dosage with no turbidity change at 0 °C (mg/L).
pub const TURBIDITY_DOSAGE_INTERCEPT_MG_L: f64 = 5.0;

/// Dosage increase per NTU of turbidity delta (outlet minus inlet).
pub const TURBIDITY_DOSAGE_SLOPE: f64 = 0.2;

/// Dosage reduction per °C in the turbidity formula.
pub const TURBIDITY_TEMP_DOSAGE_SLOPE: f64 = 0.1;

// ===== LIMITS =====

/// Dosage can never be negative.
pub const MIN_DOSAGE_MG_L: f64 = 0.0;
