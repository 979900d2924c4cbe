//! Chlorine Dosage Formulas
//!
//! ## Overview
//!
//! Three independent linear estimates of the chlorine dosage (mg/L) needed
//! for disinfection:
//!
//! ```text
//! by DO:          max(0, 10 - 0.5 * do)
//! by temperature: max(0,  8 - 0.3 * temp)
//! by turbidity:   max(0,  5 + 0.2 * (outlet - inlet) - 0.1 * temp)
//! ```
//!
//! Every formula is total over the reals and clamped at zero, since a
//! negative dosage is meaningless.
//!
//! ## Turbidity Delta
//!
//! The delta is outlet minus inlet (post-treatment minus pre-treatment).
//! Turbidity rising through the stage raises the dosage. Do not flip it.
//!
//! ## Usage
//!
//! ```rust
//! use envirochlor_core::dosage::{self, DosageInputs, DosageModel};
//!
//! assert_eq!(dosage::dosage_from_dissolved_oxygen(4.0), 8.0);
//! assert_eq!(dosage::dosage_from_dissolved_oxygen(25.0), 0.0);
//!
//! let estimate = DosageModel::default().estimate(&DosageInputs {
//!     dissolved_oxygen: 4.0,
//!     temperature: 10.0,
//!     turbidity_inlet: 2.0,
//!     turbidity_outlet: 7.0,
//! });
//! assert_eq!(estimate.turbidity, 5.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::dosage::*;

/// Dosage as a single clamped line: `max(0, intercept - slope * x)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearDosage {
    /// Dosage at x = 0 (mg/L)
    pub intercept: f64,
    /// Dosage reduction per unit of x
    pub slope: f64,
}

impl LinearDosage {
    /// Create a line from its coefficients
    pub const fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Evaluate at `x`, clamped at zero
    pub fn evaluate(&self, x: f64) -> f64 {
        clamp_dosage(self.intercept - self.slope * x)
    }
}

/// Dosage from turbidity change and temperature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurbidityDosage {
    /// Dosage with no turbidity change at 0 °C (mg/L)
    pub intercept: f64,
    /// Increase per NTU of (outlet - inlet)
    pub turbidity_slope: f64,
    /// Reduction per °C
    pub temperature_slope: f64,
}

impl TurbidityDosage {
    /// Create from coefficients
    pub const fn new(intercept: f64, turbidity_slope: f64, temperature_slope: f64) -> Self {
        Self {
            intercept,
            turbidity_slope,
            temperature_slope,
        }
    }

    /// Evaluate for the given inlet/outlet turbidity (NTU) and temperature (°C)
    pub fn evaluate(&self, turbidity_inlet: f64, turbidity_outlet: f64, temperature: f64) -> f64 {
        let delta = turbidity_delta(turbidity_inlet, turbidity_outlet);
        clamp_dosage(
            self.intercept + self.turbidity_slope * delta - self.temperature_slope * temperature,
        )
    }
}

/// Full set of dosage formulas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DosageModel {
    /// Dosage by dissolved oxygen (mg/L)
    pub dissolved_oxygen: LinearDosage,
    /// Dosage by water temperature (°C)
    pub temperature: LinearDosage,
    /// Dosage by turbidity delta and temperature
    pub turbidity: TurbidityDosage,
}

impl Default for DosageModel {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl DosageModel {
    /// The standard coefficients
    pub const STANDARD: Self = Self {
        dissolved_oxygen: LinearDosage::new(DO_DOSAGE_INTERCEPT_MG_L, DO_DOSAGE_SLOPE),
        temperature: LinearDosage::new(TEMP_DOSAGE_INTERCEPT_MG_L, TEMP_DOSAGE_SLOPE),
        turbidity: TurbidityDosage::new(
            TURBIDITY_DOSAGE_INTERCEPT_MG_L,
            TURBIDITY_DOSAGE_SLOPE,
            TURBIDITY_TEMP_DOSAGE_SLOPE,
        ),
    };

    /// Dosage from dissolved oxygen (mg/L)
    pub fn from_dissolved_oxygen(&self, dissolved_oxygen: f64) -> f64 {
        self.dissolved_oxygen.evaluate(dissolved_oxygen)
    }

    /// Dosage from water temperature (°C)
    pub fn from_temperature(&self, temperature: f64) -> f64 {
        self.temperature.evaluate(temperature)
    }

    /// Dosage from inlet/outlet turbidity (NTU) and temperature (°C)
    pub fn from_turbidity_and_temperature(
        &self,
        turbidity_inlet: f64,
        turbidity_outlet: f64,
        temperature: f64,
    ) -> f64 {
        self.turbidity
            .evaluate(turbidity_inlet, turbidity_outlet, temperature)
    }

    /// All three estimates and their mean
    pub fn estimate(&self, inputs: &DosageInputs) -> DosageEstimate {
        let dissolved_oxygen = self.from_dissolved_oxygen(inputs.dissolved_oxygen);
        let temperature = self.from_temperature(inputs.temperature);
        let turbidity = self.from_turbidity_and_temperature(
            inputs.turbidity_inlet,
            inputs.turbidity_outlet,
            inputs.temperature,
        );

        DosageEstimate {
            dissolved_oxygen,
            temperature,
            turbidity,
            average: (dissolved_oxygen + temperature + turbidity) / 3.0,
        }
    }
}

/// Environmental inputs for one dosage computation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DosageInputs {
    /// Dissolved oxygen (mg/L)
    pub dissolved_oxygen: f64,
    /// Water temperature (°C)
    pub temperature: f64,
    /// Turbidity before treatment (NTU)
    pub turbidity_inlet: f64,
    /// Turbidity after treatment (NTU)
    pub turbidity_outlet: f64,
}

/// Result of [`DosageModel::estimate`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DosageEstimate {
    /// Estimate from dissolved oxygen (mg/L)
    pub dissolved_oxygen: f64,
    /// Estimate from temperature (mg/L)
    pub temperature: f64,
    /// Estimate from turbidity and temperature (mg/L)
    pub turbidity: f64,
    /// Mean of the three estimates (mg/L)
    pub average: f64,
}

/// Turbidity change through the treatment stage: outlet minus inlet
#[inline]
pub fn turbidity_delta(turbidity_inlet: f64, turbidity_outlet: f64) -> f64 {
    turbidity_outlet - turbidity_inlet
}

/// Clamp a raw formula result at the minimum dosage
#[inline]
pub fn clamp_dosage(raw: f64) -> f64 {
    raw.max(MIN_DOSAGE_MG_L)
}

/// `max(0, 10 - 0.5 * do)`
pub fn dosage_from_dissolved_oxygen(dissolved_oxygen: f64) -> f64 {
    DosageModel::STANDARD.from_dissolved_oxygen(dissolved_oxygen)
}

/// `max(0, 8 - 0.3 * temp)`
pub fn dosage_from_temperature(temperature: f64) -> f64 {
    DosageModel::STANDARD.from_temperature(temperature)
}

/// `max(0, 5 + 0.2 * (outlet - inlet) - 0.1 * temp)`
pub fn dosage_from_turbidity_and_temperature(
    turbidity_inlet: f64,
    turbidity_outlet: f64,
    temperature: f64,
) -> f64 {
    DosageModel::STANDARD.from_turbidity_and_temperature(
        turbidity_inlet,
        turbidity_outlet,
        temperature,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dissolved_oxygen_line() {
        assert_eq!(dosage_from_dissolved_oxygen(0.0), 10.0);
        assert_eq!(dosage_from_dissolved_oxygen(4.0), 8.0);
        assert_eq!(dosage_from_dissolved_oxygen(20.0), 0.0);

        // Clamped, never negative
        assert_eq!(dosage_from_dissolved_oxygen(30.0), 0.0);
    }

    #[test]
    fn temperature_line() {
        assert_eq!(dosage_from_temperature(0.0), 8.0);
        assert_eq!(dosage_from_temperature(10.0), 8.0 - 0.3 * 10.0);
        assert_eq!(dosage_from_temperature(26.67), 0.0);
        assert_eq!(dosage_from_temperature(100.0), 0.0);
    }

    #[test]
    fn negative_inputs_raise_dosage() {
        // Formulas are total; nothing caps the upper end
        assert_eq!(dosage_from_dissolved_oxygen(-2.0), 11.0);
        assert_eq!(dosage_from_temperature(-10.0), 11.0);
    }

    #[test]
    fn turbidity_delta_is_outlet_minus_inlet() {
        assert_eq!(turbidity_delta(2.0, 7.0), 5.0);
        assert_eq!(dosage_from_turbidity_and_temperature(2.0, 7.0, 0.0), 6.0);

        // Turbidity falling through the stage lowers the dosage
        assert_eq!(dosage_from_turbidity_and_temperature(7.0, 2.0, 0.0), 4.0);
    }

    #[test]
    fn turbidity_clamps_at_zero() {
        assert_eq!(dosage_from_turbidity_and_temperature(0.0, 0.0, 60.0), 0.0);
        assert_eq!(dosage_from_turbidity_and_temperature(100.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn estimate_averages_all_three() {
        let inputs = DosageInputs {
            dissolved_oxygen: 4.0,
            temperature: 10.0,
            turbidity_inlet: 2.0,
            turbidity_outlet: 7.0,
        };
        let estimate = DosageModel::default().estimate(&inputs);

        assert_eq!(estimate.dissolved_oxygen, 8.0);
        assert_eq!(estimate.temperature, dosage_from_temperature(10.0));
        assert_eq!(estimate.turbidity, 5.0);
        assert_eq!(
            estimate.average,
            (estimate.dissolved_oxygen + estimate.temperature + estimate.turbidity) / 3.0
        );
    }

    #[test]
    fn custom_coefficients() {
        let model = DosageModel {
            dissolved_oxygen: LinearDosage::new(6.0, 1.0),
            ..DosageModel::default()
        };
        assert_eq!(model.from_dissolved_oxygen(2.0), 4.0);
        assert_eq!(model.from_dissolved_oxygen(8.0), 0.0);

        // Untouched formulas keep the standard coefficients
        assert_eq!(model.from_temperature(0.0), 8.0);
    }

    #[test]
    fn nan_clamps_to_zero() {
        assert_eq!(dosage_from_dissolved_oxygen(f64::NAN), 0.0);
    }
}
