//! Operator input parsing
//!
//! The shell hands over text exactly as typed. A field that is not a finite
//! number becomes a [`DosageError`] the shell can show. It never reaches the
//! formulas and never panics.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::dosage::DosageInputs;
use crate::errors::{DosageError, DosageResult};

/// Field name for inlet turbidity
pub const FIELD_TURBIDITY_INLET: &str = "turbidity inlet";
/// Field name for outlet turbidity
pub const FIELD_TURBIDITY_OUTLET: &str = "turbidity outlet";
/// Field name for temperature
pub const FIELD_TEMPERATURE: &str = "temperature";

/// Parse one operator field
///
/// Surrounding whitespace is ignored. NaN and infinities are rejected even
/// though they parse.
pub fn parse_field(field: &'static str, raw: &str) -> DosageResult<f64> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        warn!("Rejected {field}: '{raw}'");
        DosageError::InvalidInput {
            field,
            raw: raw.to_string(),
        }
    })?;

    if !value.is_finite() {
        warn!("Rejected {field}: non-finite value");
        return Err(DosageError::NonFiniteInput { field });
    }

    Ok(value)
}

/// Operator fields as entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    /// Turbidity before treatment (NTU)
    pub turbidity_inlet: String,
    /// Turbidity after treatment (NTU)
    pub turbidity_outlet: String,
    /// Water temperature (°C)
    pub temperature: String,
}

impl RawInputs {
    /// Collect the three operator fields
    pub fn new(
        turbidity_inlet: impl Into<String>,
        turbidity_outlet: impl Into<String>,
        temperature: impl Into<String>,
    ) -> Self {
        Self {
            turbidity_inlet: turbidity_inlet.into(),
            turbidity_outlet: turbidity_outlet.into(),
            temperature: temperature.into(),
        }
    }

    /// Validate every field; the first bad one is reported
    ///
    /// Fields are checked inlet, outlet, then temperature.
    pub fn parse(&self) -> DosageResult<OperatorInputs> {
        Ok(OperatorInputs {
            turbidity_inlet: parse_field(FIELD_TURBIDITY_INLET, &self.turbidity_inlet)?,
            turbidity_outlet: parse_field(FIELD_TURBIDITY_OUTLET, &self.turbidity_outlet)?,
            temperature: parse_field(FIELD_TEMPERATURE, &self.temperature)?,
        })
    }
}

/// Validated operator fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatorInputs {
    /// Turbidity before treatment (NTU)
    pub turbidity_inlet: f64,
    /// Turbidity after treatment (NTU)
    pub turbidity_outlet: f64,
    /// Water temperature (°C)
    pub temperature: f64,
}

impl OperatorInputs {
    /// Combine with a dissolved oxygen level into formula inputs
    pub fn with_dissolved_oxygen(&self, dissolved_oxygen: f64) -> DosageInputs {
        DosageInputs {
            dissolved_oxygen,
            temperature: self.temperature,
            turbidity_inlet: self.turbidity_inlet,
            turbidity_outlet: self.turbidity_outlet,
        }
    }
}
