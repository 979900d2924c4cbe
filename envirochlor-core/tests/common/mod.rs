//! Shared fixtures for integration tests
//!
//! Provides scripted sessions, so tests control every simulated reading,
//! and the operator inputs used across scenarios.

#![allow(dead_code)]

use envirochlor_core::{AppContext, EnviroChlorConfig, RawInputs, SequenceRandom};

/// Inlet turbidity used by most scenarios (NTU)
pub const INLET_NTU: &str = "2.0";
/// Outlet turbidity used by most scenarios (NTU)
pub const OUTLET_NTU: &str = "7.0";
/// Water temperature used by most scenarios (°C)
pub const WATER_TEMP_C: &str = "10.0";

/// Operator fields for the standard scenario
pub fn standard_inputs() -> RawInputs {
    RawInputs::new(INLET_NTU, OUTLET_NTU, WATER_TEMP_C)
}

/// Operator fields with the shell's placeholder text still in place
pub fn placeholder_inputs() -> RawInputs {
    RawInputs::new("NTU Inlet", "NTU Outlet", "Temperature")
}

/// Session where every sensor replays `values` in order
pub fn scripted_session(values: &[f64]) -> AppContext<SequenceRandom> {
    scripted_session_with(EnviroChlorConfig::default(), values)
}

/// Scripted session with a custom config
pub fn scripted_session_with(
    config: EnviroChlorConfig,
    values: &[f64],
) -> AppContext<SequenceRandom> {
    let values = values.to_vec();
    AppContext::new(config, move |_| SequenceRandom::new(values.clone()))
        .expect("default simulation range is valid")
}

/// Perform `count` read actions with the standard inputs
pub fn read_times(app: &mut AppContext<SequenceRandom>, count: usize) {
    let raw = standard_inputs();
    for _ in 0..count {
        app.read_values(&raw).expect("standard inputs are valid");
    }
}
