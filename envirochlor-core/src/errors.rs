//! Error Types for Dosage Estimation
//!
//! ## Error Categories
//!
//! The formulas themselves are total over real numbers, so errors only come
//! from the edges of the system:
//!
//! ### Operator Input
//! - `InvalidInput`: a text field did not parse as a number
//! - `NonFiniteInput`: a field parsed to NaN or infinity
//!
//! ### Sensor State
//! - `InsufficientData`: a prediction was requested before any reading
//!
//! ### Simulation Setup
//! - `InvalidRange`: a sampling range with `min >= max`
//! - `InvalidWindow`: a prediction window of zero readings
//!
//! Configuration files have their own [`ConfigError`], since they fail for
//! I/O and syntax reasons that operator input never does.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use envirochlor_core::{AppContext, DosageError, RawInputs};
//!
//! let mut app = AppContext::with_thread_random(Default::default())?;
//!
//! match app.read_values(&RawInputs::new("NTU Inlet", "4.0", "20.0")) {
//!     Ok(report) => println!("{report}"),
//!     Err(DosageError::InvalidInput { field, raw }) => {
//!         // Ask the operator to fix the field, keep running
//!         eprintln!("{field}: '{raw}' is not a number");
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! # Ok::<(), DosageError>(())
//! ```

use thiserror_no_std::Error;

/// Result type for dosage operations
pub type DosageResult<T> = Result<T, DosageError>;

/// Errors raised by the dosage engine and its sensors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DosageError {
    /// Operator text could not be parsed as a number
    #[error("Invalid {field}: '{raw}' is not a number")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// Text exactly as the operator entered it
        raw: String,
    },

    /// Operator value parsed, but is NaN or infinite
    #[error("Invalid {field}: value must be finite")]
    NonFiniteInput {
        /// Name of the offending field
        field: &'static str,
    },

    /// Not enough history for the requested operation
    #[error("Insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Minimum number of readings needed
        required: usize,
        /// Readings actually recorded
        available: usize,
    },

    /// Sampling range is empty or inverted
    #[error("Invalid range [{min}, {max})")]
    InvalidRange {
        /// Lower bound
        min: f64,
        /// Upper bound (exclusive)
        max: f64,
    },

    /// Prediction window that averages no readings
    #[error("Invalid prediction window {window}: must be at least 1")]
    InvalidWindow {
        /// Requested window
        window: usize,
    },
}

impl DosageError {
    /// True for errors caused by what the operator typed
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::NonFiniteInput { .. })
    }
}

/// Configuration loading failures
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for the expected shape
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Config parsed but the values make no sense
    #[error("Invalid config: {reason}")]
    Invalid {
        /// What was wrong
        reason: &'static str,
    },
}
