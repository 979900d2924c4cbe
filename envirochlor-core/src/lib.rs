//! Chlorine dosage engine for EnviroChlor
//!
//! Simulates water-quality sensor readings and estimates the chlorine dosage
//! needed for disinfection from dissolved oxygen, temperature and turbidity.
//!
//! The crate is split into:
//! - [`dosage`]: pure linear dosage formulas, clamped at zero
//! - [`sensor`]: simulated sensors with an append-only history
//! - [`random`]: injectable random sources for the simulation
//! - [`analysis`]: renderer-agnostic chart data
//! - [`input`]: operator input parsing
//! - [`app`]: the application context driven by a presentation shell
//!
//! ```no_run
//! use envirochlor_core::{dosage, AppContext, RawInputs};
//!
//! assert_eq!(dosage::dosage_from_turbidity_and_temperature(2.0, 7.0, 0.0), 6.0);
//!
//! let mut app = AppContext::with_thread_random(Default::default())?;
//! let raw = RawInputs::new("2.0", "7.0", "18.5");
//!
//! match app.read_values(&raw) {
//!     Ok(report) => println!("{report}"),
//!     Err(e) => eprintln!("{e}"), // Bad operator input, nothing was read
//! }
//! # Ok::<(), envirochlor_core::DosageError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod analysis;
pub mod app;
pub mod config;
pub mod constants;
pub mod dosage;
pub mod errors;
pub mod input;
pub mod random;
pub mod sensor;

// Public API
pub use analysis::{ChartBuilder, DosageChart, TrendChart};
pub use app::{AppContext, ReadingReport};
pub use config::EnviroChlorConfig;
pub use dosage::{DosageEstimate, DosageInputs, DosageModel};
pub use errors::{ConfigError, DosageError, DosageResult};
pub use input::{OperatorInputs, RawInputs};
pub use random::{RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use sensor::{Sensor, SensorChannel, SensorHistory, SensorReading};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
