//! Basic Dosage Estimation Example
//!
//! Runs a short simulated session and prints what an operator would see:
//! each reading, the three dosage estimates and the chlorine trend.
//!
//! ## What You'll Learn
//!
//! - Evaluating the dosage formulas directly
//! - Driving a session through `AppContext`
//! - Handling operator input errors without stopping
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_dosage_estimate
//! ```

use envirochlor_core::{dosage, AppContext, DosageError, EnviroChlorConfig, RawInputs};

fn main() -> Result<(), DosageError> {
    println!("EnviroChlor Dosage Estimation Example");
    println!("=====================================\n");

    // The formulas on their own
    println!("Dosage formulas:");
    for dissolved_oxygen in [0.0, 5.0, 10.0, 20.0, 25.0] {
        println!(
            "  DO {:>5.1} mg/L -> {:.2} mg/L",
            dissolved_oxygen,
            dosage::dosage_from_dissolved_oxygen(dissolved_oxygen)
        );
    }
    println!(
        "  NTU 2.0 -> 7.0 at 0 °C -> {:.2} mg/L",
        dosage::dosage_from_turbidity_and_temperature(2.0, 7.0, 0.0)
    );
    println!();

    // Reproducible session
    let mut app = AppContext::seeded(EnviroChlorConfig::default(), 2024)?;

    // The operator forgot to fill in the fields
    let placeholder = RawInputs::new("NTU Inlet", "NTU Outlet", "Temperature");
    if let Err(e) = app.read_values(&placeholder) {
        println!("✗ {e}\n");
    }

    let raw = RawInputs::new("3.5", "6.0", "18.0");
    println!("Reading values:");
    for _ in 0..6 {
        let report = app.read_values(&raw)?;
        println!("{report}");
    }
    println!();

    let chart = app.show_graphs(&raw)?;
    let estimate = chart.estimate;

    println!("Estimates at DO {:.2} mg/L:", chart.inputs.dissolved_oxygen);
    println!("  by DO:          {:.2} mg/L", estimate.dissolved_oxygen);
    println!("  by temperature: {:.2} mg/L", estimate.temperature);
    println!("  by turbidity:   {:.2} mg/L", estimate.turbidity);
    println!("  average:        {:.2} mg/L", estimate.average);
    println!();

    println!("Chlorine trend ({} readings):", chart.trend.values.len());
    println!("  {}", chart.trend.prediction_label());

    Ok(())
}
