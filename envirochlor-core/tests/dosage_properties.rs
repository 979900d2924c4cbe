//! Property tests for the dosage formulas and the trend prediction
//!
//! Covers the algebraic guarantees of the engine: exact linear segments,
//! zero clamping, the outlet-minus-inlet turbidity convention, and the
//! trailing-average prediction.

use envirochlor_core::dosage::{
    dosage_from_dissolved_oxygen, dosage_from_temperature, dosage_from_turbidity_and_temperature,
    DosageInputs, DosageModel,
};
use envirochlor_core::{SeededRandom, Sensor, SensorChannel, SensorHistory};
use proptest::prelude::*;

/// Highest temperature that still yields a positive dosage
const TEMP_ZERO_DOSAGE_C: f64 = 26.67;

/// DO level where the DO formula reaches zero (mg/L)
const DO_ZERO_DOSAGE_MG_L: f64 = 20.0;

proptest! {
    #[test]
    fn high_do_clamps_to_zero(dissolved_oxygen in DO_ZERO_DOSAGE_MG_L..1.0e6) {
        prop_assert_eq!(dosage_from_dissolved_oxygen(dissolved_oxygen), 0.0);
    }

    #[test]
    fn low_do_is_exactly_linear(dissolved_oxygen in 0.0..DO_ZERO_DOSAGE_MG_L) {
        prop_assert_eq!(
            dosage_from_dissolved_oxygen(dissolved_oxygen),
            10.0 - 0.5 * dissolved_oxygen
        );
    }

    #[test]
    fn warm_water_clamps_to_zero(temperature in TEMP_ZERO_DOSAGE_C..1.0e6) {
        prop_assert_eq!(dosage_from_temperature(temperature), 0.0);
    }

    #[test]
    fn unchanged_turbidity_depends_on_temperature_only(temperature in -50.0..200.0f64) {
        prop_assert_eq!(
            dosage_from_turbidity_and_temperature(5.0, 5.0, temperature),
            (5.0 - 0.1 * temperature).max(0.0)
        );
    }

    #[test]
    fn dosage_is_never_negative(x in -1.0e6..1.0e6f64, y in -1.0e6..1.0e6f64, t in -1.0e6..1.0e6f64) {
        prop_assert!(dosage_from_dissolved_oxygen(x) >= 0.0);
        prop_assert!(dosage_from_temperature(t) >= 0.0);
        prop_assert!(dosage_from_turbidity_and_temperature(x, y, t) >= 0.0);
    }

    #[test]
    fn rising_turbidity_never_lowers_dosage(
        inlet in 0.0..100.0f64,
        rise in 0.0..100.0f64,
        temperature in 0.0..40.0f64,
    ) {
        let flat = dosage_from_turbidity_and_temperature(inlet, inlet, temperature);
        let rising = dosage_from_turbidity_and_temperature(inlet, inlet + rise, temperature);
        prop_assert!(rising >= flat);
    }

    #[test]
    fn average_is_mean_of_estimates(
        dissolved_oxygen in 0.0..14.0f64,
        temperature in 0.0..30.0f64,
        inlet in 0.0..50.0f64,
        outlet in 0.0..50.0f64,
    ) {
        let estimate = DosageModel::default().estimate(&DosageInputs {
            dissolved_oxygen,
            temperature,
            turbidity_inlet: inlet,
            turbidity_outlet: outlet,
        });
        prop_assert_eq!(
            estimate.average,
            (estimate.dissolved_oxygen + estimate.temperature + estimate.turbidity) / 3.0
        );
    }

    #[test]
    fn reads_stay_in_range_and_grow_history(seed in any::<u64>(), reads in 1usize..200) {
        let mut sensor = Sensor::new(SensorChannel::Chlorine, SeededRandom::new(seed));
        for expected_len in 1..=reads {
            let value = sensor.read_value();
            prop_assert!((0.0..14.0).contains(&value));
            prop_assert_eq!(sensor.history().len(), expected_len);
        }
    }

    #[test]
    fn prediction_is_mean_of_last_five(values in prop::collection::vec(0.0..14.0f64, 5..50)) {
        let mut history = SensorHistory::new(SensorChannel::Chlorine);
        history.extend(values.iter().copied());

        let tail = &values[values.len() - 5..];
        let expected = tail.iter().sum::<f64>() / 5.0;
        prop_assert_eq!(history.predict_next(5), Ok(expected));
    }

    #[test]
    fn short_history_predicts_latest(values in prop::collection::vec(0.0..14.0f64, 1..5)) {
        let mut history = SensorHistory::new(SensorChannel::Chlorine);
        history.extend(values.iter().copied());
        prop_assert_eq!(history.predict_next(5), Ok(values[values.len() - 1]));
    }
}

#[test]
fn documented_examples() {
    assert_eq!(dosage_from_turbidity_and_temperature(2.0, 7.0, 0.0), 6.0);

    let mut history = SensorHistory::new(SensorChannel::Chlorine);
    history.extend([1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(history.predict_next(5), Ok(3.0));

    let mut history = SensorHistory::new(SensorChannel::Chlorine);
    history.extend([10.0]);
    assert_eq!(history.predict_next(5), Ok(10.0));
}
