//! Chart data for the dosage analysis view
//!
//! Everything a shell needs to draw the two dosage plots, with no opinion on
//! how they are drawn.
//!
//! ## Dosage Plot
//!
//! - Dosage vs DO, sampled over the DO axis
//! - Dosage vs temperature, sampled over the temperature axis
//! - Absolute difference between the two formulas, and the same difference
//!   relative to the DO estimate (%)
//! - Horizontal lines for the turbidity estimate and the mean of all three
//! - Vertical markers at the current DO level and operator temperature
//!
//! The difference curves evaluate both formulas at the DO sample value,
//! so the x axis of every curve but one is DO.
//!
//! ## Trend Plot
//!
//! The chlorine history with its trailing-average prediction.

use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::constants::chart::{MAX_CURVE_SAMPLES, PERCENT};
use crate::dosage::{DosageEstimate, DosageInputs, DosageModel};
use crate::errors::DosageResult;
use crate::sensor::{SensorChannel, SensorHistory};

/// `n` evenly spaced values from `start` to `end`, both included
///
/// `n == 0` gives nothing and `n == 1` gives `[start]`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut samples: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            // Avoid accumulated rounding on the final sample
            samples[n - 1] = end;
            samples
        }
    }
}

/// One sample on a curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Input value
    pub x: f64,
    /// Dosage or difference
    pub y: f64,
}

/// Sampled curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Legend text
    pub label: String,
    /// Samples in x order
    pub points: Vec<CurvePoint>,
}

impl Curve {
    fn sample(label: &str, xs: &[f64], f: impl Fn(f64) -> f64) -> Self {
        Self {
            label: label.to_string(),
            points: xs.iter().map(|&x| CurvePoint { x, y: f(x) }).collect(),
        }
    }

    /// Every `every`th point, starting with the first
    pub fn annotations(&self, every: usize) -> impl Iterator<Item = &CurvePoint> {
        self.points.iter().step_by(every.max(1))
    }

    /// The y values only
    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.y)
    }
}

/// Direction of a reference line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Constant y
    Horizontal,
    /// Constant x
    Vertical,
}

/// Straight reference line across the plot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    /// Legend text
    pub label: String,
    /// Position on the fixed axis
    pub value: f64,
    /// Which axis is fixed
    pub orientation: Orientation,
}

impl ReferenceLine {
    fn horizontal(label: String, value: f64) -> Self {
        Self {
            label,
            value,
            orientation: Orientation::Horizontal,
        }
    }

    fn vertical(label: String, value: f64) -> Self {
        Self {
            label,
            value,
            orientation: Orientation::Vertical,
        }
    }
}

/// Readings of one channel and the predicted next value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendChart {
    /// Channel plotted
    pub channel: SensorChannel,
    /// Readings in arrival order
    pub values: Vec<f64>,
    /// Trailing-average prediction
    pub predicted: f64,
}

impl TrendChart {
    /// Build from a history; fails when the history is empty
    pub fn from_history(history: &SensorHistory, window: usize) -> DosageResult<Self> {
        Ok(Self {
            channel: history.channel(),
            values: history.values().collect(),
            predicted: history.predict_next(window)?,
        })
    }

    /// Legend text for the prediction line
    pub fn prediction_label(&self) -> String {
        format!("Prediction: {:.2} {}", self.predicted, self.channel.unit())
    }
}

/// Complete data for the dosage analysis view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DosageChart {
    /// Inputs the chart was computed for
    pub inputs: DosageInputs,
    /// Point estimates at those inputs
    pub estimate: DosageEstimate,
    /// Dosage vs DO
    pub dissolved_oxygen_curve: Curve,
    /// Dosage vs temperature
    pub temperature_curve: Curve,
    /// |DO formula - temperature formula| over the DO axis
    pub difference_curve: Curve,
    /// Difference relative to the DO formula (%), 0 where it is 0
    pub difference_percent_curve: Curve,
    /// Turbidity and temperature estimate
    pub turbidity_line: ReferenceLine,
    /// Mean of the three estimates
    pub average_line: ReferenceLine,
    /// Current DO level
    pub dissolved_oxygen_marker: ReferenceLine,
    /// Operator temperature
    pub temperature_marker: ReferenceLine,
    /// Label every Nth curve sample
    pub annotate_every: usize,
    /// Chlorine history and prediction
    pub trend: TrendChart,
}

impl DosageChart {
    /// The four sampled curves in legend order
    pub fn curves(&self) -> [&Curve; 4] {
        [
            &self.dissolved_oxygen_curve,
            &self.temperature_curve,
            &self.difference_curve,
            &self.difference_percent_curve,
        ]
    }

    /// The four reference lines in legend order
    pub fn reference_lines(&self) -> [&ReferenceLine; 4] {
        [
            &self.turbidity_line,
            &self.average_line,
            &self.dissolved_oxygen_marker,
            &self.temperature_marker,
        ]
    }
}

/// Builds [`DosageChart`]s from a model and sampling config
#[derive(Debug, Clone, Default)]
pub struct ChartBuilder {
    model: DosageModel,
    config: ChartConfig,
}

impl ChartBuilder {
    /// Builder for the given formulas and sampling
    pub fn new(model: DosageModel, config: ChartConfig) -> Self {
        Self { model, config }
    }

    /// Samples per curve, capped at [`MAX_CURVE_SAMPLES`]
    ///
    /// Configs loaded from JSON are validated, but a hand-built
    /// [`ChartConfig`] reaches the builder unchecked.
    pub fn samples(&self) -> usize {
        self.config.samples.min(MAX_CURVE_SAMPLES)
    }

    /// DO axis samples
    pub fn dissolved_oxygen_axis(&self) -> Vec<f64> {
        let (start, end) = self.config.dissolved_oxygen_range;
        linspace(start, end, self.samples())
    }

    /// Temperature axis samples
    pub fn temperature_axis(&self) -> Vec<f64> {
        let (start, end) = self.config.temperature_range;
        linspace(start, end, self.samples())
    }

    /// Compute every curve and line for `inputs`
    pub fn build(&self, inputs: &DosageInputs, trend: TrendChart) -> DosageChart {
        let model = &self.model;
        let do_axis = self.dissolved_oxygen_axis();
        let temp_axis = self.temperature_axis();

        let dissolved_oxygen_curve = Curve::sample(
            "Chlorine (mg/L) based on DO (mg/L)",
            &do_axis,
            |x| model.from_dissolved_oxygen(x),
        );
        let temperature_curve = Curve::sample(
            "Chlorine (mg/L) based on Temperature (°C)",
            &temp_axis,
            |x| model.from_temperature(x),
        );
        let difference_curve = Curve::sample("Difference (mg/L)", &do_axis, |x| {
            (model.from_dissolved_oxygen(x) - model.from_temperature(x)).abs()
        });
        let difference_percent_curve = Curve::sample("Difference (%)", &do_axis, |x| {
            let by_do = model.from_dissolved_oxygen(x);
            if by_do != 0.0 {
                (by_do - model.from_temperature(x)).abs() / by_do * PERCENT
            } else {
                0.0
            }
        });

        let estimate = model.estimate(inputs);

        DosageChart {
            inputs: *inputs,
            estimate,
            dissolved_oxygen_curve,
            temperature_curve,
            difference_curve,
            difference_percent_curve,
            turbidity_line: ReferenceLine::horizontal(
                format!(
                    "Chlorine based on NTU ({:.2} - {:.2}) and Temperature ({:.2} °C)",
                    inputs.turbidity_inlet, inputs.turbidity_outlet, inputs.temperature
                ),
                estimate.turbidity,
            ),
            average_line: ReferenceLine::horizontal(
                format!("Average Chlorine: {:.2} mg/L", estimate.average),
                estimate.average,
            ),
            dissolved_oxygen_marker: ReferenceLine::vertical(
                format!("DO: {:.2} mg/L", inputs.dissolved_oxygen),
                inputs.dissolved_oxygen,
            ),
            temperature_marker: ReferenceLine::vertical(
                format!("Temperature: {:.2} °C", inputs.temperature),
                inputs.temperature,
            ),
            annotate_every: self.config.annotate_every,
            trend,
        }
    }
}
