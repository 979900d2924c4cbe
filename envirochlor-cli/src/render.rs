//! Plain-text rendering of the dosage analysis
//!
//! Prints what the plots would show: the annotated samples of every curve,
//! the reference lines, and the chlorine trend with its prediction.

use std::fmt;

use envirochlor_core::analysis::{Curve, Orientation};
use envirochlor_core::DosageChart;

const TITLE: &str = "Water Disinfection with Chlorine based on DO, Temperature, and NTU";

/// Text view of a [`DosageChart`]
pub struct TextChart<'a>(pub &'a DosageChart);

impl fmt::Display for TextChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chart = self.0;

        writeln!(f, "{TITLE}")?;
        writeln!(f, "{}", "=".repeat(TITLE.len()))?;

        for curve in [&chart.dissolved_oxygen_curve, &chart.temperature_curve, &chart.difference_curve] {
            write_curve(f, curve, chart.annotate_every, "")?;
        }
        write_curve(f, &chart.difference_percent_curve, chart.annotate_every, "%")?;

        writeln!(f)?;
        for line in chart.reference_lines() {
            let axis = match line.orientation {
                Orientation::Horizontal => "y",
                Orientation::Vertical => "x",
            };
            writeln!(f, "  {axis} = {:>7.2}  {}", line.value, line.label)?;
        }

        let trend = &chart.trend;
        writeln!(f)?;
        writeln!(f, "{} Level ({})", trend.channel, trend.channel.unit())?;
        for (i, value) in trend.values.iter().enumerate() {
            writeln!(f, "  #{i:<4} {value:>7.2}")?;
        }
        writeln!(f, "  {}", trend.prediction_label())
    }
}

fn write_curve(f: &mut fmt::Formatter<'_>, curve: &Curve, every: usize, suffix: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{}", curve.label)?;
    for point in curve.annotations(every) {
        writeln!(f, "  {:>7.2}  {:>7.2}{suffix}", point.x, point.y)?;
    }
    Ok(())
}
