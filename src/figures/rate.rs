//! Snap rate over a 48-hour recording.

use crate::data::RateSample;
use crate::output::svg::{AxisSpec, ChartColor, ChartStyle, LineSeries, Plot, Series, Ticks};

use super::Figure;

pub const X_LIMITS: (f64, f64) = (0.0, 48.0);
pub const Y_LIMITS: (f64, f64) = (25.0, 50.0);

/// Hours between x ticks.
const X_TICK_STEP: f64 = 6.0;
/// Rate units between y ticks.
const Y_TICK_STEP: f64 = 5.0;

const LINE_COLOR: &str = "#3b82f6";
const LINE_WIDTH: f64 = 2.0;

/// Line chart of `rate` against `time` on fixed axes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateFigure;

impl Figure for RateFigure {
    type Data = Vec<RateSample>;

    const NAME: &'static str = "snap rate";

    fn build(data: &Self::Data, style: &ChartStyle) -> Plot {
        let points = data.iter().map(|s| (s.time, s.rate)).collect();

        let x_axis = AxisSpec::new("Time (hrs)", X_LIMITS).with_ticks(Ticks::Step {
            start: X_LIMITS.0,
            stop: X_LIMITS.1,
            step: X_TICK_STEP,
        });
        let y_axis = AxisSpec::new("Snap Rate", Y_LIMITS).with_ticks(Ticks::Step {
            start: Y_LIMITS.0,
            stop: Y_LIMITS.1,
            step: Y_TICK_STEP,
        });

        Plot::new("Snap Rate", style.clone(), x_axis, y_axis).with_series(Series::Line(
            LineSeries::new(points, ChartColor::hex(LINE_COLOR)).with_width(LINE_WIDTH),
        ))
    }
}

#[cfg(test)]
#[path = "rate_tests.rs"]
mod tests;
