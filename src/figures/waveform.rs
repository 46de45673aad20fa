//! A single snap waveform over its first two milliseconds.

use crate::data::WaveformSample;
use crate::output::svg::{AxisSpec, ChartColor, ChartStyle, LineSeries, Plot, Series};

use super::Figure;

/// Samples after this time (ms) are not drawn.
pub const WINDOW_MS: f64 = 2.0;

pub const X_LIMITS: (f64, f64) = (0.0, WINDOW_MS);
pub const Y_LIMITS: (f64, f64) = (-1.1, 1.1);

const LINE_COLOR: &str = "#14b8a6";
const LINE_WIDTH: f64 = 2.0;

/// Samples with `time <= WINDOW_MS`, in input order.
pub fn windowed(samples: &[WaveformSample]) -> impl Iterator<Item = &WaveformSample> {
    samples.iter().filter(|s| s.time <= WINDOW_MS)
}

/// Line chart of the windowed waveform.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaveformFigure;

impl Figure for WaveformFigure {
    type Data = Vec<WaveformSample>;

    const NAME: &'static str = "snap waveform";

    fn build(data: &Self::Data, style: &ChartStyle) -> Plot {
        let points: Vec<(f64, f64)> = windowed(data).map(|s| (s.time, s.amplitude)).collect();
        log::debug!(
            "Waveform window keeps {} of {} samples",
            points.len(),
            data.len()
        );
        if points.is_empty() {
            log::warn!("No waveform samples within the first {WINDOW_MS} ms");
        }

        Plot::new(
            "Snap Waveform",
            style.clone(),
            AxisSpec::new("Time (ms)", X_LIMITS),
            AxisSpec::new("Normalised Amplitude", Y_LIMITS),
        )
        .with_series(Series::Line(
            LineSeries::new(points, ChartColor::hex(LINE_COLOR)).with_width(LINE_WIDTH),
        ))
    }
}

#[cfg(test)]
#[path = "waveform_tests.rs"]
mod tests;
