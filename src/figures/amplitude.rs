//! Snap amplitude histogram against SαS and Gaussian fits.

use crate::data::AmplitudeDistribution;
use crate::output::svg::{
    AxisSpec, BarSeries, BarSpan, ChartColor, ChartStyle, LineSeries, Plot,
    Series, TickFormat,
};

use super::Figure;

const HISTOGRAM_COLOR: &str = "cornflowerblue";
const HISTOGRAM_OPACITY: f64 = 0.6;

const LEVY_COLOR: &str = "#ff7260";
const LEVY_WIDTH: f64 = 2.5;

const GAUSS_COLOR: &str = "#6b7280";
const GAUSS_WIDTH: f64 = 1.5;
/// 4 on, 2 off, in multiples of the line width.
const GAUSS_DASH: [f64; 2] = [4.0, 2.0];

/// Histogram with two density overlays; limits come from the data.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmplitudeFigure;

impl Figure for AmplitudeFigure {
    type Data = AmplitudeDistribution;

    const NAME: &'static str = "snap amplitude";

    fn build(data: &Self::Data, style: &ChartStyle) -> Plot {
        let limits = data.plot_limits;
        let x_axis = AxisSpec::new("Uncalibrated Pressure", (limits.xlim[0], limits.xlim[1]))
            .with_format(TickFormat::Thousands);
        let y_axis = AxisSpec::new("Probability Density", (limits.ylim[0], limits.ylim[1]))
            .with_format(TickFormat::Exponent);

        let bars = data
            .histogram
            .iter()
            .map(|bin| BarSpan {
                x: bin.x,
                width: bin.width,
                height: bin.y,
            })
            .collect();
        let levy = data.pdf.iter().map(|p| (p.x, p.levy_pdf)).collect();
        let gauss = data.pdf.iter().map(|p| (p.x, p.gauss_pdf)).collect();

        Plot::new("Snap Amplitude Distribution", style.clone(), x_axis, y_axis)
            .with_series(Series::Bars(
                BarSeries::new(bars, ChartColor::named(HISTOGRAM_COLOR))
                    .with_opacity(HISTOGRAM_OPACITY)
                    .with_label("Empirical Data"),
            ))
            .with_series(Series::Line(
                LineSeries::new(levy, ChartColor::hex(LEVY_COLOR))
                    .with_width(LEVY_WIDTH)
                    .with_label("SαS"),
            ))
            .with_series(Series::Line(
                LineSeries::new(gauss, ChartColor::hex(GAUSS_COLOR))
                    .with_width(GAUSS_WIDTH)
                    .with_dash(GAUSS_DASH.iter().map(|d| d * GAUSS_WIDTH).collect())
                    .with_label("Gaussian"),
            ))
            .with_legend()
    }
}

#[cfg(test)]
#[path = "amplitude_tests.rs"]
mod tests;
