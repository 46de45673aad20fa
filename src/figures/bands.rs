//! Frequency bands of underwater sound sources, on a log axis.
//!
//! Drawn from fixed inline data rather than a dataset file.

use std::path::Path;

use crate::error::Result;
use crate::output::atomic_write;
use crate::output::svg::{
    AxisSpec, Band, BandSeries, ChartColor, ChartStyle, Plot, ScaleKind, Series, TickFormat,
    Ticks,
};

pub const NAME: &str = "frequency bands";

/// Default output file name, inside the assets directory.
pub const FILE_NAME: &str = "frequency_bands.svg";

/// `(low Hz, high Hz, label, color)`.
const BANDS: [(f64, f64, &str, &str); 4] = [
    (1.0, 10.0, "Geophysical\nMicroseisms", "#94a3b8"),
    (10.0, 500.0, "Anthropogenic\nShipping, Surf", "#60a5fa"),
    (500.0, 25_000.0, "Biological\nSnapping Shrimp", "#34d399"),
    (25_000.0, 100_000.0, "Biological\nEcholocation", "#10b981"),
];

pub const X_LIMITS: (f64, f64) = (1.0, 1e5);
/// A 0.8-high row at zero plus 5% padding.
const Y_LIMITS: (f64, f64) = (-0.44, 0.44);
const ROW_THICKNESS: f64 = 0.8;
const LABEL_FONT_SIZE: f64 = 9.0;

/// 6 x 1.2 inches.
const WIDTH: f64 = 432.0;
const HEIGHT: f64 = 86.4;

/// Describe the band diagram, reusing the shared fonts and colors.
#[must_use]
pub fn build(style: &ChartStyle) -> Plot {
    let style = style
        .clone()
        .with_size(WIDTH, HEIGHT)
        .with_margins(14.0, 14.0, 6.0, 36.0)
        .with_left_spine(false);

    let bands = BANDS
        .iter()
        .map(|&(low, high, label, color)| Band {
            low,
            high,
            label: label.to_string(),
            color: ChartColor::hex(color),
        })
        .collect();

    Plot::new(
        "Frequency Bands",
        style,
        AxisSpec::new("Frequency (Hz)", X_LIMITS)
            .with_scale(ScaleKind::Log10)
            .with_format(TickFormat::PowerOfTen),
        AxisSpec::new("", Y_LIMITS).with_ticks(Ticks::Hidden),
    )
    .with_series(Series::Bands(BandSeries {
        bands,
        center: 0.0,
        thickness: ROW_THICKNESS,
        edge_color: ChartColor::named("white"),
        label_color: ChartColor::named("white"),
        label_font_size: LABEL_FONT_SIZE,
    }))
}

/// Render the band diagram to `output_path`.
///
/// # Errors
/// Returns an error if the SVG cannot be rendered or written.
pub fn render_to_file(output_path: &Path, style: &ChartStyle) -> Result<()> {
    let svg = build(style).to_svg()?;
    atomic_write(output_path, svg.as_bytes())
}

#[cfg(test)]
#[path = "bands_tests.rs"]
mod tests;
