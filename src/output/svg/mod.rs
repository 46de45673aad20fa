//! Hand-rolled SVG chart toolkit.
//!
//! Provides the building blocks the figures are drawn with:
//! - primitives (axis, bar, line, text) behind the [`SvgElement`] trait
//! - linear and log10 scales with automatic "nice" tick placement
//! - tick label formatters
//! - [`Plot`], a composite figure that applies one shared [`ChartStyle`]

mod builder;
mod element;
mod format;
mod plot;
mod scale;
mod style;

pub use builder::SvgBuilder;
pub use element::{Axis, AxisOrientation, Bar, Line, SvgElement, Text};
pub use format::{
    format_coord, format_exponent, format_plain, format_power_of_ten, format_thousands,
    xml_escape,
};
pub use plot::{
    AxisSpec, Band, BandSeries, BarSeries, BarSpan, LineSeries, Plot, Series,
    TickFormat,
};
pub use scale::{Scale, ScaleKind, Ticks};
pub use style::{ChartColor, ChartStyle, PlotArea, TextAnchor};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
