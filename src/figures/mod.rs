//! The poster figures.
//!
//! Each figure is a pure function from typed data and the shared
//! [`ChartStyle`] to a [`Plot`]; [`render_to_file`] adds loading and writing.

pub mod amplitude;
pub mod bands;
pub mod rate;
pub mod waveform;

pub use amplitude::AmplitudeFigure;
pub use rate::RateFigure;
pub use waveform::WaveformFigure;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::data::load_json;
use crate::error::Result;
use crate::output::atomic_write;
use crate::output::svg::{ChartStyle, Plot};

/// A figure drawn from one JSON dataset.
pub trait Figure {
    /// Shape of the JSON input.
    type Data: DeserializeOwned;

    /// Human-readable name used in progress messages.
    const NAME: &'static str;

    /// Describe the figure for `data`.
    fn build(data: &Self::Data, style: &ChartStyle) -> Plot;
}

/// Load `data_path`, draw figure `F`, and write the SVG to `output_path`.
///
/// Nothing is written unless loading and rendering both succeed.
///
/// # Errors
/// Returns the first read, parse, render, or write error.
pub fn render_to_file<F: Figure>(data_path: &Path, output_path: &Path, style: &ChartStyle) -> Result<()> {
    let data: F::Data = load_json(data_path)?;
    log::debug!("Loaded {} data from {}", F::NAME, data_path.display());

    let svg = F::build(&data, style).to_svg()?;
    atomic_write(output_path, svg.as_bytes())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
