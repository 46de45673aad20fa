//! Renders the three dataset-driven figures in a fixed order.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::figures::{render_to_file, AmplitudeFigure, Figure, RateFigure, WaveformFigure};
use crate::output::ensure_dir;
use crate::output::svg::ChartStyle;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// One of the dataset-driven figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureKind {
    Rate,
    Waveform,
    Amplitude,
}

impl FigureKind {
    /// Render order.
    pub const ALL: [Self; 3] = [Self::Rate, Self::Waveform, Self::Amplitude];

    /// File stem shared by the input JSON and the output SVG.
    #[must_use]
    pub const fn stem(self) -> &'static str {
        match self {
            Self::Rate => "snap_rate",
            Self::Waveform => "snap_waveform",
            Self::Amplitude => "snap_amplitude",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rate => RateFigure::NAME,
            Self::Waveform => WaveformFigure::NAME,
            Self::Amplitude => AmplitudeFigure::NAME,
        }
    }

    fn render(self, input: &Path, output: &Path, style: &ChartStyle) -> Result<()> {
        match self {
            Self::Rate => render_to_file::<RateFigure>(input, output, style),
            Self::Waveform => render_to_file::<WaveformFigure>(input, output, style),
            Self::Amplitude => render_to_file::<AmplitudeFigure>(input, output, style),
        }
    }
}

/// An input dataset and the SVG drawn from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureJob {
    pub kind: FigureKind,
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Where datasets are read from and figures written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigurePaths {
    pub data_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl Default for FigurePaths {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR, DEFAULT_ASSETS_DIR)
    }
}

impl FigurePaths {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            assets_dir: assets_dir.into(),
        }
    }

    /// The three jobs, in render order.
    #[must_use]
    pub fn jobs(&self) -> Vec<FigureJob> {
        FigureKind::ALL
            .iter()
            .map(|&kind| FigureJob {
                kind,
                input: self.data_dir.join(format!("{}.json", kind.stem())),
                output: self.assets_dir.join(format!("{}.svg", kind.stem())),
            })
            .collect()
    }
}

/// Create the assets directory and render every figure.
///
/// `on_saved` is called after each file is written. The first failure stops
/// the run; figures already written are kept.
///
/// # Errors
/// Returns the first directory, read, parse, render, or write error.
pub fn run<F>(paths: &FigurePaths, style: &ChartStyle, mut on_saved: F) -> Result<()>
where
    F: FnMut(&FigureJob),
{
    ensure_dir(&paths.assets_dir)?;

    for job in paths.jobs() {
        log::debug!(
            "Rendering {} from {} to {}",
            job.kind.name(),
            job.input.display(),
            job.output.display()
        );
        job.kind.render(&job.input, &job.output, style)?;
        on_saved(&job);
    }
    Ok(())
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
