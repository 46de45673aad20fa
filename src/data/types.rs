//! Record shapes of the pre-computed JSON datasets.

use serde::{Deserialize, Serialize};

/// One point of the snap-rate time series (`data/snap_rate.json`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSample {
    /// Hours since the start of the recording.
    pub time: f64,
    pub rate: f64,
}

/// One sample of a single snap waveform (`data/snap_waveform.json`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveformSample {
    /// Milliseconds.
    pub time: f64,
    /// Normalized to `-1.0..=1.0`.
    pub amplitude: f64,
}

/// Histogram bar with its left edge at `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub x: f64,
    pub y: f64,
    pub width: f64,
}

/// Fitted densities evaluated at `x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PdfPoint {
    pub x: f64,
    pub levy_pdf: f64,
    pub gauss_pdf: f64,
}

/// Axis bounds supplied with the amplitude data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLimits {
    pub xlim: [f64; 2],
    pub ylim: [f64; 2],
}

/// Amplitude histogram plus SαS and Gaussian fits (`data/snap_amplitude.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmplitudeDistribution {
    pub histogram: Vec<HistogramBin>,
    pub pdf: Vec<PdfPoint>,
    pub plot_limits: PlotLimits,
}
