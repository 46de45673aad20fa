//! Data-to-pixel scales and tick placement.

use crate::error::{FigureError, Result};

/// Mapping applied along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

/// Maps a data domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    kind: ScaleKind,
    domain: (f64, f64),
    range: (f64, f64),
}

/// Relative tolerance for values that sit on a domain boundary.
const EDGE_TOLERANCE: f64 = 1e-9;

impl Scale {
    /// Create a scale; `axis` names the axis in the error for bad limits.
    ///
    /// # Errors
    /// Returns `InvalidLimits` if the domain is not finite, empty, or (for a
    /// log scale) not strictly positive.
    pub fn new(kind: ScaleKind, domain: (f64, f64), range: (f64, f64), axis: &str) -> Result<Self> {
        let (lo, hi) = domain;
        let valid = lo.is_finite()
            && hi.is_finite()
            && lo < hi
            && (kind == ScaleKind::Linear || lo > 0.0);
        if !valid {
            return Err(FigureError::InvalidLimits {
                axis: axis.to_string(),
                lo,
                hi,
            });
        }
        Ok(Self {
            kind,
            domain,
            range,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> ScaleKind {
        self.kind
    }

    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Position of `value` within the domain: 0 at the low end, 1 at the high end.
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        let (lo, hi) = self.domain;
        match self.kind {
            ScaleKind::Linear => (value - lo) / (hi - lo),
            ScaleKind::Log10 => {
                (value.log10() - lo.log10()) / (hi.log10() - lo.log10())
            }
        }
    }

    /// Pixel coordinate of `value`.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let (start, end) = self.range;
        self.normalize(value).mul_add(end - start, start)
    }

    /// Whether `value` lies within the domain, allowing for float noise at the edges.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let t = self.normalize(value);
        (-EDGE_TOLERANCE..=1.0 + EDGE_TOLERANCE).contains(&t)
    }

    /// Pixel length of the range.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.range.1 - self.range.0).abs()
    }
}

/// Tick placement along an axis.
#[derive(Debug, Clone, PartialEq)]
pub enum Ticks {
    /// "Nice" steps (or decades on a log scale) sized to the axis length.
    Auto,
    /// `start, start + step, ...` up to and including `stop`.
    Step { start: f64, stop: f64, step: f64 },
    /// No ticks or tick labels.
    Hidden,
}

impl Ticks {
    /// Tick values inside the scale's domain.
    ///
    /// `max_bins` bounds the number of intervals for `Auto` on a linear scale.
    #[must_use]
    pub fn resolve(&self, scale: &Scale, max_bins: usize) -> Vec<f64> {
        let (lo, hi) = scale.domain();
        let values = match self {
            Self::Auto => match scale.kind() {
                ScaleKind::Linear => nice_ticks(lo, hi, max_bins),
                ScaleKind::Log10 => decade_ticks(lo, hi),
            },
            Self::Step { start, stop, step } => step_ticks(*start, *stop, *step),
            Self::Hidden => Vec::new(),
        };
        values.into_iter().filter(|v| scale.contains(*v)).collect()
    }
}

/// Multiples of a power of ten tried in order for auto ticks.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Evenly spaced "nice" ticks covering `[lo, hi]` with at most `max_bins` intervals.
fn nice_ticks(lo: f64, hi: f64, max_bins: usize) -> Vec<f64> {
    let span = hi - lo;
    if !(span.is_finite() && span > 0.0) {
        return Vec::new();
    }

    #[allow(clippy::cast_precision_loss)]
    let raw_step = span / max_bins.max(1) as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());

    for multiple in NICE_STEPS {
        let ticks = multiples_within(lo, hi, multiple * magnitude);
        if ticks.len() <= max_bins.max(1) + 1 {
            return ticks;
        }
    }
    // Unreachable in practice: a step of ten magnitudes is at least `raw_step`
    multiples_within(lo, hi, 20.0 * magnitude)
}

/// Integer multiples of `step` inside `[lo, hi]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn multiples_within(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    let first = (lo / step - EDGE_TOLERANCE).ceil() as i64;
    let last = (hi / step + EDGE_TOLERANCE).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

/// Powers of ten inside `[lo, hi]`.
#[allow(clippy::cast_possible_truncation)]
fn decade_ticks(lo: f64, hi: f64) -> Vec<f64> {
    if !(lo > 0.0 && hi > lo) {
        return Vec::new();
    }
    let first = (lo.log10() - EDGE_TOLERANCE).ceil() as i32;
    let last = (hi.log10() + EDGE_TOLERANCE).floor() as i32;
    (first..=last).map(|e| 10f64.powi(e)).collect()
}

/// `start, start + step, ...` up to and including `stop`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn step_ticks(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0 && stop >= start) {
        return Vec::new();
    }
    let count = ((stop - start) / step + EDGE_TOLERANCE).floor() as usize;
    (0..=count).map(|i| (i as f64).mul_add(step, start)).collect()
}

#[cfg(test)]
#[path = "scale_tests.rs"]
mod tests;
