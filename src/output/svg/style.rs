//! SVG styling primitives: colors, text anchoring, and the shared chart style.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Color specification for standalone SVG files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#3b82f6")
    Hex(String),
    /// SVG color keyword (e.g., "cornflowerblue")
    Named(String),
}

impl ChartColor {
    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Create a named SVG color.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self::Named(name.to_string())
    }

    /// Interpret a color as written in a config file.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.starts_with('#') {
            Self::hex(value)
        } else {
            Self::named(value)
        }
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(value) | Self::Named(value) => value.clone(),
        }
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

/// Pixel rectangle occupied by the data area of a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Styling shared by every figure.
///
/// Sizes are in SVG user units; the defaults correspond to a 5 x 2.5 inch
/// figure at 72 units per inch with a light "whitegrid" look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartStyle {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub font_family: String,
    pub text_color: String,
    pub spine_color: String,
    pub grid_color: String,
    /// SVG `stroke-dasharray` for gridlines.
    pub grid_dash: String,
    pub grid_opacity: f64,
    pub tick_length: f64,
    pub tick_font_size: f64,
    pub label_font_size: f64,
    pub legend_font_size: f64,
    pub show_top_spine: bool,
    pub show_right_spine: bool,
    pub show_bottom_spine: bool,
    pub show_left_spine: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 180.0,
            margin_left: 58.0,
            margin_right: 14.0,
            margin_top: 10.0,
            margin_bottom: 44.0,
            font_family: "DejaVu Sans, Arial, sans-serif".to_string(),
            text_color: "#262626".to_string(),
            spine_color: "#cccccc".to_string(),
            grid_color: "#b0b0b0".to_string(),
            grid_dash: "4,2".to_string(),
            grid_opacity: 0.4,
            tick_length: 0.0,
            tick_font_size: 10.0,
            label_font_size: 12.0,
            legend_font_size: 8.0,
            show_top_spine: false,
            show_right_spine: false,
            show_bottom_spine: true,
            show_left_spine: true,
        }
    }
}

impl ChartStyle {
    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub const fn with_margins(mut self, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        self.margin_left = left;
        self.margin_right = right;
        self.margin_top = top;
        self.margin_bottom = bottom;
        self
    }

    #[must_use]
    pub const fn with_left_spine(mut self, show: bool) -> Self {
        self.show_left_spine = show;
        self
    }

    /// Data area left after subtracting the margins.
    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea {
            left: self.margin_left,
            top: self.margin_top,
            width: self.width - self.margin_left - self.margin_right,
            height: self.height - self.margin_top - self.margin_bottom,
        }
    }

    #[must_use]
    pub fn text_color(&self) -> ChartColor {
        ChartColor::parse(&self.text_color)
    }

    #[must_use]
    pub fn spine_color(&self) -> ChartColor {
        ChartColor::parse(&self.spine_color)
    }

    #[must_use]
    pub fn grid_color(&self) -> ChartColor {
        ChartColor::parse(&self.grid_color)
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
