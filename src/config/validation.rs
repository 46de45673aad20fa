//! Semantic checks run after a config file parses.

use crate::config::Config;
use crate::output::svg::ChartStyle;
use crate::{FigureError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a size is not positive and finite, the margins leave
/// no room for the plot, or an opacity is outside `0.0..=1.0`.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_style(&config.style)
}

fn validate_style(style: &ChartStyle) -> Result<()> {
    for (name, value) in [
        ("width", style.width),
        ("height", style.height),
        ("tick_font_size", style.tick_font_size),
        ("label_font_size", style.label_font_size),
        ("legend_font_size", style.legend_font_size),
    ] {
        if !(value.is_finite() && value > 0.0) {
            return Err(FigureError::Config(format!(
                "style.{name} must be a positive number, got {value}"
            )));
        }
    }

    for (name, value) in [
        ("margin_left", style.margin_left),
        ("margin_right", style.margin_right),
        ("margin_top", style.margin_top),
        ("margin_bottom", style.margin_bottom),
        ("tick_length", style.tick_length),
    ] {
        if !(value.is_finite() && value >= 0.0) {
            return Err(FigureError::Config(format!(
                "style.{name} must be zero or positive, got {value}"
            )));
        }
    }

    if style.margin_left + style.margin_right >= style.width {
        return Err(FigureError::Config(format!(
            "style.margin_left + style.margin_right ({}) must be less than style.width ({})",
            style.margin_left + style.margin_right,
            style.width
        )));
    }
    if style.margin_top + style.margin_bottom >= style.height {
        return Err(FigureError::Config(format!(
            "style.margin_top + style.margin_bottom ({}) must be less than style.height ({})",
            style.margin_top + style.margin_bottom,
            style.height
        )));
    }

    if !(0.0..=1.0).contains(&style.grid_opacity) {
        return Err(FigureError::Config(format!(
            "style.grid_opacity must be between 0.0 and 1.0, got {}",
            style.grid_opacity
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
