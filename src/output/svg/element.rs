//! Primitive SVG elements: axes, bars, lines, and text.

use std::fmt::Write;

use super::format::{format_coord, xml_escape};
use super::style::{ChartColor, TextAnchor};

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Tick position and label for axis rendering.
struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis component: spine line, tick marks, and tick labels.
///
/// Label positions are normalized to `0.0..=1.0` along the axis length.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub color: ChartColor,
    pub label_color: ChartColor,
    pub show_line: bool,
    pub tick_length: f64,
    pub font_size: f64,
}

impl Axis {
    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Horizontal, x, y, length)
    }

    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self::new(AxisOrientation::Vertical, x, y, length)
    }

    fn new(orientation: AxisOrientation, x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation,
            x,
            y,
            length,
            labels: Vec::new(),
            color: ChartColor::hex("#cccccc"),
            label_color: ChartColor::hex("#262626"),
            show_line: true,
            tick_length: 5.0,
            font_size: 10.0,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, color: ChartColor) -> Self {
        self.label_color = color;
        self
    }

    #[must_use]
    pub const fn with_line(mut self, show: bool) -> Self {
        self.show_line = show;
        self
    }

    #[must_use]
    pub const fn with_tick_length(mut self, length: f64) -> Self {
        self.tick_length = length;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = pos.mul_add(self.length, self.x);
                TickInfo {
                    start_x: tick_x,
                    start_y: self.y,
                    end_x: tick_x,
                    end_y: self.y + self.tick_length,
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size + 3.0,
                    anchor: TextAnchor::Middle,
                }
            }
            AxisOrientation::Vertical => {
                let tick_y = pos.mul_add(-self.length, self.y);
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x - self.tick_length,
                    end_y: tick_y,
                    label_x: self.x - self.tick_length - 4.0,
                    label_y: tick_y + self.font_size / 3.0,
                    anchor: TextAnchor::End,
                }
            }
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();
        let label_color = self.label_color.to_css();

        if self.show_line {
            let (end_x, end_y) = match self.orientation {
                AxisOrientation::Horizontal => (self.x + self.length, self.y),
                AxisOrientation::Vertical => (self.x, self.y - self.length),
            };
            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                format_coord(self.x),
                format_coord(self.y),
                format_coord(end_x),
                format_coord(end_y)
            );
        }

        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);

            if self.tick_length > 0.0 {
                let _ = writeln!(
                    output,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                    format_coord(tick.start_x),
                    format_coord(tick.start_y),
                    format_coord(tick.end_x),
                    format_coord(tick.end_y)
                );
            }

            let escaped_label = xml_escape(label);
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="{}" fill="{label_color}" font-size="{}">{escaped_label}</text>"#,
                format_coord(tick.label_x),
                format_coord(tick.label_y),
                tick.anchor,
                format_coord(self.font_size)
            );
        }

        output
    }
}

/// A filled rectangle: histogram bar or band span.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub opacity: f64,
    pub stroke: Option<ChartColor>,
}

impl Bar {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, color: ChartColor) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
            opacity: 1.0,
            stroke: None,
        }
    }

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, color: ChartColor) -> Self {
        self.stroke = Some(color);
        self
    }
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let mut attrs = format!(
            r#"x="{}" y="{}" width="{}" height="{}" fill="{}""#,
            format_coord(self.x),
            format_coord(self.y),
            format_coord(self.width),
            format_coord(self.height),
            self.color.to_css()
        );
        if self.opacity < 1.0 {
            let _ = write!(attrs, r#" fill-opacity="{}""#, format_coord(self.opacity));
        }
        if let Some(stroke) = &self.stroke {
            let _ = write!(attrs, r#" stroke="{}" stroke-width="1""#, stroke.to_css());
        }

        format!("<rect {attrs}/>")
    }
}

/// A polyline in a line chart.
#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub color: ChartColor,
    pub stroke_width: f64,
    /// Dash pattern in user units; `None` draws a solid line.
    pub dash: Option<Vec<f64>>,
}

impl Line {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            points,
            color,
            stroke_width: 2.0,
            dash: None,
        }
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: Vec<f64>) -> Self {
        self.dash = Some(dash);
        self
    }

    /// SVG path data for the points.
    #[must_use]
    pub fn path_data(&self) -> String {
        let mut path = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            let command = if i == 0 { "M" } else { " L" };
            let _ = write!(path, "{command}{},{}", format_coord(*x), format_coord(*y));
        }
        path
    }
}

impl SvgElement for Line {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }

        let color = self.color.to_css();
        let dash = self.dash.as_ref().map_or_else(String::new, |pattern| {
            let values: Vec<String> = pattern.iter().map(|v| format_coord(*v)).collect();
            format!(r#" stroke-dasharray="{}""#, values.join(","))
        });

        // Round caps would eat into the dash gaps
        let cap = if self.dash.is_some() { "butt" } else { "round" };

        format!(
            r#"<path d="{}" fill="none" stroke="{color}" stroke-width="{}"{dash} stroke-linecap="{cap}" stroke-linejoin="round"/>"#,
            self.path_data(),
            format_coord(self.stroke_width)
        )
    }
}

/// A text label; `\n` in the content starts a new line.
#[derive(Debug, Clone)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub anchor: TextAnchor,
    pub font_size: f64,
    pub color: ChartColor,
    pub bold: bool,
    /// Rotation in degrees around `(x, y)`.
    pub rotation: Option<f64>,
    /// Center the block of lines vertically on `y`.
    pub centered: bool,
}

/// Line spacing for multi-line text, in em.
const LINE_HEIGHT_EM: f64 = 1.2;

impl Text {
    #[must_use]
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            anchor: TextAnchor::Start,
            font_size: 12.0,
            color: ChartColor::hex("#262626"),
            bold: false,
            rotation: None,
            centered: false,
        }
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    #[must_use]
    pub const fn centered(mut self) -> Self {
        self.centered = true;
        self
    }
}

impl SvgElement for Text {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let x = format_coord(self.x);
        let y = format_coord(self.y);
        let mut attrs = format!(
            r#"x="{x}" y="{y}" text-anchor="{}" fill="{}" font-size="{}""#,
            self.anchor,
            self.color.to_css(),
            format_coord(self.font_size)
        );
        if self.bold {
            attrs.push_str(r#" font-weight="bold""#);
        }
        if self.centered {
            attrs.push_str(r#" dominant-baseline="central""#);
        }
        if let Some(degrees) = self.rotation {
            let _ = write!(attrs, r#" transform="rotate({} {x} {y})""#, format_coord(degrees));
        }

        let lines: Vec<&str> = self.content.split('\n').collect();
        if lines.len() == 1 {
            return format!("<text {attrs}>{}</text>", xml_escape(&self.content));
        }

        let first_dy = if self.centered {
            -((lines.len() - 1) as f64) * LINE_HEIGHT_EM / 2.0
        } else {
            0.0
        };
        let mut output = format!("<text {attrs}>");
        for (i, line) in lines.iter().enumerate() {
            let dy = if i == 0 { first_dy } else { LINE_HEIGHT_EM };
            let _ = write!(
                output,
                r#"<tspan x="{x}" dy="{}em">{}</tspan>"#,
                format_coord(dy),
                xml_escape(line)
            );
        }
        output.push_str("</text>");
        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
