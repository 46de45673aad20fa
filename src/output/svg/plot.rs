//! Composite 2-D plot: axes, gridlines, data series, and legend.
//!
//! Every figure is described as a [`Plot`] and rendered with the same
//! [`ChartStyle`], so border, grid, and font handling live in one place.

use std::fmt::Write;

use super::builder::SvgBuilder;
use super::element::{Axis, Bar, Line, SvgElement, Text};
use super::format::{
    format_coord, format_exponent, format_plain, format_power_of_ten, format_thousands,
};
use super::scale::{Scale, ScaleKind, Ticks};
use super::style::{ChartColor, ChartStyle, PlotArea, TextAnchor};
use crate::error::Result;

/// Id of the clip path that keeps series inside the plot area.
const CLIP_ID: &str = "plot-area";

/// Average glyph width as a fraction of the font size, for layout estimates.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Gap between tick labels and the axis title.
const TITLE_GAP: f64 = 6.0;

/// Legend swatch length.
const LEGEND_SWATCH: f64 = 16.0;

/// Tick label formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TickFormat {
    /// Decimal numbers with one precision shared by the whole axis.
    #[default]
    Plain,
    /// `2000 -> "2k"`, truncating.
    Thousands,
    /// `0.0001 -> "1e-4"`, zero as `"0"`.
    Exponent,
    /// `1000 -> "10³"`.
    PowerOfTen,
}

impl TickFormat {
    #[must_use]
    pub fn labels(self, values: &[f64]) -> Vec<String> {
        match self {
            Self::Plain => format_plain(values),
            Self::Thousands => values.iter().map(|v| format_thousands(*v)).collect(),
            Self::Exponent => values.iter().map(|v| format_exponent(*v)).collect(),
            Self::PowerOfTen => values.iter().map(|v| format_power_of_ten(*v)).collect(),
        }
    }
}

/// One axis of a plot.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSpec {
    pub label: String,
    pub limits: (f64, f64),
    pub scale: ScaleKind,
    pub ticks: Ticks,
    pub format: TickFormat,
}

impl AxisSpec {
    #[must_use]
    pub fn new(label: impl Into<String>, limits: (f64, f64)) -> Self {
        Self {
            label: label.into(),
            limits,
            scale: ScaleKind::Linear,
            ticks: Ticks::Auto,
            format: TickFormat::Plain,
        }
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = ticks;
        self
    }

    #[must_use]
    pub const fn with_format(mut self, format: TickFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn with_scale(mut self, scale: ScaleKind) -> Self {
        self.scale = scale;
        self
    }
}

/// Connected line through data points.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub label: Option<String>,
    pub points: Vec<(f64, f64)>,
    pub color: ChartColor,
    pub width: f64,
    pub dash: Option<Vec<f64>>,
}

impl LineSeries {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            label: None,
            points,
            color,
            width: 2.0,
            dash: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_dash(mut self, dash: Vec<f64>) -> Self {
        self.dash = Some(dash);
        self
    }
}

/// A vertical bar whose left edge sits at `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarSpan {
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

/// Edge-aligned vertical bars rising from zero.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub label: Option<String>,
    pub bars: Vec<BarSpan>,
    pub color: ChartColor,
    pub opacity: f64,
}

impl BarSeries {
    #[must_use]
    pub const fn new(bars: Vec<BarSpan>, color: ChartColor) -> Self {
        Self {
            label: None,
            bars,
            color,
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// A labelled horizontal span from `low` to `high`.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub low: f64,
    pub high: f64,
    pub label: String,
    pub color: ChartColor,
}

/// Horizontal spans sharing one row, each with a label centered inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct BandSeries {
    pub bands: Vec<Band>,
    /// Row center on the y axis.
    pub center: f64,
    /// Row height in y-axis units.
    pub thickness: f64,
    pub edge_color: ChartColor,
    pub label_color: ChartColor,
    pub label_font_size: f64,
}

/// Data drawn inside the plot area.
#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Line(LineSeries),
    Bars(BarSeries),
    Bands(BandSeries),
}

impl Series {
    fn legend_label(&self) -> Option<&str> {
        match self {
            Self::Line(line) => line.label.as_deref(),
            Self::Bars(bars) => bars.label.as_deref(),
            Self::Bands(_) => None,
        }
    }
}

/// Scales for both axes of a rendered plot.
struct Frame {
    area: PlotArea,
    x: Scale,
    y: Scale,
}

/// A complete figure.
#[derive(Debug, Clone)]
pub struct Plot {
    pub title: String,
    pub style: ChartStyle,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub series: Vec<Series>,
    /// Frameless legend in the upper-right corner of the plot area.
    pub legend: bool,
}

impl Plot {
    #[must_use]
    pub fn new(title: impl Into<String>, style: ChartStyle, x_axis: AxisSpec, y_axis: AxisSpec) -> Self {
        Self {
            title: title.into(),
            style,
            x_axis,
            y_axis,
            series: Vec::new(),
            legend: false,
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub const fn with_legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Resolved tick values for the x axis.
    ///
    /// # Errors
    /// Returns `InvalidLimits` if the axis limits are unusable.
    pub fn x_ticks(&self) -> Result<Vec<f64>> {
        let frame = self.frame()?;
        Ok(self.resolve_x_ticks(&frame))
    }

    /// Resolved tick values for the y axis.
    ///
    /// # Errors
    /// Returns `InvalidLimits` if the axis limits are unusable.
    pub fn y_ticks(&self) -> Result<Vec<f64>> {
        let frame = self.frame()?;
        Ok(self.resolve_y_ticks(&frame))
    }

    /// Render the plot as a standalone SVG document.
    ///
    /// Output depends only on the plot contents, so identical plots render
    /// byte-identical documents.
    ///
    /// # Errors
    /// Returns `InvalidLimits` if either axis has unusable limits.
    pub fn to_svg(&self) -> Result<String> {
        let frame = self.frame()?;
        let x_ticks = self.resolve_x_ticks(&frame);
        let y_ticks = self.resolve_y_ticks(&frame);

        let mut builder = SvgBuilder::new(self.style.width, self.style.height)
            .with_xml_declaration()
            .with_title(&self.title)
            .with_font_family(&self.style.font_family)
            .push_raw(clip_path(&frame.area))
            .push_raw(self.render_grid(&frame, &x_ticks, &y_ticks))
            .push_raw(self.render_series(&frame));

        for axis in self.axes(&frame, &x_ticks, &y_ticks) {
            builder = builder.push_element(&axis);
        }
        builder = builder.push_raw(self.render_extra_spines(&frame.area));
        for title in self.axis_titles(&frame.area, &y_ticks) {
            builder = builder.push_element(&title);
        }
        if self.legend {
            builder = builder.push_raw(self.render_legend(&frame.area));
        }

        Ok(builder.build())
    }

    fn frame(&self) -> Result<Frame> {
        let area = self.style.plot_area();
        let x = Scale::new(
            self.x_axis.scale,
            self.x_axis.limits,
            (area.left, area.right()),
            "x",
        )?;
        let y = Scale::new(
            self.y_axis.scale,
            self.y_axis.limits,
            (area.bottom(), area.top),
            "y",
        )?;
        Ok(Frame { area, x, y })
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resolve_x_ticks(&self, frame: &Frame) -> Vec<f64> {
        // Horizontal labels need roughly three font sizes of room each
        let bins = (frame.x.length() / (3.0 * self.style.tick_font_size)).max(1.0) as usize;
        self.x_axis.ticks.resolve(&frame.x, bins)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resolve_y_ticks(&self, frame: &Frame) -> Vec<f64> {
        let bins = (frame.y.length() / (2.0 * self.style.tick_font_size)).max(1.0) as usize;
        self.y_axis.ticks.resolve(&frame.y, bins)
    }

    fn render_grid(&self, frame: &Frame, x_ticks: &[f64], y_ticks: &[f64]) -> String {
        let area = &frame.area;
        let mut output = format!(
            r#"<g stroke="{}" stroke-width="0.8" stroke-dasharray="{}" opacity="{}">"#,
            self.style.grid_color().to_css(),
            self.style.grid_dash,
            format_coord(self.style.grid_opacity)
        );
        output.push('\n');

        for x in x_ticks.iter().map(|t| format_coord(frame.x.map(*t))) {
            let _ = writeln!(
                output,
                r#"    <line x1="{x}" y1="{}" x2="{x}" y2="{}"/>"#,
                format_coord(area.top),
                format_coord(area.bottom())
            );
        }
        for y in y_ticks.iter().map(|t| format_coord(frame.y.map(*t))) {
            let _ = writeln!(
                output,
                r#"    <line x1="{}" y1="{y}" x2="{}" y2="{y}"/>"#,
                format_coord(area.left),
                format_coord(area.right())
            );
        }

        output.push_str("</g>");
        output
    }

    fn render_series(&self, frame: &Frame) -> String {
        let mut output = format!(r#"<g clip-path="url(#{CLIP_ID})">"#);
        output.push('\n');

        for series in &self.series {
            let rendered = match series {
                Series::Line(line) => render_line(frame, line),
                Series::Bars(bars) => render_bars(frame, bars),
                Series::Bands(bands) => render_bands(frame, bands),
            };
            for line in rendered.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</g>");
        output
    }

    fn axes(&self, frame: &Frame, x_ticks: &[f64], y_ticks: &[f64]) -> [Axis; 2] {
        let area = &frame.area;
        let style = &self.style;
        let labelled = |scale: &Scale, ticks: &[f64], format: TickFormat| -> Vec<(f64, String)> {
            ticks
                .iter()
                .map(|t| scale.normalize(*t))
                .zip(format.labels(ticks))
                .collect()
        };

        let bottom = Axis::horizontal(area.left, area.bottom(), area.width)
            .with_labels(labelled(&frame.x, x_ticks, self.x_axis.format))
            .with_line(style.show_bottom_spine);
        let left = Axis::vertical(area.left, area.bottom(), area.height)
            .with_labels(labelled(&frame.y, y_ticks, self.y_axis.format))
            .with_line(style.show_left_spine);

        [bottom, left].map(|axis| {
            axis.with_color(style.spine_color())
                .with_label_color(style.text_color())
                .with_tick_length(style.tick_length)
                .with_font_size(style.tick_font_size)
        })
    }

    fn render_extra_spines(&self, area: &PlotArea) -> String {
        let color = self.style.spine_color().to_css();
        let mut output = String::new();
        if self.style.show_top_spine {
            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{top}" x2="{}" y2="{top}" stroke="{color}" stroke-width="1"/>"#,
                format_coord(area.left),
                format_coord(area.right()),
                top = format_coord(area.top)
            );
        }
        if self.style.show_right_spine {
            let _ = writeln!(
                output,
                r#"<line x1="{right}" y1="{}" x2="{right}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                format_coord(area.top),
                format_coord(area.bottom()),
                right = format_coord(area.right())
            );
        }
        output
    }

    fn axis_titles(&self, area: &PlotArea, y_ticks: &[f64]) -> Vec<Text> {
        let style = &self.style;
        let mut titles = Vec::new();

        if !self.x_axis.label.is_empty() {
            let y = area.bottom()
                + style.tick_length
                + style.tick_font_size
                + style.label_font_size
                + TITLE_GAP
                + 3.0;
            titles.push(
                Text::new(area.left + area.width / 2.0, y, &self.x_axis.label)
                    .with_anchor(TextAnchor::Middle)
                    .with_font_size(style.label_font_size)
                    .with_color(style.text_color()),
            );
        }

        if !self.y_axis.label.is_empty() {
            let widest = self
                .y_axis
                .format
                .labels(y_ticks)
                .iter()
                .map(|label| estimate_text_width(label, style.tick_font_size))
                .fold(0.0_f64, f64::max);
            let x = area.left - style.tick_length - 4.0 - widest - TITLE_GAP;
            titles.push(
                Text::new(x, area.top + area.height / 2.0, &self.y_axis.label)
                    .with_anchor(TextAnchor::Middle)
                    .with_font_size(style.label_font_size)
                    .with_color(style.text_color())
                    .rotated(-90.0),
            );
        }

        titles
    }

    fn render_legend(&self, area: &PlotArea) -> String {
        let font_size = self.style.legend_font_size;
        let entries: Vec<(&Series, &str)> = self
            .series
            .iter()
            .filter_map(|series| series.legend_label().map(|label| (series, label)))
            .collect();
        if entries.is_empty() {
            return String::new();
        }

        let widest = entries
            .iter()
            .map(|(_, label)| estimate_text_width(label, font_size))
            .fold(0.0_f64, f64::max);
        let swatch_x = area.right() - 6.0 - widest - 6.0 - LEGEND_SWATCH;
        let text_x = swatch_x + LEGEND_SWATCH + 6.0;

        let mut output = String::from("<g class=\"legend\">\n");
        for (i, (series, label)) in entries.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let row_y = (i as f64).mul_add(font_size * 1.6, area.top + 6.0 + font_size / 2.0);
            let swatch = legend_swatch(series, swatch_x, row_y, font_size);
            let text = Text::new(text_x, row_y + font_size / 3.0, *label)
                .with_font_size(font_size)
                .with_color(self.style.text_color());
            let _ = writeln!(output, "    {swatch}");
            let _ = writeln!(output, "    {}", text.render());
        }
        output.push_str("</g>");
        output
    }
}

fn clip_path(area: &PlotArea) -> String {
    format!(
        r#"<defs><clipPath id="{CLIP_ID}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
        format_coord(area.left),
        format_coord(area.top),
        format_coord(area.width),
        format_coord(area.height)
    )
}

fn render_line(frame: &Frame, series: &LineSeries) -> String {
    let points = series
        .points
        .iter()
        .map(|(x, y)| (frame.x.map(*x), frame.y.map(*y)))
        .collect();
    let mut line = Line::new(points, series.color.clone()).with_stroke_width(series.width);
    if let Some(dash) = &series.dash {
        line = line.with_dash(dash.clone());
    }
    line.render()
}

fn render_bars(frame: &Frame, series: &BarSeries) -> String {
    let baseline = frame.y.map(0.0);
    let mut output = String::new();
    for span in &series.bars {
        let left = frame.x.map(span.x);
        let right = frame.x.map(span.x + span.width);
        let top = frame.y.map(span.height);
        let bar = Bar::new(
            left.min(right),
            top.min(baseline),
            (right - left).abs(),
            (baseline - top).abs(),
            series.color.clone(),
        )
        .with_opacity(series.opacity);
        let _ = writeln!(output, "{}", bar.render());
    }
    output
}

fn render_bands(frame: &Frame, series: &BandSeries) -> String {
    let half = series.thickness / 2.0;
    let top = frame.y.map(series.center + half);
    let bottom = frame.y.map(series.center - half);
    let middle = frame.y.map(series.center);

    let mut output = String::new();
    for band in &series.bands {
        let left = frame.x.map(band.low);
        let right = frame.x.map(band.high);
        let bar = Bar::new(left, top, right - left, bottom - top, band.color.clone())
            .with_stroke(series.edge_color.clone());
        let _ = writeln!(output, "{}", bar.render());

        let label_center = match frame.x.kind() {
            ScaleKind::Linear => f64::midpoint(band.low, band.high),
            ScaleKind::Log10 => (band.low * band.high).sqrt(),
        };
        let label = Text::new(frame.x.map(label_center), middle, &band.label)
            .with_anchor(TextAnchor::Middle)
            .with_font_size(series.label_font_size)
            .with_color(series.label_color.clone())
            .bold()
            .centered();
        let _ = writeln!(output, "{}", label.render());
    }
    output
}

fn legend_swatch(series: &Series, x: f64, y: f64, font_size: f64) -> String {
    match series {
        Series::Line(line) => {
            let mut swatch = Line::new(vec![(x, y), (x + LEGEND_SWATCH, y)], line.color.clone())
                .with_stroke_width(line.width);
            if let Some(dash) = &line.dash {
                swatch = swatch.with_dash(dash.clone());
            }
            swatch.render()
        }
        Series::Bars(bars) => {
            let height = font_size * 0.7;
            Bar::new(x, y - height / 2.0, LEGEND_SWATCH, height, bars.color.clone())
                .with_opacity(bars.opacity)
                .render()
        }
        Series::Bands(_) => String::new(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn estimate_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * GLYPH_WIDTH_RATIO
}

#[cfg(test)]
#[path = "plot_tests.rs"]
mod tests;
