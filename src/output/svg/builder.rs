//! SVG document builder.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::{format_coord, xml_escape};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="no"?>"#;

/// Builder for standalone SVG documents.
///
/// No background is drawn, so the figure stays transparent.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    font_family: Option<String>,
    xml_declaration: bool,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            font_family: None,
            xml_declaration: false,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Font family inherited by every text element.
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Emit an XML declaration so the output is a standalone `.svg` file.
    #[must_use]
    pub const fn with_xml_declaration(mut self) -> Self {
        self.xml_declaration = true;
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        if self.xml_declaration {
            let _ = writeln!(output, "{XML_DECLARATION}");
        }

        let width = format_coord(self.width);
        let height = format_coord(self.height);
        let font = self.font_family.as_deref().map_or_else(String::new, |family| {
            format!(r#" font-family="{}""#, xml_escape(family))
        });
        let _ = writeln!(
            output,
            r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg" role="img"{font}>"#
        );

        if !self.title.is_empty() {
            let escaped = xml_escape(&self.title);
            let _ = writeln!(output, r"    <title>{escaped}</title>");
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>\n");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
