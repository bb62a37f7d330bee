//! SVG generation from laid-out documents

use crate::layout::Document;

use super::SvgConfig;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a rectangle covering the whole canvas
    pub fn add_background(&mut self, fill: &str) {
        self.elements.push(format!(
            r#"{}<rect width="100%" height="100%" fill="{}"/>"#,
            self.indent_str(),
            escape_xml(fill)
        ));
    }

    /// Add a filled circle
    pub fn add_circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.elements.push(format!(
            r#"{}<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            self.indent_str(),
            cx,
            cy,
            r,
            escape_xml(fill)
        ));
    }

    /// Build the final SVG string
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg width="{}" height="{}" xmlns="{}">"#,
            width, height, SVG_NAMESPACE
        ));
        svg.push_str(nl);

        for element in &self.elements {
            svg.push_str(element);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a Document to an SVG string.
///
/// The background, if any, comes first so every dot is drawn above it.
pub fn render_svg(doc: &Document, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    if let Some(fill) = &doc.background {
        builder.add_background(fill);
    }

    for dot in &doc.dots {
        builder.add_circle(dot.center.x, dot.center.y, dot.radius, &dot.color);
    }

    builder.build(doc.width, doc.height)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Dot, Point};
    use pretty_assertions::assert_eq;

    fn dot(x: f64, y: f64) -> Dot {
        Dot {
            center: Point::new(x, y),
            radius: 3.0,
            color: "black".to_string(),
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"x" onload="y"#), "x&quot; onload=&quot;y");
    }

    #[test]
    fn test_empty_document() {
        let doc = Document {
            width: 5.0,
            height: 40.0,
            background: None,
            dots: vec![],
        };
        let svg = render_svg(&doc, &SvgConfig::default());
        assert_eq!(
            svg,
            "<svg width=\"5\" height=\"40\" xmlns=\"http://www.w3.org/2000/svg\">\n</svg>"
        );
    }

    #[test]
    fn test_background_before_dots() {
        let doc = Document {
            width: 30.0,
            height: 40.0,
            background: Some("#f0f8ff".to_string()),
            dots: vec![dot(5.0, 5.0), dot(5.0, 15.0)],
        };
        let svg = render_svg(&doc, &SvgConfig::default());
        let expected = [
            r#"<svg width="30" height="40" xmlns="http://www.w3.org/2000/svg">"#,
            r##"  <rect width="100%" height="100%" fill="#f0f8ff"/>"##,
            r#"  <circle cx="5" cy="5" r="3" fill="black"/>"#,
            r#"  <circle cx="5" cy="15" r="3" fill="black"/>"#,
            "</svg>",
        ]
        .join("\n");
        assert_eq!(svg, expected);
    }

    #[test]
    fn test_compact_standalone() {
        let doc = Document {
            width: 7.5,
            height: 40.0,
            background: None,
            dots: vec![dot(2.5, 7.5)],
        };
        let config = SvgConfig::new().with_standalone(true).with_pretty_print(false);
        let svg = render_svg(&doc, &config);
        assert_eq!(
            svg,
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8"?>"#,
                r#"<svg width="7.5" height="40" xmlns="http://www.w3.org/2000/svg">"#,
                r#"<circle cx="2.5" cy="7.5" r="3" fill="black"/>"#,
                "</svg>"
            )
        );
    }
}
