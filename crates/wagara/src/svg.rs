//! SVG output - turn recorded shapes into a document.
//!
//! Shapes keep their draw order inside a layer so filled motifs still hide
//! the strokes beneath them, the way they did on screen.
//!
//! ## Curves
//!
//! Curves are written as cubic Bézier `<path>`s converted from the
//! Catmull-Rom control points. For pen plotters, [`lines_to_svg`] writes the
//! flattened output of [`crate::Canvas::plot_lines`] instead.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::geometry::{Line, Point};
use crate::surface::{CubicSegment, Shape};

/// Stroke and fill settings for one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub stroke: String,
    pub stroke_width: f64,
    /// Fill for polygon shapes; lines and curves are never filled.
    pub fill: String,
    pub opacity: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: "black".to_string(),
            stroke_width: 1.5,
            fill: "#f0f0f0".to_string(),
            opacity: 1.0,
        }
    }
}

impl Style {
    /// Check every field is something an SVG renderer will accept.
    pub fn validate(&self) -> Result<()> {
        parse_color("stroke", &self.stroke)?;
        if self.fill != "none" {
            parse_color("fill", &self.fill)?;
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(Error::InvalidStyle(format!(
                "stroke width must be positive, got {}",
                self.stroke_width
            )));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(Error::InvalidStyle(format!(
                "opacity must be between 0 and 1, got {}",
                self.opacity
            )));
        }
        Ok(())
    }
}

/// Check that `value` is a colour SVG understands; `what` names it in the error.
pub fn check_color(what: &str, value: &str) -> Result<()> {
    parse_color(what, value).map(|_| ())
}

fn parse_color(what: &str, value: &str) -> Result<svgtypes::Color> {
    svgtypes::Color::from_str(value)
        .map_err(|e| Error::InvalidStyle(format!("{} colour '{}': {}", what, value, e)))
}

/// A named group of shapes drawn with one style.
#[derive(Debug, Clone)]
pub struct SvgLayer {
    pub name: String,
    pub style: Style,
    pub shapes: Vec<Shape>,
}

impl SvgLayer {
    pub fn new(name: impl Into<String>, style: Style, shapes: Vec<Shape>) -> Self {
        Self { name: name.into(), style, shapes }
    }
}

/// A complete document: canvas size, background and layers bottom to top.
#[derive(Debug, Clone)]
pub struct SvgDocument {
    pub width: f64,
    pub height: f64,
    pub background: Option<String>,
    pub title: Option<String>,
    pub layers: Vec<SvgLayer>,
}

impl SvgDocument {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: None,
            title: None,
            layers: Vec::new(),
        }
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn push_layer(&mut self, layer: SvgLayer) {
        self.layers.push(layer);
    }

    /// Total shapes across all layers.
    pub fn shape_count(&self) -> usize {
        self.layers.iter().map(|l| l.shapes.len()).sum()
    }

    /// Fails with [`Error::InvalidStyle`] if the background or any layer
    /// style cannot be written.
    pub fn validate(&self) -> Result<()> {
        if let Some(bg) = &self.background {
            parse_color("background", bg)?;
        }
        for layer in &self.layers {
            layer.style.validate()?;
        }
        Ok(())
    }

    /// Write the document out, validating styles first.
    pub fn render(&self) -> Result<String> {
        self.validate()?;

        let mut svg = String::new();
        // Writing into a String cannot fail.
        let _ = write!(
            svg,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w:.2}" height="{h:.2}" viewBox="0 0 {w:.2} {h:.2}">
"#,
            w = self.width,
            h = self.height
        );

        if let Some(title) = &self.title {
            let _ = writeln!(svg, "  <title>{}</title>", escape(title));
        }
        if let Some(bg) = &self.background {
            let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="{}"/>"#, bg);
        }

        for layer in &self.layers {
            write_layer(&mut svg, layer);
        }

        svg.push_str("</svg>\n");
        Ok(svg)
    }
}

fn write_layer(svg: &mut String, layer: &SvgLayer) {
    let style = &layer.style;
    let _ = writeln!(
        svg,
        r#"  <g id="{}" stroke="{}" stroke-width="{}" fill="none" opacity="{}" stroke-linecap="round" stroke-linejoin="round">"#,
        escape(&layer.name),
        style.stroke,
        style.stroke_width,
        style.opacity
    );

    svg.push_str(&shape_elements(&layer.shapes, &style.fill, 4));
    svg.push_str("  </g>\n");
}

/// One SVG element per shape, in order, each on its own line indented by
/// `indent` spaces. Polygons are filled with `fill`.
pub fn shape_elements(shapes: &[Shape], fill: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut out = String::new();
    for shape in shapes {
        match shape {
            Shape::Line(line) => {
                let _ = writeln!(
                    out,
                    r#"{}<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                    pad, line.x1, line.y1, line.x2, line.y2
                );
            }
            Shape::Curve(segments) => {
                if let Some(d) = curve_path_data(segments) {
                    let _ = writeln!(out, r#"{}<path d="{}"/>"#, pad, d);
                }
            }
            Shape::Polygon(points) => {
                let _ = writeln!(
                    out,
                    r#"{}<polygon points="{}" fill="{}"/>"#,
                    pad,
                    points_attr(points),
                    fill
                );
            }
        }
    }
    out
}

/// `M x,y C c1 c2 to ...` for a joined run of cubic segments.
fn curve_path_data(segments: &[CubicSegment]) -> Option<String> {
    let first = segments.first()?;
    let mut d = format!("M {:.2},{:.2}", first.from.x, first.from.y);
    for seg in segments {
        let _ = write!(
            d,
            " C {:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            seg.ctrl1.x, seg.ctrl1.y, seg.ctrl2.x, seg.ctrl2.y, seg.to.x, seg.to.y
        );
    }
    Some(d)
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape text for use in element content and attribute values.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Plotter output: individual `<line>` elements in one stroked group.
pub fn lines_to_svg(lines: &[Line], width: f64, height: f64, style: &Style) -> Result<String> {
    style.validate()?;

    let mut svg = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w:.2}" height="{h:.2}" viewBox="0 0 {w:.2} {h:.2}">
<g stroke="{}" stroke-width="{}" fill="none" stroke-linecap="round">
"#,
        style.stroke,
        style.stroke_width,
        w = width,
        h = height
    );

    for line in lines {
        let _ = writeln!(
            svg,
            "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\"/>",
            line.x1, line.y1, line.x2, line.y2
        );
    }

    svg.push_str("</g>\n</svg>\n");
    Ok(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Canvas, Surface};

    fn parses(svg: &str) -> usvg::Tree {
        usvg::Tree::from_str(svg, &usvg::Options::default()).expect("emitted SVG should parse")
    }

    fn sample_canvas() -> Canvas {
        let mut canvas = Canvas::new();
        canvas.fill_polygon(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 8.0)]);
        canvas.draw_line(1.0, 1.0, 9.0, 1.0);
        canvas.draw_curve_segment(&[
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 0.0),
        ]);
        canvas
    }

    #[test]
    fn default_style_is_valid() {
        assert!(Style::default().validate().is_ok());
    }

    #[test]
    fn fill_may_be_none_but_stroke_may_not() {
        let style = Style { fill: "none".into(), ..Style::default() };
        assert!(style.validate().is_ok());

        let style = Style { stroke: "none".into(), ..Style::default() };
        assert!(matches!(style.validate(), Err(Error::InvalidStyle(_))));
    }

    #[test]
    fn bad_colours_and_widths_are_rejected() {
        for style in [
            Style { stroke: "not-a-colour".into(), ..Style::default() },
            Style { fill: "#12".into(), ..Style::default() },
            Style { stroke_width: 0.0, ..Style::default() },
            Style { opacity: 1.5, ..Style::default() },
        ] {
            assert!(matches!(style.validate(), Err(Error::InvalidStyle(_))), "{:?}", style);
        }
    }

    #[test]
    fn shapes_are_written_in_draw_order() {
        let mut doc = SvgDocument::new(100.0, 100.0).with_background("#f0f0f0");
        doc.push_layer(SvgLayer::new("motif", Style::default(), sample_canvas().into_shapes()));
        let svg = doc.render().unwrap();

        let polygon = svg.find("<polygon").unwrap();
        let line = svg.find("<line").unwrap();
        let path = svg.find("<path").unwrap();
        assert!(polygon < line && line < path);
        assert!(svg.contains(r##"fill="#f0f0f0"/>"##));
        assert!(svg.contains("M 0.00,0.00 C"));
        parses(&svg);
    }

    #[test]
    fn title_is_escaped() {
        let doc = SvgDocument::new(10.0, 10.0).with_title("a <b> & c");
        let svg = doc.render().unwrap();
        assert!(svg.contains("<title>a &lt;b&gt; &amp; c</title>"));
        parses(&svg);
    }

    #[test]
    fn invalid_background_fails_render() {
        let doc = SvgDocument::new(10.0, 10.0).with_background("blurple");
        assert!(matches!(doc.render(), Err(Error::InvalidStyle(_))));
    }

    #[test]
    fn check_color_names_the_offending_value() {
        assert!(check_color("background", "#f0f0f0").is_ok());
        assert!(check_color("background", "navy").is_ok());
        match check_color("background", "blurple") {
            Err(Error::InvalidStyle(msg)) => assert!(msg.contains("background colour 'blurple'")),
            other => panic!("expected InvalidStyle, got {:?}", other),
        }
    }

    #[test]
    fn plot_output_is_one_line_per_segment() {
        let lines = sample_canvas().plot_lines(true);
        let svg = lines_to_svg(&lines, 100.0, 100.0, &Style::default()).unwrap();
        assert_eq!(svg.matches("<line").count(), lines.len());
        parses(&svg);
    }

    #[test]
    fn shape_count_sums_layers() {
        let mut doc = SvgDocument::new(10.0, 10.0);
        doc.push_layer(SvgLayer::new("a", Style::default(), sample_canvas().into_shapes()));
        doc.push_layer(SvgLayer::new("b", Style::default(), sample_canvas().into_shapes()));
        assert_eq!(doc.shape_count(), 6);
    }
}
