//! Common utilities shared across CLI commands.

use std::fs;
use std::str::FromStr;

use serde::Serialize;
use wagara::{Canvas, Line, Point, RegionSpec, Style, SvgDocument, SvgLayer, lines_to_svg};

use super::error::{CliError, CliResult};
use super::export::write_png;

/// Canvas defaults: 600×600 in 240 grey.
pub const DEFAULT_CANVAS_WIDTH: f64 = 600.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;
pub const DEFAULT_BACKGROUND: &str = "#f0f0f0";
pub const DEFAULT_COLUMNS: u32 = 2;
pub const DEFAULT_STROKE_WIDTH: f64 = 1.5;
pub const DEFAULT_PNG_SCALE: f64 = 1.0;

/// Take the value following the flag at `args[*i]`, advancing `i` onto it.
pub fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> CliResult<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| CliError::usage(format!("{} needs a value", flag)))
}

/// Parse a flag value, naming the flag if it is malformed.
pub fn parse_number<T: FromStr>(flag: &str, value: &str) -> CliResult<T> {
    value
        .parse()
        .map_err(|_| CliError::usage(format!("{}: '{}' is not a valid number", flag, value)))
}

pub fn flag_number<T: FromStr>(args: &[String], i: &mut usize, flag: &str) -> CliResult<T> {
    let value = flag_value(args, i, flag)?;
    parse_number(flag, value)
}

/// The default tiling region: offset a fifth across and two
/// sevenths down, half the canvas in each direction.
pub fn default_region(width: f64, height: f64) -> RegionSpec {
    RegionSpec::new(
        Point::new(width / 5.0, height * (2.0 / 7.0)),
        width / 2.0,
        height / 2.0,
        DEFAULT_COLUMNS,
        0.0,
    )
}

/// `<unix-millis>_<tag>.<extension>`, for runs without `-o`.
pub fn timestamped_name(tag: &str, extension: &str) -> String {
    format!("{}_{}.{}", chrono::Utc::now().timestamp_millis(), tag, extension)
}

/// Write `content` to `path`, or to stdout when `path` is `-`.
pub fn write_output(path: &str, content: &str) -> CliResult<()> {
    if path == "-" {
        print!("{}", content);
        return Ok(());
    }
    fs::write(path, content).map_err(|e| CliError::io(path, e))?;
    log::info!("Wrote: {}", path);
    Ok(())
}

/// Try to consume one of the style flags at `args[*i]`.
///
/// Returns `Ok(false)` when the flag is not a style flag.
pub fn parse_style_flag(style: &mut Style, args: &[String], i: &mut usize) -> CliResult<bool> {
    match args[*i].as_str() {
        "--stroke" => style.stroke = flag_value(args, i, "--stroke")?.to_string(),
        "-w" | "--stroke-width" => style.stroke_width = flag_number(args, i, "--stroke-width")?,
        "--fill" => style.fill = flag_value(args, i, "--fill")?.to_string(),
        "--opacity" => style.opacity = flag_number(args, i, "--opacity")?,
        _ => return Ok(false),
    }
    Ok(true)
}

/// Where and how a rendering is written.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub output: Option<String>,
    pub png: Option<String>,
    pub png_scale: f64,
    /// Flattened, deduplicated `<line>` output for plotters.
    pub plot: bool,
    pub json: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            output: None,
            png: None,
            png_scale: DEFAULT_PNG_SCALE,
            plot: false,
            json: false,
        }
    }
}

impl OutputOptions {
    /// Try to consume one of the output flags at `args[*i]`.
    pub fn parse_flag(&mut self, args: &[String], i: &mut usize) -> CliResult<bool> {
        match args[*i].as_str() {
            "-o" | "--output" => self.output = Some(flag_value(args, i, "--output")?.to_string()),
            "--png" => self.png = Some(flag_value(args, i, "--png")?.to_string()),
            "--png-scale" => self.png_scale = flag_number(args, i, "--png-scale")?,
            "--plot" => self.plot = true,
            "--json" => self.json = true,
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// JSON replaces the SVG, so the SVG-only flags cannot ride along.
    pub fn check(&self) -> CliResult<()> {
        if self.json && (self.png.is_some() || self.plot) {
            return Err(CliError::usage("--json cannot be combined with --png or --plot"));
        }
        Ok(())
    }
}

/// A line in JSON output format.
#[derive(Debug, Serialize)]
pub struct JsonLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl From<&Line> for JsonLine {
    fn from(line: &Line) -> Self {
        Self { x1: line.x1, y1: line.y1, x2: line.x2, y2: line.y2 }
    }
}

/// JSON output: the flattened plot lines of one rendering.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub motif: String,
    pub width: f64,
    pub height: f64,
    /// Motif renderer calls made.
    pub cells: usize,
    pub lines: Vec<JsonLine>,
}

/// One motif drawn onto a canvas, ready to be written.
pub struct Rendering<'a> {
    pub name: &'a str,
    pub width: f64,
    pub height: f64,
    pub background: &'a str,
    pub style: &'a Style,
    pub canvas: &'a Canvas,
    pub cells: usize,
}

impl Rendering<'_> {
    pub fn to_svg(&self, plot: bool) -> CliResult<String> {
        if plot {
            let lines = self.canvas.plot_lines(true);
            return Ok(lines_to_svg(&lines, self.width, self.height, self.style)?);
        }

        let mut doc = SvgDocument::new(self.width, self.height)
            .with_background(self.background)
            .with_title(format!("{} - wagara", self.name));
        doc.push_layer(SvgLayer::new(self.name, self.style.clone(), self.canvas.shapes().to_vec()));
        Ok(doc.render()?)
    }

    pub fn to_json(&self) -> CliResult<String> {
        let output = JsonOutput {
            motif: self.name.to_string(),
            width: self.width,
            height: self.height,
            cells: self.cells,
            lines: self.canvas.plot_lines(true).iter().map(JsonLine::from).collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    /// Write in whichever format `opts` asks for.
    pub fn emit(&self, opts: &OutputOptions) -> CliResult<()> {
        opts.check()?;
        if opts.json {
            let json = self.to_json()?;
            let path = opts.output.as_deref().unwrap_or("-");
            return write_output(path, &json);
        }

        let svg = self.to_svg(opts.plot)?;
        let path = opts
            .output
            .clone()
            .unwrap_or_else(|| timestamped_name(self.name, "svg"));
        write_output(&path, &svg)?;

        if let Some(png_path) = &opts.png {
            write_png(&svg, png_path, opts.png_scale, self.width, self.height)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wagara::{Motif, tile};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn default_region_sits_inside_canvas() {
        let region = default_region(600.0, 600.0);
        assert_eq!(region.origin, Point::new(120.0, 600.0 * (2.0 / 7.0)));
        assert_eq!(region.width, 300.0);
        assert_eq!(region.height, 300.0);
        assert_eq!(region.columns, 2);
    }

    #[test]
    fn flag_value_reports_missing_values() {
        let argv = args(&["--columns"]);
        let mut i = 0;
        let err = flag_value(&argv, &mut i, "--columns").unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn flag_number_rejects_garbage() {
        let argv = args(&["-c", "many"]);
        let mut i = 0;
        assert!(flag_number::<u32>(&argv, &mut i, "--columns").is_err());
    }

    #[test]
    fn style_and_output_flags_are_consumed() {
        let argv = args(&["--stroke", "navy", "--plot", "-o", "out.svg", "--bogus"]);
        let mut style = Style::default();
        let mut opts = OutputOptions::default();
        let mut leftovers = Vec::new();

        let mut i = 0;
        while i < argv.len() {
            if !parse_style_flag(&mut style, &argv, &mut i).unwrap()
                && !opts.parse_flag(&argv, &mut i).unwrap()
            {
                leftovers.push(argv[i].clone());
            }
            i += 1;
        }

        assert_eq!(style.stroke, "navy");
        assert!(opts.plot);
        assert_eq!(opts.output.as_deref(), Some("out.svg"));
        assert_eq!(leftovers, vec!["--bogus".to_string()]);
    }

    #[test]
    fn timestamped_names_end_with_tag() {
        let name = timestamped_name("asanoha", "svg");
        let (millis, rest) = name.split_once('_').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(rest, "asanoha.svg");
    }

    #[test]
    fn json_rejects_svg_only_flags() {
        let with_png = OutputOptions {
            json: true,
            png: Some("out.png".into()),
            ..OutputOptions::default()
        };
        assert!(with_png.check().unwrap_err().is_usage());

        let with_plot = OutputOptions { json: true, plot: true, ..OutputOptions::default() };
        assert!(with_plot.check().unwrap_err().is_usage());

        let canvas = Canvas::new();
        let style = Style::default();
        let rendering = Rendering {
            name: "asanoha",
            width: 10.0,
            height: 10.0,
            background: DEFAULT_BACKGROUND,
            style: &style,
            canvas: &canvas,
            cells: 0,
        };
        assert!(rendering.emit(&with_png).unwrap_err().is_usage());

        let plain = OutputOptions { json: true, ..OutputOptions::default() };
        assert!(plain.check().is_ok());
    }

    #[test]
    fn json_output_lists_plot_lines() {
        let mut canvas = Canvas::new();
        let region = default_region(600.0, 600.0);
        tile(&mut Motif::Asanoha.brush(&mut canvas), &region).unwrap();

        let style = Style::default();
        let rendering = Rendering {
            name: "asanoha",
            width: 600.0,
            height: 600.0,
            background: DEFAULT_BACKGROUND,
            style: &style,
            canvas: &canvas,
            cells: wagara::cell_count(&region).unwrap(),
        };
        let json: serde_json::Value = serde_json::from_str(&rendering.to_json().unwrap()).unwrap();
        assert_eq!(json["motif"], "asanoha");
        assert_eq!(json["cells"], 54);
        assert!(!json["lines"].as_array().unwrap().is_empty());
    }
}
