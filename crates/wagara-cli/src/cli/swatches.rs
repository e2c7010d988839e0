//! Generate a motif swatch sheet for documentation and reference.
//!
//! Every catalog motif is tiled into its own square, clipped to the square
//! and labelled underneath.

use wagara::svg::{check_color, escape, shape_elements};
use wagara::{Canvas, Motif, Point, RegionSpec, Style, tile};

use super::common::{
    DEFAULT_BACKGROUND, DEFAULT_PNG_SCALE, DEFAULT_STROKE_WIDTH, flag_number, flag_value,
    parse_style_flag, write_output,
};
use super::error::{CliError, CliResult};
use super::export::write_png;

/// Swatch layout (user units)
const SWATCH_SIZE: f64 = 160.0;
const LABEL_HEIGHT: f64 = 16.0; // Space for text below swatch
const GUTTER: f64 = 12.0; // Space between swatches
const MARGIN: f64 = 24.0;

const COLUMNS: usize = 4;

const DEFAULT_SWATCH_COLUMNS: u32 = 2;

/// One colour per motif in colorful mode
const COLORS: &[&str] = &[
    "#E63946", // Red
    "#2A9D8F", // Teal
    "#264653", // Dark blue-gray
    "#8338EC", // Purple
    "#FF006E", // Hot pink
    "#3A86FF", // Bright blue
    "#FB5607", // Orange
    "#7209B7", // Deep purple
    "#118AB2", // Ocean blue
    "#6A4C93", // Plum
    "#90BE6D", // Lime green
];

/// Swatch sheet settings.
#[derive(Debug, Clone)]
pub struct SwatchOptions {
    pub columns: u32,
    pub colorful: bool,
    pub background: String,
    pub style: Style,
}

impl Default for SwatchOptions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_SWATCH_COLUMNS,
            colorful: false,
            background: DEFAULT_BACKGROUND.to_string(),
            style: Style { stroke_width: DEFAULT_STROKE_WIDTH, ..Style::default() },
        }
    }
}

/// Page size for `count` swatches.
pub fn page_size(count: usize) -> (f64, f64) {
    let rows = count.div_ceil(COLUMNS).max(1);
    let width = 2.0 * MARGIN + COLUMNS as f64 * SWATCH_SIZE + (COLUMNS - 1) as f64 * GUTTER;
    let height = 2.0 * MARGIN
        + rows as f64 * (SWATCH_SIZE + LABEL_HEIGHT)
        + (rows - 1) as f64 * GUTTER;
    (width, height)
}

/// Build the swatch sheet SVG for `motifs`.
pub fn swatch_sheet(motifs: &[Motif], opts: &SwatchOptions) -> CliResult<String> {
    opts.style.validate()?;
    check_color("background", &opts.background)?;
    let (page_width, page_height) = page_size(motifs.len());
    let cell_width = SWATCH_SIZE + GUTTER;
    let cell_height = SWATCH_SIZE + LABEL_HEIGHT + GUTTER;

    let mut svg = format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{:.2}" height="{:.2}"
     viewBox="0 0 {:.2} {:.2}">
  <title>Motif Swatches - wagara</title>
  <desc>{} motifs, {} hexagon columns per swatch</desc>
  <rect width="100%" height="100%" fill="white"/>
"##,
        page_width, page_height, page_width, page_height, motifs.len(), opts.columns
    );

    for (idx, motif) in motifs.iter().enumerate() {
        let x = MARGIN + (idx % COLUMNS) as f64 * cell_width;
        let y = MARGIN + (idx / COLUMNS) as f64 * cell_height;

        let region = RegionSpec::new(Point::new(x, y), SWATCH_SIZE, SWATCH_SIZE, opts.columns, 0.0);
        let mut canvas = Canvas::new();
        tile(&mut motif.brush(&mut canvas), &region)?;

        let stroke = if opts.colorful {
            COLORS[idx % COLORS.len()]
        } else {
            opts.style.stroke.as_str()
        };

        svg.push_str(&format!(
            r##"  <clipPath id="clip-{name}">
    <rect x="{x:.2}" y="{y:.2}" width="{s:.2}" height="{s:.2}"/>
  </clipPath>
  <g id="swatch-{name}">
    <rect x="{x:.2}" y="{y:.2}" width="{s:.2}" height="{s:.2}" fill="{bg}"/>
    <g clip-path="url(#clip-{name})" stroke="{stroke}" stroke-width="{sw}" fill="none" stroke-linecap="round" stroke-linejoin="round">
"##,
            name = motif.name(),
            x = x,
            y = y,
            s = SWATCH_SIZE,
            bg = escape(&opts.background),
            stroke = stroke,
            sw = opts.style.stroke_width,
        ));
        svg.push_str(&shape_elements(canvas.shapes(), &opts.style.fill, 6));
        svg.push_str("    </g>\n");

        // Border on top so overshooting motifs don't cover it
        svg.push_str(&format!(
            r##"    <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="#cccccc" stroke-width="0.5"/>
    <text x="{:.2}" y="{:.2}" font-family="system-ui, -apple-system, sans-serif" font-size="11" text-anchor="middle" fill="#333333">{}</text>
  </g>
"##,
            x,
            y,
            SWATCH_SIZE,
            SWATCH_SIZE,
            x + SWATCH_SIZE / 2.0,
            y + SWATCH_SIZE + LABEL_HEIGHT - 4.0,
            motif.name()
        ));

        log::debug!("swatch {}: {} shapes", motif.name(), canvas.shapes().len());
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Execute the swatches command.
pub fn cmd_swatches(args: &[String]) -> CliResult<()> {
    let mut output_path = "motif_swatches.svg".to_string();
    let mut png_output: Option<String> = None;
    let mut png_scale = DEFAULT_PNG_SCALE;
    let mut opts = SwatchOptions::default();

    let mut i = 0;
    while i < args.len() {
        if parse_style_flag(&mut opts.style, args, &mut i)? {
            i += 1;
            continue;
        }
        match args[i].as_str() {
            "-o" | "--output" => output_path = flag_value(args, &mut i, "--output")?.to_string(),
            "-c" | "--columns" => opts.columns = flag_number(args, &mut i, "--columns")?,
            "--background" => opts.background = flag_value(args, &mut i, "--background")?.to_string(),
            "--colorful" => opts.colorful = true,
            "--png" => png_output = Some(flag_value(args, &mut i, "--png")?.to_string()),
            "--png-scale" => png_scale = flag_number(args, &mut i, "--png-scale")?,
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => return Err(CliError::usage(format!("unknown option '{}'", other))),
        }
        i += 1;
    }

    let motifs = Motif::all();
    let (page_width, page_height) = page_size(motifs.len());
    log::info!(
        "Generating {} swatches ({} columns each) on a {:.0}x{:.0} page",
        motifs.len(),
        opts.columns,
        page_width,
        page_height
    );

    let svg = swatch_sheet(motifs, &opts)?;
    write_output(&output_path, &svg)?;

    if let Some(png_path) = png_output {
        write_png(&svg, &png_path, png_scale, page_width, page_height)?;
    }
    Ok(())
}

/// Print usage information.
pub fn print_usage() {
    eprintln!("wagara swatches - Generate a motif swatch sheet");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    wagara swatches [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -o, --output <file>    Output SVG file (default: motif_swatches.svg)");
    eprintln!("    -c, --columns <n>      Hexagon columns per swatch (default: 2)");
    eprintln!("    --colorful             Use vibrant colors (one per motif)");
    eprintln!("    --stroke <color>       Line color (default: black)");
    eprintln!("    -w, --stroke-width <n> Line width (default: 1.5)");
    eprintln!("    --fill <color>         Fill for filled motifs (default: #f0f0f0)");
    eprintln!("    --background <color>   Swatch background (default: #f0f0f0)");
    eprintln!("    --png <file>           Also generate PNG output");
    eprintln!("    --png-scale <n>        PNG scale factor (default: 1.0)");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    wagara swatches --colorful -o swatches.svg --png swatches.png");
}
