//! `render` and `hexagon`: draw one motif and write it out.

use wagara::{Canvas, Motif, Point, RegionSpec, Style, cell_count, draw_hexagon, tile};

use super::common::{
    DEFAULT_BACKGROUND, DEFAULT_CANVAS_HEIGHT, DEFAULT_COLUMNS, DEFAULT_CANVAS_WIDTH, DEFAULT_STROKE_WIDTH,
    OutputOptions, Rendering, default_region, flag_number, flag_value, parse_style_flag,
};
use super::error::{CliError, CliResult};

/// Radius of the lone hexagon drawn by `hexagon`.
const DEFAULT_HEXAGON_RADIUS: f64 = 50.0;

/// Flags both commands understand.
struct SceneArgs {
    motif: Option<String>,
    width: f64,
    height: f64,
    background: String,
    style: Style,
    output: OutputOptions,
}

impl SceneArgs {
    fn new() -> Self {
        Self {
            motif: None,
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            background: DEFAULT_BACKGROUND.to_string(),
            style: Style { stroke_width: DEFAULT_STROKE_WIDTH, ..Style::default() },
            output: OutputOptions::default(),
        }
    }

    fn parse_flag(&mut self, args: &[String], i: &mut usize) -> CliResult<bool> {
        if parse_style_flag(&mut self.style, args, i)? || self.output.parse_flag(args, i)? {
            return Ok(true);
        }
        match args[*i].as_str() {
            "--canvas" => {
                self.width = flag_number(args, i, "--canvas")?;
                self.height = flag_number(args, i, "--canvas")?;
            }
            "--background" => self.background = flag_value(args, i, "--background")?.to_string(),
            arg if !arg.starts_with('-') => {
                if let Some(first) = &self.motif {
                    return Err(CliError::usage(format!(
                        "only one motif per run, got '{}' and '{}'",
                        first, arg
                    )));
                }
                self.motif = Some(arg.to_string());
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn motif(&self) -> CliResult<Motif> {
        let name = self
            .motif
            .as_deref()
            .ok_or_else(|| CliError::usage("no motif specified (see 'wagara motifs')"))?;
        Ok(Motif::lookup(name)?)
    }

    fn check_outputs(&self) -> CliResult<()> {
        self.output.check()?;
        if self.width > 0.0 && self.height > 0.0 {
            Ok(())
        } else {
            Err(CliError::usage(format!(
                "--canvas must be positive, got {}x{}",
                self.width, self.height
            )))
        }
    }

    fn emit(&self, motif: Motif, canvas: &Canvas, cells: usize) -> CliResult<()> {
        Rendering {
            name: motif.name(),
            width: self.width,
            height: self.height,
            background: &self.background,
            style: &self.style,
            canvas,
            cells,
        }
        .emit(&self.output)
    }
}

/// Execute the render command: tile one motif across a region.
pub fn cmd_render(args: &[String]) -> CliResult<()> {
    let mut scene = SceneArgs::new();
    let mut region: Option<(f64, f64, f64, f64)> = None;
    let mut columns: Option<u32> = None;
    let mut rotation_deg = 0.0_f64;

    let mut i = 0;
    while i < args.len() {
        if !scene.parse_flag(args, &mut i)? {
            match args[i].as_str() {
                "--region" => {
                    let x = flag_number(args, &mut i, "--region")?;
                    let y = flag_number(args, &mut i, "--region")?;
                    let w = flag_number(args, &mut i, "--region")?;
                    let h = flag_number(args, &mut i, "--region")?;
                    region = Some((x, y, w, h));
                }
                "-c" | "--columns" => columns = Some(flag_number(args, &mut i, "--columns")?),
                "-r" | "--rotation" => rotation_deg = flag_number(args, &mut i, "--rotation")?,
                "-h" | "--help" => {
                    print_render_usage();
                    return Ok(());
                }
                other => return Err(CliError::usage(format!("unknown option '{}'", other))),
            }
        }
        i += 1;
    }

    let motif = scene.motif()?;
    scene.check_outputs()?;

    let mut spec = match region {
        Some((x, y, w, h)) => RegionSpec::new(Point::new(x, y), w, h, DEFAULT_COLUMNS, 0.0),
        None => default_region(scene.width, scene.height),
    };
    if let Some(columns) = columns {
        spec.columns = columns;
    }
    spec.rotation = rotation_deg.to_radians();

    let mut canvas = Canvas::new();
    tile(&mut motif.brush(&mut canvas), &spec)?;
    let cells = cell_count(&spec)?;

    log::info!(
        "Tiled {} over {:.0}x{:.0} at ({:.0}, {:.0}): {} cells, {} shapes",
        motif.name(),
        spec.width,
        spec.height,
        spec.origin.x,
        spec.origin.y,
        cells,
        canvas.shapes().len()
    );

    scene.emit(motif, &canvas, cells)
}

/// Execute the hexagon command: one hexagon cell centred on the canvas.
pub fn cmd_hexagon(args: &[String]) -> CliResult<()> {
    let mut scene = SceneArgs::new();
    let mut radius = DEFAULT_HEXAGON_RADIUS;
    let mut rotation_deg = 0.0_f64;

    let mut i = 0;
    while i < args.len() {
        if !scene.parse_flag(args, &mut i)? {
            match args[i].as_str() {
                "--radius" => radius = flag_number(args, &mut i, "--radius")?,
                "-r" | "--rotation" => rotation_deg = flag_number(args, &mut i, "--rotation")?,
                "-h" | "--help" => {
                    print_hexagon_usage();
                    return Ok(());
                }
                other => return Err(CliError::usage(format!("unknown option '{}'", other))),
            }
        }
        i += 1;
    }

    let motif = scene.motif()?;
    scene.check_outputs()?;

    let center = Point::new(scene.width / 2.0, scene.height / 2.0);
    let mut canvas = Canvas::new();
    draw_hexagon(&mut motif.brush(&mut canvas), center, radius, rotation_deg.to_radians())?;

    log::info!("Drew one {} hexagon, radius {}", motif.name(), radius);
    scene.emit(motif, &canvas, 6)
}

fn print_shared_options() {
    eprintln!("    -o, --output <file>     Output file (default: <millis>_<motif>.svg, - for stdout)");
    eprintln!("    --canvas <w> <h>        Canvas size (default: 600 600)");
    eprintln!("    --background <color>    Background colour (default: #f0f0f0)");
    eprintln!("    --stroke <color>        Line colour (default: black)");
    eprintln!("    -w, --stroke-width <n>  Line width (default: 1.5)");
    eprintln!("    --fill <color>          Fill for filled motifs (default: #f0f0f0)");
    eprintln!("    --opacity <n>           Layer opacity, 0-1 (default: 1)");
    eprintln!("    --plot                  Flattened, deduplicated <line> output");
    eprintln!("    --json                  Plot lines as JSON (default: stdout)");
    eprintln!("    --png <file>            Also generate PNG output");
    eprintln!("    --png-scale <n>         PNG scale factor (default: 1.0)");
    eprintln!("    -h, --help              Show this help");
}

pub fn print_render_usage() {
    eprintln!("wagara render - Tile a motif across a region");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    wagara render <motif> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    --region <x> <y> <w> <h> Region to tile (default: w/5 h*2/7 w/2 h/2)");
    eprintln!("    -c, --columns <n>       Hexagon columns across the region (default: 2)");
    eprintln!("    -r, --rotation <deg>    Rotate the pattern about the region origin");
    print_shared_options();
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("    wagara render asanoha -o asanoha.svg");
    eprintln!("    wagara render sakura -c 4 -r 15 --png sakura.png");
}

pub fn print_hexagon_usage() {
    eprintln!("wagara hexagon - Draw a single hexagon cell");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    wagara hexagon <motif> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    --radius <n>            Hexagon radius (default: 50)");
    eprintln!("    -r, --rotation <deg>    Hexagon rotation");
    print_shared_options();
}
