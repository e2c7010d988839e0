//! Motif recipes: declarative layer composition.
//!
//! Recipes are YAML files that stack tiled motifs. Each layer names a motif,
//! the region it covers and how it is stroked.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use wagara::{Canvas, Motif, Point, RegionSpec, Style, SvgDocument, SvgLayer, tile};

use super::common::{
    DEFAULT_BACKGROUND, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_COLUMNS,
    DEFAULT_PNG_SCALE, default_region, flag_number, flag_value, write_output,
};
use super::error::{CliError, CliResult};
use super::export::write_png;

/// A complete recipe defining a layered composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name/title
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Style applied to every layer unless the layer overrides it
    #[serde(default)]
    pub defaults: LayerStyle,

    /// Layers, rendered bottom to top
    pub layers: Vec<Layer>,
}

/// Canvas/output configuration, in user units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

fn default_width() -> f64 {
    DEFAULT_CANVAS_WIDTH
}

fn default_height() -> f64 {
    DEFAULT_CANVAS_HEIGHT
}

fn default_background() -> String {
    DEFAULT_BACKGROUND.to_string()
}

/// A single motif layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    /// Layer name (for identification)
    pub name: String,

    /// Motif name, as listed by `wagara motifs`
    pub motif: String,

    /// Region to tile; defaults to the standard region of the canvas
    #[serde(default)]
    pub region: Option<RegionConfig>,

    #[serde(default)]
    pub style: LayerStyle,

    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Tiling region for a layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionConfig {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,

    #[serde(default = "default_columns")]
    pub columns: u32,

    /// Pattern rotation (degrees)
    #[serde(default)]
    pub rotation: f64,
}

fn default_columns() -> u32 {
    DEFAULT_COLUMNS
}

impl RegionConfig {
    pub fn to_spec(&self) -> RegionSpec {
        RegionSpec::new(
            Point::new(self.x, self.y),
            self.width,
            self.height,
            self.columns,
            self.rotation.to_radians(),
        )
    }
}

/// Style properties for a layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayerStyle {
    #[serde(default)]
    pub stroke: Option<String>,

    #[serde(default)]
    pub stroke_width: Option<f64>,

    /// Fill for the filled motifs
    #[serde(default)]
    pub fill: Option<String>,

    /// Opacity (0.0 to 1.0)
    #[serde(default)]
    pub opacity: Option<f64>,
}

impl LayerStyle {
    /// Merge this style with defaults, preferring self's values.
    pub fn merge_with(&self, defaults: &LayerStyle) -> LayerStyle {
        LayerStyle {
            stroke: self.stroke.clone().or_else(|| defaults.stroke.clone()),
            stroke_width: self.stroke_width.or(defaults.stroke_width),
            fill: self.fill.clone().or_else(|| defaults.fill.clone()),
            opacity: self.opacity.or(defaults.opacity),
        }
    }

    /// Fill the gaps from the library defaults.
    pub fn resolve(&self) -> Style {
        let base = Style::default();
        Style {
            stroke: self.stroke.clone().unwrap_or(base.stroke),
            stroke_width: self.stroke_width.unwrap_or(base.stroke_width),
            fill: self.fill.clone().unwrap_or(base.fill),
            opacity: self.opacity.unwrap_or(base.opacity),
        }
    }
}

impl Recipe {
    /// Load a recipe from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> CliResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CliError::io(path.display().to_string(), e))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> CliResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Tile every enabled layer and collect the result as a document.
    ///
    /// Layers naming an unknown motif are skipped with a warning; a region
    /// that cannot be tiled fails the whole recipe.
    pub fn render(&self) -> CliResult<SvgDocument> {
        let mut doc = SvgDocument::new(self.canvas.width, self.canvas.height)
            .with_background(self.canvas.background.clone())
            .with_title(self.name.clone());

        for layer in &self.layers {
            if !layer.enabled {
                log::debug!("layer '{}' disabled", layer.name);
                continue;
            }

            let motif = match Motif::from_name(&layer.motif) {
                Some(m) => m,
                None => {
                    log::warn!("Unknown motif '{}', skipping layer '{}'", layer.motif, layer.name);
                    continue;
                }
            };

            let region = match &layer.region {
                Some(r) => r.to_spec(),
                None => default_region(self.canvas.width, self.canvas.height),
            };

            let mut canvas = Canvas::new();
            tile(&mut motif.brush(&mut canvas), &region)?;

            let style = layer.style.merge_with(&self.defaults).resolve();
            doc.push_layer(SvgLayer::new(layer.name.clone(), style, canvas.into_shapes()));
        }

        Ok(doc)
    }
}

/// Execute the recipe command.
pub fn cmd_recipe(args: &[String]) -> CliResult<()> {
    if args.is_empty() {
        print_usage();
        return Ok(());
    }

    let mut recipe_path: Option<String> = None;
    let mut output_path = "output.svg".to_string();
    let mut png_output: Option<String> = None;
    let mut png_scale = DEFAULT_PNG_SCALE;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => output_path = flag_value(args, &mut i, "--output")?.to_string(),
            "--png" => png_output = Some(flag_value(args, &mut i, "--png")?.to_string()),
            "--png-scale" => png_scale = flag_number(args, &mut i, "--png-scale")?,
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "--example" => {
                print_example();
                return Ok(());
            }
            arg if !arg.starts_with('-') => {
                recipe_path = Some(arg.to_string());
            }
            other => return Err(CliError::usage(format!("unknown option '{}'", other))),
        }
        i += 1;
    }

    let recipe_path = recipe_path.ok_or_else(|| CliError::usage("no recipe file specified"))?;

    log::info!("Loading recipe: {}", recipe_path);
    let recipe = Recipe::load(&recipe_path)?;

    log::info!(
        "Recipe: {} ({}x{}, {} layers)",
        recipe.name,
        recipe.canvas.width,
        recipe.canvas.height,
        recipe.layers.len()
    );

    let doc = recipe.render()?;
    log::info!("Generated {} shapes across {} layers", doc.shape_count(), doc.layers.len());

    let svg = doc.render()?;
    write_output(&output_path, &svg)?;

    if let Some(png_path) = png_output {
        write_png(&svg, &png_path, png_scale, doc.width, doc.height)?;
    }
    Ok(())
}

fn print_usage() {
    eprintln!("wagara recipe - Render layered motif compositions from YAML");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("    wagara recipe <recipe.yaml> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("    -o, --output <file>    Output SVG file (default: output.svg)");
    eprintln!("    --png <file>           Also generate PNG output");
    eprintln!("    --png-scale <n>        PNG scale factor (default: 1.0)");
    eprintln!("    --example              Print an example recipe YAML");
    eprintln!("    -h, --help             Show this help");
    eprintln!();
    eprintln!("EXAMPLE:");
    eprintln!("    wagara recipe my_design.yaml -o my_design.svg");
}

pub const EXAMPLE_RECIPE: &str = r##"# Example wagara recipe
name: "Asanoha over kikkou"
description: "Two motifs sharing one canvas"

canvas:
  width: 600
  height: 600
  background: "#f0f0f0"

defaults:
  stroke: "#333333"
  stroke_width: 1.5

layers:
  - name: ground
    motif: bentenkikkou
    region: { x: 0, y: 0, width: 600, height: 600, columns: 4 }
    style:
      stroke: "#888888"
      fill: "#f0f0f0"

  - name: accent
    motif: asanoha
    region: { x: 150, y: 150, width: 300, height: 300, columns: 2, rotation: 30 }
    style:
      stroke: "#1d3557"
      stroke_width: 2.0
      opacity: 0.8
"##;

fn print_example() {
    print!("{}", EXAMPLE_RECIPE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_recipe_parses_and_renders() {
        let recipe = Recipe::from_yaml(EXAMPLE_RECIPE).unwrap();
        assert_eq!(recipe.layers.len(), 2);
        assert_eq!(recipe.layers[1].region.as_ref().unwrap().rotation, 30.0);

        let doc = recipe.render().unwrap();
        assert_eq!(doc.layers.len(), 2);
        assert_eq!(doc.layers[1].style.stroke, "#1d3557");
        assert_eq!(doc.layers[1].style.opacity, 0.8);
        assert!(doc.render().is_ok());
    }

    #[test]
    fn layer_style_falls_back_to_defaults() {
        let layer = LayerStyle { stroke: Some("red".into()), ..LayerStyle::default() };
        let defaults = LayerStyle {
            stroke: Some("blue".into()),
            stroke_width: Some(3.0),
            ..LayerStyle::default()
        };
        let style = layer.merge_with(&defaults).resolve();
        assert_eq!(style.stroke, "red");
        assert_eq!(style.stroke_width, 3.0);
        assert_eq!(style.fill, Style::default().fill);
    }

    #[test]
    fn unknown_motif_and_disabled_layers_are_skipped() {
        let recipe = Recipe::from_yaml(
            r#"
name: skips
layers:
  - name: a
    motif: seigaiha
  - name: b
    motif: sakura
    enabled: false
  - name: c
    motif: yaeasa
"#,
        )
        .unwrap();
        let doc = recipe.render().unwrap();
        assert_eq!(doc.layers.len(), 1);
        assert_eq!(doc.layers[0].name, "c");
        assert_eq!(doc.width, DEFAULT_CANVAS_WIDTH);
    }

    #[test]
    fn bad_region_fails_recipe() {
        let recipe = Recipe::from_yaml(
            r#"
name: broken
layers:
  - name: a
    motif: asanoha
    region: { x: 0, y: 0, width: 100, height: 100, columns: 0 }
"#,
        )
        .unwrap();
        assert!(matches!(
            recipe.render(),
            Err(CliError::Core(wagara::Error::PreconditionViolation(_)))
        ));
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        assert!(matches!(Recipe::from_yaml("name: [unclosed"), Err(CliError::Yaml(_))));
    }
}
