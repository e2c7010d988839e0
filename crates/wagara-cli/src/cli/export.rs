//! PNG export: rasterise a rendered SVG document with resvg.

use resvg::usvg;
use tiny_skia::Pixmap;

use super::error::{CliError, CliResult};

/// Rasterise `svg_content` at `scale` and save it to `png_path`.
///
/// `width`/`height` are the document size in user units; the pixmap is
/// `width * scale` by `height * scale` pixels.
pub fn write_png(svg_content: &str, png_path: &str, scale: f64, width: f64, height: f64) -> CliResult<()> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(CliError::usage(format!("--png-scale must be positive, got {}", scale)));
    }

    log::debug!("rasterising at {}x scale", scale);

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options)
        .map_err(|e| CliError::Png(e.to_string()))?;

    let pixmap_width = (width * scale).ceil() as u32;
    let pixmap_height = (height * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(pixmap_width, pixmap_height).ok_or_else(|| {
        CliError::Png(format!("could not create a {}x{} pixmap", pixmap_width, pixmap_height))
    })?;

    // Fill with white background
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png(png_path)
        .map_err(|e| CliError::Png(format!("{}: {}", png_path, e)))?;
    log::info!("Wrote: {} ({}x{})", png_path, pixmap_width, pixmap_height);
    Ok(())
}
