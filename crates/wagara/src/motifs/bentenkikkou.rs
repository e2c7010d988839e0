//! Bentenkikkou (Benten's tortoise shell): a filled triangle crossed by
//! double bars at each corner, with a smaller filled triangle laid on top.
//!
//! The fills are the paper colour, so later shapes hide earlier strokes.
//! Draw order matters here.

use super::util::{corners, cross_points, line, prev};
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BentenkikkouConfig {
    /// Size of the inner triangle relative to the outer one.
    pub inner: f64,
    /// Offset of each cross bar along the edges.
    pub cross: f64,
}

impl Default for BentenkikkouConfig {
    fn default() -> Self {
        Self { inner: 0.7, cross: 0.125 }
    }
}

pub fn draw_bentenkikkou(surface: &mut dyn Surface, radius: f64, config: &BentenkikkouConfig) {
    let points = corners(radius);
    let inner_points = corners(radius * config.inner);
    let bars = cross_points(&points, config.cross);

    surface.fill_polygon(&points);

    for i in 0..3 {
        line(surface, bars[i][0], bars[prev(i)][3]);
        line(surface, bars[i][1], bars[prev(i)][2]);
    }

    surface.fill_polygon(&inner_points);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Canvas, Shape};

    #[test]
    fn fills_sandwich_the_cross_bars() {
        let mut canvas = Canvas::new();
        draw_bentenkikkou(&mut canvas, 10.0, &BentenkikkouConfig::default());
        let shapes = canvas.shapes();
        assert_eq!(shapes.len(), 8);
        assert!(matches!(shapes.first(), Some(Shape::Polygon(_))));
        assert!(matches!(shapes.last(), Some(Shape::Polygon(_))));
        assert_eq!(shapes.iter().filter(|s| matches!(s, Shape::Line(_))).count(), 6);
    }
}
