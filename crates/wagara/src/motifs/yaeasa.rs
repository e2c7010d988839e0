//! Yaeasa (double hemp): each edge gets a kite of strokes meeting at a
//! point pulled in from its midpoint, plus a stroke to the far corner.

use super::util::{corners, intersections, line, next, prev};
use crate::surface::Surface;

/// Shared by the asanoha variants built on pulled-in edge midpoints.
///
/// `inner_ratio` runs from 0 (on the edge) to 1 (at the centre).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerRatioConfig {
    pub inner_ratio: f64,
}

impl Default for InnerRatioConfig {
    fn default() -> Self {
        Self { inner_ratio: 0.5 }
    }
}

pub fn draw_yaeasa(surface: &mut dyn Surface, radius: f64, config: &InnerRatioConfig) {
    let points = corners(radius);
    let meets = intersections(&points, config.inner_ratio);

    for i in 0..3 {
        line(surface, points[i], points[next(i)]);
        line(surface, points[i], meets[i]);
        line(surface, points[next(i)], meets[i]);
        line(surface, meets[i], points[prev(i)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Canvas;

    #[test]
    fn draws_four_lines_per_edge() {
        let mut canvas = Canvas::new();
        draw_yaeasa(&mut canvas, 10.0, &InnerRatioConfig::default());
        assert_eq!(canvas.shapes().len(), 12);
    }
}
