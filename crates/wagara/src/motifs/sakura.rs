//! Sakura (cherry blossom): the bentenkikkou cross bars on a filled
//! triangle, with short stamens pointing in from each corner.

use super::util::{corners, cross_points, line, prev};
use crate::geometry::Point;
use crate::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SakuraConfig {
    /// Offset of each cross bar along the edges.
    pub cross: f64,
}

impl Default for SakuraConfig {
    fn default() -> Self {
        Self { cross: 0.125 }
    }
}

pub fn draw_sakura(surface: &mut dyn Surface, radius: f64, config: &SakuraConfig) {
    let points = corners(radius);
    let stamens: [Point; 3] = std::array::from_fn(|i| points[i].lerp(Point::ORIGIN, config.cross * 2.5));
    let bars = cross_points(&points, config.cross);

    surface.fill_polygon(&points);

    for i in 0..3 {
        line(surface, bars[i][0], bars[prev(i)][3]);
        line(surface, bars[i][1], bars[prev(i)][2]);
        line(surface, stamens[i], Point::ORIGIN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Canvas, Shape};
    use approx::assert_abs_diff_eq;

    #[test]
    fn stamens_start_inside_corners() {
        let mut canvas = Canvas::new();
        draw_sakura(&mut canvas, 16.0, &SakuraConfig::default());
        let shapes = canvas.shapes();
        assert_eq!(shapes.len(), 10);
        assert!(matches!(shapes[0], Shape::Polygon(_)));

        let Shape::Line(stamen) = shapes[3] else {
            panic!("expected a line");
        };
        assert_abs_diff_eq!(stamen.length(), 16.0 * (1.0 - 0.3125), epsilon = 1e-9);
    }
}
