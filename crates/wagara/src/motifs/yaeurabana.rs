//! Yaeurabana (double flower): corner-to-half-corner strokes that meet at
//! the edge midpoints, forming a six-pointed bloom per hexagon.

use super::util::{corners, line, midpoints, next};
use crate::geometry::Point;
use crate::surface::Surface;

pub fn draw_yaeurabana(surface: &mut dyn Surface, radius: f64) {
    let corners = corners(radius);
    let hex_corners: [Point; 3] = std::array::from_fn(|i| corners[i].lerp(Point::ORIGIN, 0.5));
    let midpoints = midpoints(&corners);

    for i in 0..3 {
        line(surface, corners[i], corners[next(i)]);
        line(surface, corners[i], hex_corners[i]);
        line(surface, midpoints[i], hex_corners[i]);
        line(surface, midpoints[i], hex_corners[next(i)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Canvas;

    #[test]
    fn draws_four_lines_per_corner() {
        let mut canvas = Canvas::new();
        draw_yaeurabana(&mut canvas, 12.0);
        assert_eq!(canvas.shapes().len(), 12);
    }
}
