//! Tsunoasanoha (horned hemp leaf): the outline plus one stroke per edge
//! from the pulled-in midpoint to the opposite corner.

use super::util::{corners, intersections, line, next, prev};
use super::yaeasa::InnerRatioConfig;
use crate::surface::Surface;

pub fn draw_tsunoasanoha(surface: &mut dyn Surface, radius: f64, config: &InnerRatioConfig) {
    let points = corners(radius);
    let meets = intersections(&points, config.inner_ratio);

    for i in 0..3 {
        line(surface, points[i], points[next(i)]);
        line(surface, meets[i], points[prev(i)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Canvas, Shape};

    #[test]
    fn horn_lines_end_on_opposite_corner() {
        let mut canvas = Canvas::new();
        draw_tsunoasanoha(&mut canvas, 10.0, &InnerRatioConfig::default());
        assert_eq!(canvas.shapes().len(), 6);

        let Shape::Line(horn) = canvas.shapes()[1] else {
            panic!("expected a line");
        };
        assert_eq!(horn.end(), corners(10.0)[2]);
    }
}
