//! Kikyouasanoha (bellflower hemp leaf): asanoha spokes stop at a small
//! inner triangle instead of meeting at the centre.

use super::util::{corners, line, next};
use crate::geometry::Point;
use crate::surface::Surface;

/// Size of the inner triangle relative to the outer one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KikyouasanohaConfig {
    pub inner_size: f64,
}

impl Default for KikyouasanohaConfig {
    fn default() -> Self {
        Self { inner_size: 0.25 }
    }
}

pub fn draw_kikyouasanoha(surface: &mut dyn Surface, radius: f64, config: &KikyouasanohaConfig) {
    let corners = corners(radius);
    let inside: [Point; 3] = std::array::from_fn(|i| Point::ORIGIN.lerp(corners[i], config.inner_size));

    for i in 0..3 {
        line(surface, corners[i], inside[i]);
        line(surface, inside[i], inside[next(i)]);
        line(surface, corners[i], corners[next(i)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Canvas, Shape};
    use approx::assert_abs_diff_eq;

    #[test]
    fn spokes_end_on_inner_triangle() {
        let mut canvas = Canvas::new();
        draw_kikyouasanoha(&mut canvas, 20.0, &KikyouasanohaConfig::default());
        assert_eq!(canvas.shapes().len(), 9);

        let Shape::Line(spoke) = canvas.shapes()[0] else {
            panic!("expected a line");
        };
        assert_abs_diff_eq!(spoke.end().distance(Point::ORIGIN), 5.0, epsilon = 1e-9);
    }
}
