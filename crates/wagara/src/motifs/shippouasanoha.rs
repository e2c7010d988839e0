//! Shippouasanoha (seven treasures hemp leaf): the triangle outline with a
//! curve bowing in from each edge towards the centre.

use super::util::{corners, line, midpoints, next};
use crate::geometry::Point;
use crate::surface::Surface;

/// How far each curve's anchor moves from the edge midpoint (0) to the
/// centre (1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShippouasanohaConfig {
    pub curve: f64,
}

impl Default for ShippouasanohaConfig {
    fn default() -> Self {
        Self { curve: 0.5 }
    }
}

pub fn draw_shippouasanoha(surface: &mut dyn Surface, radius: f64, config: &ShippouasanohaConfig) {
    let points = corners(radius);
    let anchors: [Point; 3] = {
        let mids = midpoints(&points);
        std::array::from_fn(|i| mids[i].lerp(Point::ORIGIN, config.curve))
    };

    for i in 0..3 {
        let n = next(i);
        line(surface, points[i], points[n]);
        surface.draw_curve_segment(&[points[i], points[i], anchors[i], points[n], points[n]]);
    }
}
