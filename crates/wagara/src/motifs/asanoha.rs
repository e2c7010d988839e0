//! Asanoha (hemp leaf): a triangle with spokes from each corner to the centre.

use super::util::{corners, line, next};
use crate::geometry::Point;
use crate::surface::Surface;

/// Draw one asanoha triangle centred on the local origin.
pub fn draw_asanoha(surface: &mut dyn Surface, radius: f64) {
    let points = corners(radius);

    for i in 0..3 {
        line(surface, points[i], Point::ORIGIN);
        line(surface, points[i], points[next(i)]);
    }
}
