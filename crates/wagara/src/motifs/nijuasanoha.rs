//! Nijuasanoha (double hemp leaf): yaeasa's kites, each with a spoke from
//! its tip to the centre.

use super::util::{corners, intersections, line, next};
use super::yaeasa::InnerRatioConfig;
use crate::geometry::Point;
use crate::surface::Surface;

pub fn draw_nijuasanoha(surface: &mut dyn Surface, radius: f64, config: &InnerRatioConfig) {
    let points = corners(radius);
    let meets = intersections(&points, config.inner_ratio);

    for i in 0..3 {
        line(surface, points[i], points[next(i)]);
        line(surface, points[i], meets[i]);
        line(surface, points[next(i)], meets[i]);
        line(surface, meets[i], Point::ORIGIN);
    }
}
