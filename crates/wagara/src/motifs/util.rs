//! Shared construction points for the triangle motifs.
//!
//! Every motif starts from the same equilateral triangle: corners at angles
//! 0, TAU/3 and 2·TAU/3, `radius` from the local origin. Most of the others
//! are lerps along its edges or towards its centre.

use crate::geometry::{Point, TAU};
use crate::surface::Surface;

/// Next index around the triangle, wrapping 2 -> 0.
#[inline]
pub fn next(i: usize) -> usize {
    (i + 1) % 3
}

/// Previous index around the triangle, wrapping 0 -> 2.
#[inline]
pub fn prev(i: usize) -> usize {
    (i + 2) % 3
}

/// Triangle corners at `magnitude` from the origin.
pub fn corners(magnitude: f64) -> [Point; 3] {
    std::array::from_fn(|i| Point::from_angle(i as f64 * (TAU / 3.0), magnitude))
}

/// Midpoint of each edge `i -> next(i)`.
pub fn midpoints(corners: &[Point; 3]) -> [Point; 3] {
    std::array::from_fn(|i| corners[i].lerp(corners[next(i)], 0.5))
}

/// Edge midpoints pulled `ratio` of the way in towards the centre.
///
/// 0 leaves them on the edges, 1 collapses them onto the centre.
pub fn intersections(corners: &[Point; 3], ratio: f64) -> [Point; 3] {
    let mids = midpoints(corners);
    std::array::from_fn(|i| mids[i].lerp(Point::ORIGIN, ratio))
}

/// Four points along each edge `i -> next(i)`: at `cross`, `2·cross`,
/// `1 - 2·cross` and `1 - cross`. Used for the double cross bars of the
/// kikkou-style motifs.
pub fn cross_points(corners: &[Point; 3], cross: f64) -> [[Point; 4]; 3] {
    std::array::from_fn(|i| {
        let (a, b) = (corners[i], corners[next(i)]);
        [
            a.lerp(b, cross),
            a.lerp(b, cross * 2.0),
            a.lerp(b, 1.0 - cross * 2.0),
            a.lerp(b, 1.0 - cross),
        ]
    })
}

/// Stroke `a -> b`.
#[inline]
pub fn line(surface: &mut dyn Surface, a: Point, b: Point) {
    surface.draw_line(a.x, a.y, b.x, b.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn indices_wrap() {
        assert_eq!([next(0), next(1), next(2)], [1, 2, 0]);
        assert_eq!([prev(0), prev(1), prev(2)], [2, 0, 1]);
    }

    #[test]
    fn corners_are_equidistant_and_equilateral() {
        let c = corners(10.0);
        assert_abs_diff_eq!(c[0].x, 10.0, epsilon = 1e-12);
        for i in 0..3 {
            assert_abs_diff_eq!(c[i].distance(Point::ORIGIN), 10.0, epsilon = 1e-9);
            assert_abs_diff_eq!(c[i].distance(c[next(i)]), 10.0 * 3f64.sqrt(), epsilon = 1e-9);
        }
    }

    #[test]
    fn intersection_ratio_extremes() {
        let c = corners(6.0);
        let mids = midpoints(&c);
        assert_eq!(intersections(&c, 0.0), mids);
        for p in intersections(&c, 1.0) {
            assert_abs_diff_eq!(p.distance(Point::ORIGIN), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn cross_points_are_symmetric_on_each_edge() {
        let c = corners(8.0);
        let x = cross_points(&c, 0.125);
        for (i, edge) in x.iter().enumerate() {
            let mid = c[i].lerp(c[next(i)], 0.5);
            assert_abs_diff_eq!(edge[0].distance(mid), edge[3].distance(mid), epsilon = 1e-9);
            assert_abs_diff_eq!(edge[1].distance(mid), edge[2].distance(mid), epsilon = 1e-9);
        }
    }
}
