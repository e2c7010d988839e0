//! Core geometry types for wagara.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! Every value here is a small `Copy` struct. Nothing in the tiling core is
//! mutated in place: a transform is composed into a *new* transform and
//! handed down to the next level, the same way a point is lerped into a new
//! point.

use std::f64::consts::PI;
use std::ops::{Add, Mul, Sub};

/// Two PI. The motif math is written in turns of the circle.
pub const TAU: f64 = PI * 2.0;

/// Angular spacing between the six sectors of a hexagon (60°).
pub const SECTOR_ANGLE: f64 = TAU / 6.0;

/// Angle whose cosine relates a row's height to its unit width (30°).
pub const ROW_ANGLE: f64 = TAU / 12.0;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A line segment defined by two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// A rigid 2D transform: translate by `(tx, ty)`, then rotate the local
/// axes by `theta` radians.
///
/// Maps a local point `p` to `t + R(theta) * p`. Composing with
/// [`Transform::then`] gives the frame of a child drawn inside this one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub tx: f64,
    pub ty: f64,
    pub theta: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `angle` radians from the origin, `magnitude` away.
    #[inline]
    pub fn from_angle(angle: f64, magnitude: f64) -> Self {
        Self::new(angle.cos() * magnitude, angle.sin() * magnitude)
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    #[inline]
    pub fn lerp(&self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Rotate around the origin.
    #[inline]
    pub fn rotated(&self, theta: f64) -> Point {
        let (sin, cos) = theta.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ## Rust Lesson #5: Operator traits
//
// `impl Add for Point` is what lets `a + b` compile. Because Point is
// `Copy`, the operands are copied in rather than moved away.

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Line {
    #[inline]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    pub fn between(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    #[inline]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[inline]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start().distance(self.end())
    }

    /// Same segment, drawn the other way.
    #[inline]
    pub fn reversed(&self) -> Line {
        Line::new(self.x2, self.y2, self.x1, self.y1)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform { tx: 0.0, ty: 0.0, theta: 0.0 };

    #[inline]
    pub fn new(tx: f64, ty: f64, theta: f64) -> Self {
        Self { tx, ty, theta }
    }

    /// Pure translation.
    #[inline]
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::new(tx, ty, 0.0)
    }

    /// Pure rotation about the origin.
    #[inline]
    pub fn rotation(theta: f64) -> Self {
        Self::new(0.0, 0.0, theta)
    }

    /// Translate along the *local* axes, like `translate()` on a drawing
    /// context that is already rotated.
    #[inline]
    pub fn translate(&self, dx: f64, dy: f64) -> Transform {
        self.then(Transform::translation(dx, dy))
    }

    /// Rotate the local axes further by `theta`.
    #[inline]
    pub fn rotate(&self, theta: f64) -> Transform {
        Transform::new(self.tx, self.ty, self.theta + theta)
    }

    /// Compose with a child transform expressed in this frame.
    ///
    /// `a.then(b).apply(p) == a.apply(b.apply(p))`
    #[inline]
    pub fn then(&self, child: Transform) -> Transform {
        let offset = self.apply(Point::new(child.tx, child.ty));
        Transform::new(offset.x, offset.y, self.theta + child.theta)
    }

    /// Map a local point into the parent frame.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        p.rotated(self.theta) + self.origin()
    }

    /// Where the local origin lands.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.tx, self.ty)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert_eq!(p1.distance(p2), 5.0);
    }

    #[test]
    fn line_length() {
        let line = Line::new(0.0, 0.0, 3.0, 4.0);
        assert_eq!(line.length(), 5.0);
        assert_eq!(line.reversed().start(), line.end());
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, -4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Point::new(5.0, -2.0));
    }

    #[test]
    fn from_angle_quarter_turn() {
        let p = Point::from_angle(TAU / 4.0, 2.0);
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn translate_follows_rotated_axes() {
        // Rotate 90° then step 10 along local x: lands on parent +y.
        let t = Transform::translation(5.0, 5.0).rotate(TAU / 4.0).translate(10.0, 0.0);
        let p = t.origin();
        assert_abs_diff_eq!(p.x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 15.0, epsilon = 1e-12);
    }

    #[test]
    fn composition_matches_nested_application() {
        let parent = Transform::new(100.0, 40.0, 0.7);
        let child = Transform::new(-3.0, 12.0, -1.9);
        let p = Point::new(4.5, -2.25);

        let composed = parent.then(child).apply(p);
        let nested = parent.apply(child.apply(p));
        assert_abs_diff_eq!(composed.x, nested.x, epsilon = 1e-9);
        assert_abs_diff_eq!(composed.y, nested.y, epsilon = 1e-9);
    }

    #[test]
    fn identity_is_neutral() {
        let t = Transform::new(1.0, 2.0, 0.3);
        assert_eq!(Transform::IDENTITY.then(t), t);
        assert_eq!(Transform::IDENTITY.apply(Point::new(7.0, 8.0)), Point::new(7.0, 8.0));
    }
}
