//! Drawing surfaces.
//!
//! Motifs draw through the [`Surface`] trait, the same small immediate-mode
//! vocabulary a sketching canvas offers: move/rotate the transform, save and
//! restore it, and stroke lines, curves and filled polygons.
//!
//! [`Canvas`] is the recording implementation used for export: it keeps the
//! transform as an immutable [`Transform`] value plus a stack of saved
//! values, and stores every shape already mapped to world coordinates.

use std::collections::HashSet;
use std::ops::{Deref, DerefMut};

use lyon_geom::{CubicBezierSegment, point};

use crate::geometry::{Line, Point, Transform};

/// Tolerance for curve flattening.
/// 0.1 is sub-pixel at typical canvas scales and fine for plotters.
const CURVE_TOLERANCE: f64 = 0.1;

/// An immediate-mode drawing target.
pub trait Surface {
    /// Translate the local axes by `(dx, dy)`.
    fn move_transform(&mut self, dx: f64, dy: f64);

    /// Rotate the local axes by `theta` radians.
    fn rotate_transform(&mut self, theta: f64);

    /// Push the current transform.
    fn save_transform_state(&mut self);

    /// Pop back to the last pushed transform.
    fn restore_transform_state(&mut self);

    /// Stroke a straight segment.
    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    /// Stroke a Catmull-Rom spline through `points`.
    ///
    /// As with `curveVertex`, the first and last points only steer the
    /// curve; it runs from `points[1]` to `points[len - 2]`. Repeat an end
    /// point to make the curve reach it.
    fn draw_curve_segment(&mut self, points: &[Point]);

    /// Fill and stroke a closed polygon.
    fn fill_polygon(&mut self, points: &[Point]);
}

/// Saves the transform on creation and restores it when dropped.
///
/// ## Rust Lesson #15: Drop guards
///
/// `Drop::drop` runs however the scope is left: falling off the end, an
/// early `return`, a `?` on an error, or a panic unwinding through. Pairing
/// save/restore this way means a failing motif can't leak its transform
/// into the next one.
///
/// The guard derefs to the surface, so draw through it:
/// ```ignore
/// let mut scope = TransformScope::new(surface);
/// scope.move_transform(10.0, 0.0);
/// scope.draw_line(0.0, 0.0, 5.0, 5.0);
/// // restored here
/// ```
pub struct TransformScope<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> TransformScope<'a, S> {
    pub fn new(surface: &'a mut S) -> Self {
        surface.save_transform_state();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for TransformScope<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for TransformScope<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for TransformScope<'_, S> {
    fn drop(&mut self) {
        self.surface.restore_transform_state();
    }
}

/// One cubic Bézier piece of a flattened-later curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub from: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl CubicSegment {
    /// Bézier form of the Catmull-Rom span from `p1` to `p2`.
    pub fn from_catmull_rom(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        Self {
            from: p1,
            ctrl1: p1 + (p2 - p0) * (1.0 / 6.0),
            ctrl2: p2 - (p3 - p1) * (1.0 / 6.0),
            to: p2,
        }
    }

    fn transformed(&self, t: &Transform) -> Self {
        Self {
            from: t.apply(self.from),
            ctrl1: t.apply(self.ctrl1),
            ctrl2: t.apply(self.ctrl2),
            to: t.apply(self.to),
        }
    }

    /// Approximate with line segments.
    pub fn flatten(&self, tolerance: f64) -> Vec<Line> {
        let curve = CubicBezierSegment {
            from: point(self.from.x, self.from.y),
            ctrl1: point(self.ctrl1.x, self.ctrl1.y),
            ctrl2: point(self.ctrl2.x, self.ctrl2.y),
            to: point(self.to.x, self.to.y),
        };

        let mut lines = Vec::new();
        curve.for_each_flattened(tolerance, &mut |segment| {
            lines.push(Line::new(segment.from.x, segment.from.y, segment.to.x, segment.to.y));
        });
        lines
    }
}

/// Catmull-Rom control points to Bézier spans.
pub fn catmull_rom_segments(points: &[Point]) -> Vec<CubicSegment> {
    points
        .windows(4)
        .map(|w| CubicSegment::from_catmull_rom(w[0], w[1], w[2], w[3]))
        .collect()
}

/// A recorded shape in world coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Curve(Vec<CubicSegment>),
    Polygon(Vec<Point>),
}

impl Shape {
    /// Every point the shape touches, control points included.
    fn points(&self) -> Vec<Point> {
        match self {
            Shape::Line(line) => vec![line.start(), line.end()],
            Shape::Curve(segments) => segments
                .iter()
                .flat_map(|s| [s.from, s.ctrl1, s.ctrl2, s.to])
                .collect(),
            Shape::Polygon(points) => points.clone(),
        }
    }
}

/// A surface that records shapes instead of rasterising them.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    transform: Transform,
    saved: Vec<Transform>,
    shapes: Vec<Shape>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes in the order they were drawn.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Current transform.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Number of saved-but-not-restored transforms.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Bounding box of everything drawn, as (min_x, min_y, max_x, max_y).
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        let points: Vec<Point> = self.shapes.iter().flat_map(Shape::points).collect();
        if points.is_empty() {
            return None;
        }

        let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

        Some((min_x, min_y, max_x, max_y))
    }

    /// Everything as plain line segments, for plotters.
    ///
    /// Curves are flattened and polygons become closed outlines. With
    /// `dedupe`, segments that neighbouring sectors both drew (same
    /// endpoints, either direction) are kept once.
    pub fn plot_lines(&self, dedupe: bool) -> Vec<Line> {
        let mut lines = Vec::new();
        for shape in &self.shapes {
            match shape {
                Shape::Line(line) => lines.push(*line),
                Shape::Curve(segments) => {
                    for segment in segments {
                        lines.extend(segment.flatten(CURVE_TOLERANCE));
                    }
                }
                Shape::Polygon(points) => {
                    let n = points.len();
                    for i in 0..n {
                        lines.push(Line::between(points[i], points[(i + 1) % n]));
                    }
                }
            }
        }

        if dedupe { deduplicate_lines(lines) } else { lines }
    }
}

impl Surface for Canvas {
    fn move_transform(&mut self, dx: f64, dy: f64) {
        self.transform = self.transform.translate(dx, dy);
    }

    fn rotate_transform(&mut self, theta: f64) {
        self.transform = self.transform.rotate(theta);
    }

    fn save_transform_state(&mut self) {
        self.saved.push(self.transform);
    }

    fn restore_transform_state(&mut self) {
        match self.saved.pop() {
            Some(t) => self.transform = t,
            None => log::warn!("restore_transform_state called with no saved transform"),
        }
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let start = self.transform.apply(Point::new(x1, y1));
        let end = self.transform.apply(Point::new(x2, y2));
        self.shapes.push(Shape::Line(Line::between(start, end)));
    }

    fn draw_curve_segment(&mut self, points: &[Point]) {
        let segments: Vec<CubicSegment> = catmull_rom_segments(points)
            .iter()
            .map(|s| s.transformed(&self.transform))
            .collect();
        if !segments.is_empty() {
            self.shapes.push(Shape::Curve(segments));
        }
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        if points.len() < 3 {
            return;
        }
        let mapped = points.iter().map(|p| self.transform.apply(*p)).collect();
        self.shapes.push(Shape::Polygon(mapped));
    }
}

/// Remove duplicate lines (same endpoints in either order).
fn deduplicate_lines(lines: Vec<Line>) -> Vec<Line> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = Vec::new();

    for line in lines {
        let key1 = line_key(&line);
        let key2 = line_key(&line.reversed());

        if !seen.contains(&key1) && !seen.contains(&key2) {
            seen.insert(key1);
            result.push(line);
        }
    }

    result
}

fn line_key(line: &Line) -> String {
    // Normalise -0.00 so mirrored sectors produce the same key.
    let r = |v: f64| {
        let rounded = (v * 100.0).round() / 100.0;
        if rounded == 0.0 { 0.0 } else { rounded }
    };
    format!("{:.2},{:.2}-{:.2},{:.2}", r(line.x1), r(line.y1), r(line.x2), r(line.y2))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::TAU;
    use approx::assert_abs_diff_eq;

    #[test]
    fn lines_are_recorded_in_world_coordinates() {
        let mut canvas = Canvas::new();
        canvas.move_transform(100.0, 50.0);
        canvas.rotate_transform(TAU / 4.0);
        canvas.draw_line(0.0, 0.0, 10.0, 0.0);

        let Shape::Line(line) = canvas.shapes()[0] else {
            panic!("expected a line");
        };
        assert_abs_diff_eq!(line.x1, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(line.y1, 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(line.x2, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(line.y2, 60.0, epsilon = 1e-9);
    }

    #[test]
    fn save_and_restore_are_nested() {
        let mut canvas = Canvas::new();
        canvas.move_transform(5.0, 0.0);
        canvas.save_transform_state();
        canvas.move_transform(5.0, 0.0);
        canvas.save_transform_state();
        canvas.rotate_transform(1.0);
        assert_eq!(canvas.depth(), 2);

        canvas.restore_transform_state();
        assert_eq!(canvas.transform(), Transform::translation(10.0, 0.0));
        canvas.restore_transform_state();
        assert_eq!(canvas.transform(), Transform::translation(5.0, 0.0));
        assert_eq!(canvas.depth(), 0);
    }

    #[test]
    fn unbalanced_restore_keeps_transform() {
        let mut canvas = Canvas::new();
        canvas.move_transform(3.0, 4.0);
        canvas.restore_transform_state();
        assert_eq!(canvas.transform(), Transform::translation(3.0, 4.0));
    }

    #[test]
    fn scope_restores_on_drop() {
        let mut canvas = Canvas::new();
        {
            let mut scope = TransformScope::new(&mut canvas);
            scope.move_transform(40.0, 40.0);
            scope.draw_line(0.0, 0.0, 1.0, 1.0);
            assert_eq!(scope.depth(), 1);
        }
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.transform(), Transform::IDENTITY);
        assert_eq!(canvas.shapes().len(), 1);
    }

    #[test]
    fn scope_restores_on_early_error_return() {
        fn check(ok: bool) -> Result<(), String> {
            if ok { Ok(()) } else { Err("motif blew up".to_string()) }
        }

        fn failing(surface: &mut dyn Surface) -> Result<(), String> {
            let mut scope = TransformScope::new(surface);
            scope.move_transform(9.0, 9.0);
            check(false)?;
            scope.draw_line(0.0, 0.0, 1.0, 0.0);
            Ok(())
        }

        let mut canvas = Canvas::new();
        assert!(failing(&mut canvas).is_err());
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.transform(), Transform::IDENTITY);
        assert!(canvas.is_empty());
    }

    #[test]
    fn scope_restores_while_unwinding() {
        let mut canvas = Canvas::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut scope = TransformScope::new(&mut canvas);
            scope.rotate_transform(2.0);
            panic!("renderer panicked");
        }));
        assert!(result.is_err());
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.transform(), Transform::IDENTITY);
    }

    #[test]
    fn curve_with_repeated_ends_spans_inner_points() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(5.0, 5.0);
        let c = Point::new(10.0, 0.0);
        let mut canvas = Canvas::new();
        canvas.draw_curve_segment(&[a, a, b, c, c]);

        let Shape::Curve(segments) = &canvas.shapes()[0] else {
            panic!("expected a curve");
        };
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].from, a);
        assert_eq!(segments[0].to, b);
        assert_eq!(segments[1].to, c);
    }

    #[test]
    fn too_short_curves_and_polygons_are_ignored() {
        let mut canvas = Canvas::new();
        canvas.draw_curve_segment(&[Point::ORIGIN, Point::new(1.0, 1.0), Point::new(2.0, 0.0)]);
        canvas.fill_polygon(&[Point::ORIGIN, Point::new(1.0, 1.0)]);
        assert!(canvas.is_empty());
    }

    #[test]
    fn flattened_curve_is_continuous() {
        let segment = CubicSegment::from_catmull_rom(
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(50.0, 40.0),
            Point::new(100.0, 0.0),
        );
        let lines = segment.flatten(0.1);
        assert!(lines.len() > 3, "expected several segments, got {}", lines.len());
        for pair in lines.windows(2) {
            assert_abs_diff_eq!(pair[0].x2, pair[1].x1, epsilon = 1e-9);
            assert_abs_diff_eq!(pair[0].y2, pair[1].y1, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(lines.last().unwrap().x2, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn plot_lines_outline_polygons_and_dedupe() {
        let mut canvas = Canvas::new();
        canvas.fill_polygon(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)]);
        // Same edge as the polygon's first edge, drawn backwards.
        canvas.draw_line(10.0, 0.0, 0.0, 0.0);

        assert_eq!(canvas.plot_lines(false).len(), 4);
        assert_eq!(canvas.plot_lines(true).len(), 3);
    }

    #[test]
    fn bounding_box_covers_all_shapes() {
        let mut canvas = Canvas::new();
        assert_eq!(canvas.bounding_box(), None);
        canvas.draw_line(-5.0, 2.0, 3.0, 4.0);
        canvas.fill_polygon(&[Point::new(0.0, 0.0), Point::new(8.0, 0.0), Point::new(0.0, -1.0)]);
        assert_eq!(canvas.bounding_box(), Some((-5.0, -1.0, 8.0, 4.0)));
    }
}
