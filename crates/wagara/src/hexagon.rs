//! Hexagon cells: one hexagon split into six triangular sectors.
//!
//! Each sector hosts one motif. Sector centres sit `sector_radius` away
//! from the hexagon centre at 60° steps, and each sector is turned half a
//! circle so its triangle points back towards the middle. Six of them
//! fill a regular hexagon of circumradius `radius` exactly.

use std::f64::consts::PI;

use crate::error::{Result, require_positive};
use crate::geometry::{Point, SECTOR_ANGLE, Transform};

/// Where and how big one motif (or one hexagon) is drawn.
///
/// `center` and `rotation` are in the world frame: any parent transforms
/// have already been folded in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSpec {
    pub center: Point,
    pub radius: f64,
    pub rotation: f64,
}

impl CellSpec {
    #[inline]
    pub fn new(center: Point, radius: f64, rotation: f64) -> Self {
        Self { center, radius, rotation }
    }

    /// The frame a motif is drawn in: origin at `center`, axes turned by
    /// `rotation`.
    #[inline]
    pub fn frame(&self) -> Transform {
        Transform::translation(self.center.x, self.center.y).rotate(self.rotation)
    }
}

/// Something that draws one motif into a triangular sector.
///
/// ## Rust Lesson #12: Traits as capabilities
///
/// Any `FnMut(CellSpec) -> Result<()>` closure is a renderer thanks to the
/// blanket impl below, so tests can pass a closure that records calls while
/// real code passes a [`crate::MotifBrush`].
pub trait MotifRenderer {
    fn render(&mut self, cell: CellSpec) -> Result<()>;
}

impl<F> MotifRenderer for F
where
    F: FnMut(CellSpec) -> Result<()>,
{
    #[inline]
    fn render(&mut self, cell: CellSpec) -> Result<()> {
        self(cell)
    }
}

/// Radius of each of the six sectors of a hexagon of circumradius `radius`.
#[inline]
pub fn sector_radius(radius: f64) -> f64 {
    radius / (1.0 + SECTOR_ANGLE.cos())
}

/// The six sector placements of a hexagon drawn inside `frame`.
///
/// `center` and `rotation` are relative to `frame`. Sectors come out in
/// increasing angle, which is also the order they are drawn in.
pub fn hexagon_sectors(frame: &Transform, center: Point, radius: f64, rotation: f64) -> [CellSpec; 6] {
    let hex = frame.then(Transform::translation(center.x, center.y).rotate(rotation));
    let r = sector_radius(radius);

    std::array::from_fn(|i| {
        let theta = i as f64 * SECTOR_ANGLE;
        let local = Point::from_angle(theta, r);
        CellSpec::new(hex.apply(local), r, hex.theta + theta + PI)
    })
}

/// Draw one hexagon cell with the identity as parent frame.
///
/// Calls `renderer` exactly six times. Fails with
/// [`crate::Error::PreconditionViolation`] before any call when `radius`
/// is not positive.
pub fn draw_hexagon<R>(renderer: &mut R, center: Point, radius: f64, rotation: f64) -> Result<()>
where
    R: MotifRenderer + ?Sized,
{
    draw_hexagon_in(renderer, &Transform::IDENTITY, center, radius, rotation)
}

/// Draw one hexagon cell inside an already-composed parent frame.
///
/// A renderer error stops the cell immediately; later sectors are not drawn.
pub fn draw_hexagon_in<R>(
    renderer: &mut R,
    frame: &Transform,
    center: Point,
    radius: f64,
    rotation: f64,
) -> Result<()>
where
    R: MotifRenderer + ?Sized,
{
    require_positive("hexagon radius", radius)?;

    for sector in hexagon_sectors(frame, center, radius, rotation) {
        renderer.render(sector)?;
    }
    Ok(())
}
