//! Tile grids: cover a rectangle with a staggered lattice of hexagons.
//!
//! Columns are `unit_width` apart and rows `unit_width * cos(30°)` apart.
//! Odd rows shift right by half a unit ("brick laying") so the triangular
//! sectors of neighbouring rows interlock.
//!
//! The lattice runs one column past the last nominal column and keeps
//! adding rows while `row * unit_height <= height`, so patterns bleed past
//! the region's right and bottom edges by up to half a cell. That overshoot
//! is part of the look and is kept as-is.

use crate::error::{Error, Result, require_positive};
use crate::geometry::{Point, ROW_ANGLE, Transform};
use crate::hexagon::{MotifRenderer, draw_hexagon_in};

/// A tiling request: which rectangle to cover and how coarsely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionSpec {
    /// Top-left corner of the pattern space.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    /// Number of hexagon columns across `width`.
    pub columns: u32,
    /// Rotation of the entire pattern around `origin`, in radians.
    pub rotation: f64,
}

impl RegionSpec {
    pub fn new(origin: Point, width: f64, height: f64, columns: u32, rotation: f64) -> Self {
        Self { origin, width, height, columns, rotation }
    }

    /// Check the region can be tiled.
    pub fn validate(&self) -> Result<()> {
        if self.columns == 0 {
            return Err(Error::PreconditionViolation(
                "region columns must be at least 1, got 0".to_string(),
            ));
        }
        require_positive("region width", self.width)?;
        require_positive("region height", self.height)?;
        if !self.origin.is_finite() || !self.rotation.is_finite() {
            return Err(Error::PreconditionViolation(format!(
                "region origin and rotation must be finite, got ({}, {}) rotated {}",
                self.origin.x, self.origin.y, self.rotation
            )));
        }
        Ok(())
    }
}

/// One hexagon position in a lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatticePoint {
    pub col: u32,
    pub row: u32,
    /// Offset from the region origin before the region rotation.
    pub local: Point,
    /// World position of the hexagon centre.
    pub center: Point,
}

/// The validated lattice geometry of a [`RegionSpec`].
#[derive(Debug, Clone, Copy)]
pub struct Lattice {
    region: RegionSpec,
    unit_width: f64,
    unit_height: f64,
    columns: u32,
    rows: u32,
    len: usize,
}

impl Lattice {
    pub fn new(region: &RegionSpec) -> Result<Self> {
        region.validate()?;

        let unit_width = region.width / region.columns as f64;
        let unit_height = unit_width * ROW_ANGLE.cos();

        let columns = region
            .columns
            .checked_add(1)
            .ok_or_else(|| too_large(region, "column count overflows"))?;
        let rows = count_rows(region, unit_height)?;
        let len = (columns as usize)
            .checked_mul(rows as usize)
            .filter(|len| len.checked_mul(6).is_some())
            .ok_or_else(|| too_large(region, "sector count overflows"))?;

        Ok(Self { region: *region, unit_width, unit_height, columns, rows, len })
    }

    pub fn region(&self) -> &RegionSpec {
        &self.region
    }

    /// Horizontal distance between hexagon centres in one row.
    pub fn unit_width(&self) -> f64 {
        self.unit_width
    }

    /// Vertical distance between rows.
    pub fn unit_height(&self) -> f64 {
        self.unit_height
    }

    /// Radius handed to each hexagon.
    pub fn hexagon_radius(&self) -> f64 {
        self.unit_width / 2.0
    }

    /// Columns actually drawn: one more than requested, edge to edge.
    pub fn column_count(&self) -> u32 {
        self.columns
    }

    /// Rows per column.
    pub fn row_count(&self) -> u32 {
        self.rows
    }

    /// Total hexagons in the lattice.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for a validated region; here for clippy's sake.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The grid frame: translate to the origin, rotate by the region rotation.
    pub fn frame(&self) -> Transform {
        Transform::translation(self.region.origin.x, self.region.origin.y).rotate(self.region.rotation)
    }

    /// Brick-laying shift for a row.
    pub fn x_offset(&self, row: u32) -> f64 {
        if row % 2 == 0 {
            0.0
        } else {
            self.region.width / (self.region.columns as f64 * 2.0)
        }
    }

    /// Untransformed offset of a lattice position from the region origin.
    pub fn local_center(&self, col: u32, row: u32) -> Point {
        Point::new(
            col as f64 * self.unit_width + self.x_offset(row),
            row as f64 * self.unit_height,
        )
    }

    /// Every lattice position, column-major: all rows of column 0, then
    /// column 1, and so on.
    pub fn points(&self) -> impl Iterator<Item = LatticePoint> + '_ {
        let frame = self.frame();
        (0..self.column_count()).flat_map(move |col| {
            (0..self.rows).map(move |row| {
                let local = self.local_center(col, row);
                LatticePoint { col, row, local, center: frame.apply(local) }
            })
        })
    }
}

/// Rows kept while `row * unit_height <= height`, counted without walking
/// every row.
fn count_rows(region: &RegionSpec, unit_height: f64) -> Result<u32> {
    let estimate = (region.height / unit_height).floor();
    if !estimate.is_finite() || estimate >= u32::MAX as f64 {
        return Err(too_large(region, "row count overflows"));
    }

    // The float estimate can land one off the exact boundary test.
    let fits = |row: u32| row as f64 * unit_height <= region.height;
    let mut last = estimate as u32;
    while last > 0 && !fits(last) {
        last -= 1;
    }
    while let Some(next) = last.checked_add(1).filter(|&next| fits(next)) {
        last = next;
    }
    last.checked_add(1).ok_or_else(|| too_large(region, "row count overflows"))
}

fn too_large(region: &RegionSpec, what: &str) -> Error {
    Error::PreconditionViolation(format!(
        "lattice too large: {} for {} columns over {}x{}",
        what, region.columns, region.width, region.height
    ))
}

/// Tile `renderer` across `region`.
///
/// Every lattice point gets one hexagon of radius `unit_width / 2` and no
/// extra spin; the region rotation reaches the motifs through the grid
/// frame. The region is checked before the first draw. A renderer error
/// ends the tiling at that sector; what was already drawn stays drawn.
pub fn tile<R>(renderer: &mut R, region: &RegionSpec) -> Result<()>
where
    R: MotifRenderer + ?Sized,
{
    let lattice = Lattice::new(region)?;
    let frame = lattice.frame();
    let radius = lattice.hexagon_radius();

    log::debug!(
        "tiling {} columns x {} rows (unit {:.3} x {:.3})",
        lattice.column_count(),
        lattice.row_count(),
        lattice.unit_width(),
        lattice.unit_height()
    );

    for point in lattice.points() {
        draw_hexagon_in(renderer, &frame, point.local, radius, 0.0)?;
    }
    Ok(())
}

/// Number of renderer calls `tile` makes for `region`.
pub fn cell_count(region: &RegionSpec) -> Result<usize> {
    // Lattice::new guarantees this product fits.
    Ok(Lattice::new(region)?.len() * 6)
}
