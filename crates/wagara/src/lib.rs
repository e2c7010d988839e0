//! # wagara
//!
//! Traditional Japanese geometric patterns (wagara) on a hexagonal lattice.
//!
//! A region is covered with hexagons, each hexagon is split into six
//! triangular sectors, and every sector is handed to a [`MotifRenderer`]
//! that draws one motif inside it.
//!
//! ```no_run
//! use wagara::{Canvas, Motif, RegionSpec, Point, tile};
//!
//! let mut canvas = Canvas::new();
//! let region = RegionSpec::new(Point::new(120.0, 170.0), 300.0, 300.0, 2, 0.0);
//! tile(&mut Motif::Asanoha.brush(&mut canvas), &region)?;
//! # Ok::<(), wagara::Error>(())
//! ```
//!
//! ## Rust Lesson #7: Modules
//!
//! Rust modules are explicit:
//! - `mod foo;` = load from `foo.rs` or `foo/mod.rs`
//! - `pub mod foo;` = also export it publicly
//! - `pub use foo::Bar;` = re-export Bar at this level

pub mod error;
pub mod geometry;
pub mod hexagon;
pub mod motifs;
pub mod surface;
pub mod svg;
pub mod tile;

// Re-export common types at crate root for convenience.
pub use error::{Error, Result};
pub use geometry::{Line, Point, Transform};
pub use hexagon::{CellSpec, MotifRenderer, draw_hexagon, draw_hexagon_in, sector_radius};
pub use motifs::{Motif, MotifBrush};
pub use surface::{Canvas, Shape, Surface, TransformScope};
pub use svg::{Style, SvgDocument, SvgLayer, lines_to_svg};
pub use tile::{Lattice, LatticePoint, RegionSpec, cell_count, tile};
