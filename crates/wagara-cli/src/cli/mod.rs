//! CLI command implementations.
//!
//! - `render` - Tile a motif across a region
//! - `hexagon` - Draw a single hexagon cell
//! - `swatches` - Generate a motif swatch sheet
//! - `recipe` - Render layered compositions from YAML

pub mod common;
pub mod error;
pub mod export;
pub mod recipe;
pub mod render;
pub mod swatches;

pub use error::CliResult;
pub use recipe::cmd_recipe;
pub use render::{cmd_hexagon, cmd_render};
pub use swatches::cmd_swatches;
