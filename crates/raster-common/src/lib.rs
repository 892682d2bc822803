//! Geometry primitives shared across the pixel-size selection workspace.

pub mod cell_size;
pub mod crs;
pub mod error;
pub mod extent;
pub mod projection;

pub use cell_size::{CellSize, CellSizeResolver, ProjectedCellSize, TileGeometry};
pub use crs::SpatialReference;
pub use error::{GeometryError, GeometryResult};
pub use extent::Extent;
