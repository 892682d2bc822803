//! Cell sizes and the resolver that derives them from a tile footprint.

use serde::{Deserialize, Serialize};

use crate::projection::transform_extent;
use crate::{Extent, GeometryError, GeometryResult, SpatialReference};

/// Ground distance covered by one pixel along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub x: f64,
    pub y: f64,
}

impl CellSize {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Isotropic cell size.
    pub fn square(size: f64) -> Self {
        Self::new(size, size)
    }

    /// Mean of the x and y components.
    pub fn mean(&self) -> f64 {
        0.5 * (self.x + self.y)
    }

    /// Per-axis average of two cell sizes.
    pub fn average(&self, other: &CellSize) -> CellSize {
        CellSize::new(0.5 * (self.x + other.x), 0.5 * (self.y + other.y))
    }
}

impl From<(f64, f64)> for CellSize {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// The spatial footprint of a requested tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileGeometry {
    /// Tile extent in `spatial_reference` units.
    pub extent: Extent,
    /// Number of columns in the tile.
    pub width: usize,
    /// Number of rows in the tile.
    pub height: usize,
    pub spatial_reference: SpatialReference,
}

/// Resolves the cell size a tile request implies, expressed in a target
/// spatial reference.
///
/// Implementations must be pure: identical inputs give identical outputs.
pub trait CellSizeResolver: Send + Sync {
    fn cell_size(
        &self,
        tile: &TileGeometry,
        target: SpatialReference,
    ) -> GeometryResult<CellSize>;
}

/// Default resolver: project the tile extent into the target reference and
/// divide by the tile's pixel dimensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectedCellSize;

impl CellSizeResolver for ProjectedCellSize {
    fn cell_size(
        &self,
        tile: &TileGeometry,
        target: SpatialReference,
    ) -> GeometryResult<CellSize> {
        if tile.width == 0 || tile.height == 0 {
            return Err(GeometryError::EmptyTile {
                width: tile.width,
                height: tile.height,
            });
        }

        let projected = transform_extent(&tile.extent, tile.spatial_reference, target)?;
        let cell_size = CellSize::new(
            projected.width() / tile.width as f64,
            projected.height() / tile.height as f64,
        );

        tracing::trace!(
            from = %tile.spatial_reference,
            to = %target,
            cell_x = cell_size.x,
            cell_y = cell_size.y,
            "Resolved tile cell size"
        );

        Ok(cell_size)
    }
}

impl<R: CellSizeResolver + ?Sized> CellSizeResolver for &R {
    fn cell_size(
        &self,
        tile: &TileGeometry,
        target: SpatialReference,
    ) -> GeometryResult<CellSize> {
        (**self).cell_size(tile, target)
    }
}
