//! Raster descriptors, tile requests, and the session context.

use std::fmt;

use raster_common::{CellSize, Extent, SpatialReference, TileGeometry};
use serde::{Deserialize, Serialize};

use crate::pixel::{PixelBlock, PixelType};

/// Identifies one of the two input rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RasterId {
    /// The finer raster, used below the threshold.
    R1,
    /// The coarser raster, used at or above the threshold.
    R2,
}

impl RasterId {
    /// Parameter name the host uses for this raster.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::R1 => "r1",
            Self::R2 => "r2",
        }
    }
}

impl fmt::Display for RasterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Geometry and band layout of an input raster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterDescriptor {
    pub extent: Extent,
    pub cell_size: CellSize,
    pub band_count: usize,
    pub spatial_reference: SpatialReference,
}

impl RasterDescriptor {
    pub fn new(
        extent: Extent,
        cell_size: CellSize,
        band_count: usize,
        spatial_reference: SpatialReference,
    ) -> Self {
        Self {
            extent,
            cell_size,
            band_count,
            spatial_reference,
        }
    }
}

/// Geometry the selector reports back to the host for its output raster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDescriptor {
    pub band_count: usize,
    pub cell_size: CellSize,
    pub extent: Extent,
    pub native_extent: Extent,
    /// Output geometry differs from at least one input; the host must
    /// resample.
    pub resampling: bool,
    pub spatial_reference: SpatialReference,
}

/// Immutable state fixed at setup and shared by every tile request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectionContext {
    threshold: f64,
    output: OutputDescriptor,
}

impl SelectionContext {
    pub(crate) fn new(threshold: f64, output: OutputDescriptor) -> Self {
        Self { threshold, output }
    }

    /// Cell size at and above which r2 is chosen.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn output(&self) -> &OutputDescriptor {
        &self.output
    }

    /// Reference that tile cell sizes are resolved in.
    pub fn spatial_reference(&self) -> SpatialReference {
        self.output.spatial_reference
    }

    /// Pick a raster for an effective request cell size.
    ///
    /// Strictly finer than the threshold picks r1; equal or coarser
    /// (and NaN) picks r2.
    pub fn choose(&self, cell_size: f64) -> RasterId {
        if cell_size < self.threshold {
            RasterId::R1
        } else {
            RasterId::R2
        }
    }
}

/// Per-tile properties supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileProps {
    pub extent: Extent,
    pub width: usize,
    pub height: usize,
    pub spatial_reference: SpatialReference,
    pub pixel_type: PixelType,
}

impl TileProps {
    /// Footprint used for cell-size resolution.
    pub fn geometry(&self) -> TileGeometry {
        TileGeometry {
            extent: self.extent,
            width: self.width,
            height: self.height,
            spatial_reference: self.spatial_reference,
        }
    }
}

/// One output tile request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRequest {
    /// Top-left corner of the tile in pixel coordinates.
    pub top_left_corner: (f64, f64),
    /// Requested output shape: `[rows, cols]` or `[bands, rows, cols]`.
    pub shape: Vec<usize>,
    pub props: TileProps,
}

/// Pixel blocks the host fetched for a tile.
///
/// Only the selected raster's block needs to be present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelBlocks {
    pub r1: Option<PixelBlock>,
    pub r2: Option<PixelBlock>,
}

impl PixelBlocks {
    /// Blocks with only `id` populated.
    pub fn only(id: RasterId, block: PixelBlock) -> Self {
        match id {
            RasterId::R1 => Self {
                r1: Some(block),
                r2: None,
            },
            RasterId::R2 => Self {
                r1: None,
                r2: Some(block),
            },
        }
    }

    pub fn get(&self, id: RasterId) -> Option<&PixelBlock> {
        match id {
            RasterId::R1 => self.r1.as_ref(),
            RasterId::R2 => self.r2.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_id_display() {
        assert_eq!(RasterId::R1.to_string(), "r1");
        assert_eq!(RasterId::R2.to_string(), "r2");
    }

    #[test]
    fn test_tile_props_from_json_with_dtype_code() {
        let json = r#"{
            "extent": {"x_min": 0.0, "y_min": 0.0, "x_max": 512.0, "y_max": 512.0},
            "width": 256,
            "height": 256,
            "spatialReference": "EPSG:3857",
            "pixelType": "f4"
        }"#;
        let props: TileProps = serde_json::from_str(json).unwrap();
        assert_eq!(props.pixel_type, PixelType::F32);
        assert_eq!(props.geometry().width, 256);
    }

    #[test]
    fn test_tile_request_from_json_with_dtype_code() {
        let json = r#"{
            "topLeftCorner": [0.0, 0.0],
            "shape": [3, 256, 256],
            "props": {
                "extent": {"x_min": 0.0, "y_min": 0.0, "x_max": 1.0, "y_max": 1.0},
                "width": 256,
                "height": 256,
                "spatialReference": "EPSG:4326",
                "pixelType": "u1"
            }
        }"#;
        let request: TileRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.shape, vec![3, 256, 256]);
        assert_eq!(request.props.pixel_type, PixelType::U8);
    }

    #[test]
    fn test_raster_descriptor_from_json() {
        let json = r#"{
            "extent": {"x_min": 0.0, "y_min": 0.0, "x_max": 10.0, "y_max": 10.0},
            "cellSize": {"x": 2.0, "y": 2.0},
            "bandCount": 3,
            "spatialReference": "EPSG:3857"
        }"#;
        let descriptor: RasterDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.band_count, 3);
        assert_eq!(descriptor.spatial_reference, SpatialReference::Epsg3857);
        assert_eq!(descriptor.cell_size, CellSize::square(2.0));
    }
}
