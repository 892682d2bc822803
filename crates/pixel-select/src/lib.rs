//! Pixel-size selection between two overlapping rasters.
//!
//! Given a fine raster (`r1`) and a coarse raster (`r2`), this crate decides
//! per output tile which of the two supplies pixels, based on the cell size
//! the tile request implies compared to a threshold fixed at setup.
//!
//! # Architecture
//!
//! ```text
//! Host setup
//!      │
//!      ▼
//! configure(r1, r2, sr, threshold) ──► SelectionContext (immutable)
//!                                           │
//! Per tile                                  │
//!      │                                    │
//!      ├─► select_source(ctx, tile) ──► R1 | R2
//!      │
//!      ├─► host fetches the chosen block
//!      │
//!      └─► adapt(block, shape, pixel_type) ──► output block
//! ```
//!
//! # Example
//!
//! ```ignore
//! use pixel_select::{SelectByPixelSize, RasterInfoRequest, PixelBlocks};
//!
//! let function = SelectByPixelSize::new();
//! let ctx = function.update_raster_info(&request)?;
//!
//! let id = function.select_rasters(&ctx, &tile)?;
//! let block = host.fetch(id, &tile);
//! let output = function.update_pixels(&ctx, &tile, &PixelBlocks::only(id, block))?;
//! ```

pub mod adapt;
pub mod config;
pub mod error;
pub mod function;
pub mod negotiate;
pub mod pixel;
pub mod select;
pub mod types;

// Re-export commonly used types at crate root
pub use adapt::adapt;
pub use config::SelectorConfig;
pub use error::{Result, SelectError};
pub use function::{
    FunctionConfiguration, OutputInfo, ParameterDataType, ParameterInfo, RasterInfoRequest,
    SelectByPixelSize,
};
pub use negotiate::configure;
pub use pixel::{BandSelection, Element, PixelBlock, PixelData, PixelType};
pub use select::{effective_cell_size, select_source};
pub use types::{
    OutputDescriptor, PixelBlocks, RasterDescriptor, RasterId, SelectionContext, TileProps,
    TileRequest,
};

pub use raster_common::{CellSize, CellSizeResolver, Extent, ProjectedCellSize, SpatialReference};
