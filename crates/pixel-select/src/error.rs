//! Error types for pixel-size selection.

use raster_common::{Extent, GeometryError};
use thiserror::Error;

use crate::types::RasterId;

/// Errors that can occur while configuring the selector or adapting a tile.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectError {
    /// The two input rasters share no spatial overlap.
    #[error("the input rasters do not overlap: r1 {r1} vs r2 {r2}")]
    NonOverlappingExtents { r1: Extent, r2: Extent },

    /// The chosen source has fewer bands than the request asks for.
    #[error("number of bands of the request ({requested}) exceeds that of the input raster ({available})")]
    InsufficientBands { requested: usize, available: usize },

    /// A raster descriptor failed validation.
    #[error("invalid raster descriptor: {0}")]
    InvalidDescriptor(String),

    /// Pixel block or requested output shape is malformed.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// The host did not supply the block for the selected raster.
    #[error("no pixel block supplied for {0}")]
    MissingPixelBlock(RasterId),

    /// Cell-size resolution failed.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SelectError {
    /// Create an InvalidShape error.
    pub fn invalid_shape(msg: impl Into<String>) -> Self {
        Self::InvalidShape(msg.into())
    }

    /// Create an InvalidDescriptor error.
    pub fn invalid_descriptor(msg: impl Into<String>) -> Self {
        Self::InvalidDescriptor(msg.into())
    }

    /// Whether the error ends the whole processing session rather than a
    /// single tile request.
    pub fn is_fatal_for_session(&self) -> bool {
        matches!(
            self,
            Self::NonOverlappingExtents { .. } | Self::InvalidDescriptor(_) | Self::Config(_)
        )
    }
}

impl From<ndarray::ShapeError> for SelectError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::InvalidShape(err.to_string())
    }
}

impl From<serde_json::Error> for SelectError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {}", err))
    }
}

/// Result type for selector operations.
pub type Result<T> = std::result::Result<T, SelectError>;
