//! Error types for geometry operations.

use thiserror::Error;

use crate::SpatialReference;

/// Result type alias using GeometryError.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised while resolving tile geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("No transform available from {from} to {to}")]
    UnsupportedTransform {
        from: SpatialReference,
        to: SpatialReference,
    },

    #[error("Tile has no pixels ({width}x{height})")]
    EmptyTile { width: usize, height: usize },

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Unsupported spatial reference: {0}")]
    UnsupportedSpatialReference(String),
}

impl GeometryError {
    /// Create an UnsupportedTransform error.
    pub fn unsupported_transform(from: SpatialReference, to: SpatialReference) -> Self {
        Self::UnsupportedTransform { from, to }
    }

    /// Create an InvalidCoordinate error.
    pub fn invalid_coordinate(msg: impl Into<String>) -> Self {
        Self::InvalidCoordinate(msg.into())
    }
}
