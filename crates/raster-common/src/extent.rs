//! Axis-aligned raster extents.

use serde::{Deserialize, Serialize};

/// The bounding rectangle of a raster's coverage.
///
/// Coordinates are in the units of the raster's spatial reference
/// (degrees for geographic references, meters for projected ones).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Extent {
    /// Create a new extent from corner coordinates.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Width of the extent in coordinate units.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the extent in coordinate units.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Check whether two extents share a non-degenerate area.
    ///
    /// Touching edges do not count as overlap.
    pub fn overlaps(&self, other: &Extent) -> bool {
        !(self.x_min >= other.x_max
            || self.x_max <= other.x_min
            || self.y_max <= other.y_min
            || self.y_min >= other.y_max)
    }

    /// Compute the intersection of two extents, if they overlap.
    pub fn intersection(&self, other: &Extent) -> Option<Extent> {
        if !self.overlaps(other) {
            return None;
        }

        Some(Extent {
            x_min: self.x_min.max(other.x_min),
            y_min: self.y_min.max(other.y_min),
            x_max: self.x_max.min(other.x_max),
            y_max: self.y_max.min(other.y_max),
        })
    }

    /// Smallest extent enclosing every given point.
    pub fn from_points<I>(points: I) -> Option<Extent>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut iter = points.into_iter();
        let (x0, y0) = iter.next()?;
        let init = Extent::new(x0, y0, x0, y0);

        Some(iter.fold(init, |acc, (x, y)| Extent {
            x_min: acc.x_min.min(x),
            y_min: acc.y_min.min(y),
            x_max: acc.x_max.max(x),
            y_max: acc.y_max.max(y),
        }))
    }

    /// The extent as an `(x_min, y_min, x_max, y_max)` tuple.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.x_min, self.y_min, self.x_max, self.y_max)
    }
}

impl From<(f64, f64, f64, f64)> for Extent {
    fn from((x_min, y_min, x_max, y_max): (f64, f64, f64, f64)) -> Self {
        Self::new(x_min, y_min, x_max, y_max)
    }
}

impl std::fmt::Display for Extent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.x_min, self.y_min, self.x_max, self.y_max
        )
    }
}
