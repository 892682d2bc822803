//! Common test fixtures for pixel-select tests.
//!
//! Extents are `(x_min, y_min, x_max, y_max)` tuples so this crate stays
//! free of workspace types.

/// Common extent definitions for testing.
pub mod extent {
    /// Unit square scaled to 10
    pub const SQUARE_10: (f64, f64, f64, f64) = (0.0, 0.0, 10.0, 10.0);

    /// Overlaps `SQUARE_10` in its upper-right quarter
    pub const SHIFTED_5: (f64, f64, f64, f64) = (5.0, 5.0, 15.0, 15.0);

    /// Disjoint from `SQUARE_10`
    pub const FAR_AWAY: (f64, f64, f64, f64) = (20.0, 20.0, 30.0, 30.0);

    /// Shares only the right edge of `SQUARE_10`
    pub const EDGE_ADJACENT: (f64, f64, f64, f64) = (10.0, 0.0, 20.0, 10.0);

    /// Continental United States in geographic degrees
    pub const CONUS: (f64, f64, f64, f64) = (-130.0, 20.0, -60.0, 55.0);

    /// Continental United States in Web Mercator meters
    pub const CONUS_MERCATOR: (f64, f64, f64, f64) = (
        -14_471_533.803,
        2_273_030.927,
        -6_679_169.448,
        7_361_866.114,
    );
}

/// Common cell sizes for testing.
pub mod cell {
    /// Fine raster cell size (e.g. 2 m imagery)
    pub const FINE: (f64, f64) = (2.0, 2.0);

    /// Coarse raster cell size
    pub const COARSE: (f64, f64) = (4.0, 4.0);

    /// Mean of `FINE` and `COARSE`
    pub const MEAN_THRESHOLD: f64 = 3.0;
}

/// Common tile dimensions.
pub mod tile {
    /// Standard tile edge in pixels
    pub const SIZE: usize = 256;

    /// Requested band counts
    pub const SINGLE_BAND: usize = 1;
    pub const RGB: usize = 3;
}

/// Extent of `cols x rows` pixels at `cell_size` anchored at the origin.
///
/// Handy for building tile requests with a known effective cell size.
pub fn extent_for(cols: usize, rows: usize, cell_size: f64) -> (f64, f64, f64, f64) {
    (0.0, 0.0, cols as f64 * cell_size, rows as f64 * cell_size)
}
