//! Generators for synthetic pixel blocks.
//!
//! Every value encodes its own position so tests can verify which band,
//! row, and column ended up where after band selection.

use ndarray::{Array2, Array3};

/// Value stored at `(band, row, col)` by [`create_band_stack`].
pub fn band_value(band: usize, row: usize, col: usize) -> f32 {
    (band * 1_000_000 + col * 1000 + row) as f32
}

/// Creates a `bands x rows x cols` stack with values from [`band_value`].
///
/// # Example
///
/// ```
/// use test_utils::create_band_stack;
///
/// let stack = create_band_stack(3, 2, 4);
/// assert_eq!(stack.dim(), (3, 2, 4));
/// assert_eq!(stack[[0, 0, 0]], 0.0);
/// assert_eq!(stack[[0, 0, 1]], 1000.0);     // col=1
/// assert_eq!(stack[[0, 1, 0]], 1.0);        // row=1
/// assert_eq!(stack[[2, 0, 0]], 2_000_000.0); // band=2
/// ```
pub fn create_band_stack(bands: usize, rows: usize, cols: usize) -> Array3<f32> {
    Array3::from_shape_fn((bands, rows, cols), |(b, r, c)| band_value(b, r, c))
}

/// Creates a single `rows x cols` band; identical to band 0 of
/// [`create_band_stack`].
pub fn create_test_band(rows: usize, cols: usize) -> Array2<f32> {
    Array2::from_shape_fn((rows, cols), |(r, c)| band_value(0, r, c))
}

/// Creates a checkerboard validity mask (1 = valid, 0 = no data).
pub fn create_checkerboard_mask(rows: usize, cols: usize) -> Array2<u8> {
    Array2::from_shape_fn((rows, cols), |(r, c)| ((r + c) % 2 == 0) as u8)
}

/// Creates a banded mask where band `b` is valid everywhere except column `b`.
///
/// Useful for checking the mask is sliced with the same bands as the pixels.
pub fn create_banded_mask(bands: usize, rows: usize, cols: usize) -> Array3<u8> {
    Array3::from_shape_fn((bands, rows, cols), |(b, _, c)| (c != b) as u8)
}
