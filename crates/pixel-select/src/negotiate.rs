//! Session setup: reconcile the two input rasters into one output geometry.

use raster_common::SpatialReference;

use crate::error::{Result, SelectError};
use crate::types::{OutputDescriptor, RasterDescriptor, SelectionContext};

/// Validate the inputs and fix the threshold and output geometry.
///
/// `threshold` of `None` or `<= 0` is replaced by the mean of the absolute
/// cell-size components of both inputs. Any other value, NaN included, is
/// kept as given. The output takes the
/// intersection of the input extents, the per-axis average cell size, and
/// the smaller band count.
pub fn configure(
    r1: &RasterDescriptor,
    r2: &RasterDescriptor,
    output_spatial_reference: SpatialReference,
    threshold: Option<f64>,
) -> Result<SelectionContext> {
    for (name, raster) in [("r1", r1), ("r2", r2)] {
        if raster.band_count == 0 {
            return Err(SelectError::invalid_descriptor(format!(
                "{} has no bands",
                name
            )));
        }
    }

    let intersection = r1.extent.intersection(&r2.extent).ok_or_else(|| {
        tracing::warn!(r1 = %r1.extent, r2 = %r2.extent, "Input rasters do not overlap");
        SelectError::NonOverlappingExtents {
            r1: r1.extent,
            r2: r2.extent,
        }
    })?;

    let threshold = resolve_threshold(r1, r2, threshold);

    let output = OutputDescriptor {
        band_count: r1.band_count.min(r2.band_count),
        cell_size: r1.cell_size.average(&r2.cell_size),
        extent: intersection,
        native_extent: intersection,
        resampling: true,
        spatial_reference: output_spatial_reference,
    };

    tracing::info!(
        threshold,
        band_count = output.band_count,
        extent = %output.extent,
        spatial_reference = %output.spatial_reference,
        "Configured pixel-size selection"
    );

    Ok(SelectionContext::new(threshold, output))
}

fn resolve_threshold(
    r1: &RasterDescriptor,
    r2: &RasterDescriptor,
    requested: Option<f64>,
) -> f64 {
    match requested {
        Some(t) if t > 0.0 || t.is_nan() => t,
        _ => {
            let components = [
                r1.cell_size.x,
                r1.cell_size.y,
                r2.cell_size.x,
                r2.cell_size.y,
            ];
            let mean = components.iter().map(|c| c.abs()).sum::<f64>() / components.len() as f64;
            tracing::debug!(threshold = mean, "Derived threshold from input cell sizes");
            mean
        }
    }
}
