//! Shape the chosen raster's block into the requested output block.

use crate::error::{Result, SelectError};
use crate::pixel::{BandSelection, PixelBlock, PixelType};

/// Number of bands an output shape asks for.
fn requested_bands(output_shape: &[usize]) -> Result<usize> {
    match output_shape {
        [_, _] => Ok(1),
        [0, _, _] => Err(SelectError::invalid_shape(
            "output shape requests zero bands",
        )),
        [bands, _, _] => Ok(*bands),
        other => Err(SelectError::invalid_shape(format!(
            "output shape must be 2-D or 3-D, got {:?}",
            other
        ))),
    }
}

/// Pick the band selection for `input_bands` available and `output_bands`
/// requested. Callers must have checked `input_bands >= output_bands`.
fn plan(input_bands: usize, output_bands: usize) -> BandSelection {
    match (input_bands, output_bands) {
        (1, _) => BandSelection::All,
        (_, 1) => BandSelection::First,
        (_, n) => BandSelection::Leading(n),
    }
}

/// Trim `block` to the requested band count and cast it.
///
/// Pixels are cast to `pixel_type`, the mask to `u8`. Row and column axes
/// pass through untouched. The result owns fresh buffers.
pub fn adapt(
    block: &PixelBlock,
    output_shape: &[usize],
    pixel_type: PixelType,
) -> Result<PixelBlock> {
    if block.pixels.ndim() != block.mask.ndim() {
        return Err(SelectError::invalid_shape(format!(
            "mask shape {:?} does not match pixel shape {:?}",
            block.mask.shape(),
            block.pixels.shape()
        )));
    }

    let input_bands = block.pixels.band_count();
    let output_bands = requested_bands(output_shape)?;
    if input_bands < output_bands {
        return Err(SelectError::InsufficientBands {
            requested: output_bands,
            available: input_bands,
        });
    }

    let selection = plan(input_bands, output_bands);
    tracing::trace!(
        input_bands,
        output_bands,
        ?selection,
        pixel_type = %pixel_type,
        "Adapting pixel block"
    );

    let pixels = block.pixels.select_bands(selection)?.into_type(pixel_type);
    let mask = block.mask.select_bands(selection)?.into_type(PixelType::U8);

    Ok(PixelBlock { pixels, mask })
}
