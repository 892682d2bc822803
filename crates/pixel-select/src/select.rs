//! Per-tile source selection.

use raster_common::CellSizeResolver;

use crate::error::Result;
use crate::types::{RasterId, SelectionContext, TileRequest};

/// Effective cell size of a tile request, in the context's spatial
/// reference, collapsed to one scalar.
pub fn effective_cell_size<R>(
    ctx: &SelectionContext,
    tile: &TileRequest,
    resolver: &R,
) -> Result<f64>
where
    R: CellSizeResolver + ?Sized,
{
    let cell_size = resolver.cell_size(&tile.props.geometry(), ctx.spatial_reference())?;
    Ok(cell_size.mean())
}

/// Decide which input raster answers `tile`.
///
/// Pure in `ctx`, `tile`, and the resolver; safe to call before any pixels
/// are fetched and from any number of threads.
pub fn select_source<R>(
    ctx: &SelectionContext,
    tile: &TileRequest,
    resolver: &R,
) -> Result<RasterId>
where
    R: CellSizeResolver + ?Sized,
{
    let c = effective_cell_size(ctx, tile, resolver)?;
    let chosen = ctx.choose(c);

    tracing::trace!(
        cell_size = c,
        threshold = ctx.threshold(),
        raster = %chosen,
        "Selected source raster"
    );

    Ok(chosen)
}
