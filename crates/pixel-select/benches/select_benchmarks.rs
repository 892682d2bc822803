//! Benchmarks for per-tile selection and block adaptation.
//!
//! Run with: cargo bench --package pixel-select --bench select_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pixel_select::{
    adapt, configure, select_source, Extent, PixelBlock, PixelType, ProjectedCellSize,
    RasterDescriptor, SelectionContext, SpatialReference, TileProps, TileRequest,
};
use test_utils::{cell, create_band_stack, create_banded_mask, extent, extent_for, tile};

fn create_context() -> SelectionContext {
    let r1 = RasterDescriptor::new(
        extent::SQUARE_10.into(),
        cell::FINE.into(),
        4,
        SpatialReference::Epsg3857,
    );
    let r2 = RasterDescriptor::new(
        extent::SHIFTED_5.into(),
        cell::COARSE.into(),
        3,
        SpatialReference::Epsg3857,
    );
    // Fixture extents overlap
    match configure(&r1, &r2, SpatialReference::Epsg3857, None) {
        Ok(ctx) => ctx,
        Err(e) => panic!("benchmark setup failed: {}", e),
    }
}

fn create_tile(sr: SpatialReference, shape: Vec<usize>) -> TileRequest {
    let extent = match sr {
        SpatialReference::Epsg3857 => extent_for(tile::SIZE, tile::SIZE, 2.5).into(),
        _ => Extent::new(-100.0, 30.0, -99.0, 31.0),
    };
    TileRequest {
        top_left_corner: (0.0, 0.0),
        shape,
        props: TileProps {
            extent,
            width: tile::SIZE,
            height: tile::SIZE,
            spatial_reference: sr,
            pixel_type: PixelType::U8,
        },
    }
}

fn bench_select_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_source");
    let ctx = create_context();

    for sr in [SpatialReference::Epsg3857, SpatialReference::Epsg4326] {
        let tile = create_tile(sr, vec![tile::SIZE, tile::SIZE]);
        group.bench_with_input(BenchmarkId::from_parameter(sr), &tile, |b, tile| {
            b.iter(|| select_source(black_box(&ctx), black_box(tile), &ProjectedCellSize))
        });
    }

    group.finish();
}

fn bench_adapt(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapt");
    let size = tile::SIZE;

    for (bands, requested) in [(1, tile::SINGLE_BAND), (4, tile::SINGLE_BAND), (4, tile::RGB)] {
        let block = PixelBlock::new(
            create_band_stack(bands, size, size).into_dyn(),
            create_banded_mask(bands, size, size).into_dyn(),
        );
        let shape = if requested == 1 {
            vec![size, size]
        } else {
            vec![requested, size, size]
        };

        group.throughput(Throughput::Elements((requested * size * size) as u64));
        group.bench_with_input(
            BenchmarkId::new(format!("{}_to_{}", bands, requested), size),
            &block,
            |b, block| b.iter(|| adapt(black_box(block), &shape, PixelType::U8)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_select_source, bench_adapt);
criterion_main!(benches);
