//! Coordinate transforms between the supported spatial references.
//!
//! Only the transforms needed to express a tile footprint in another
//! reference are provided: identity, and geographic <-> spherical Web
//! Mercator. Anything else is reported as unsupported.

use std::f64::consts::PI;

use crate::{Extent, GeometryError, GeometryResult, SpatialReference};

/// Web Mercator sphere radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Latitude limit of the Web Mercator square.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// Points sampled along each edge when transforming an extent.
const EDGE_SAMPLES: usize = 21;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Geographic,
    WebMercator,
    Other(SpatialReference),
}

fn family(sr: SpatialReference) -> Family {
    match sr {
        sr if sr.is_geographic() => Family::Geographic,
        SpatialReference::Epsg3857 => Family::WebMercator,
        other => Family::Other(other),
    }
}

/// Convert lon/lat degrees to Web Mercator meters.
pub fn geographic_to_mercator(lon: f64, lat: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
    let x = EARTH_RADIUS_M * lon.to_radians();
    let y = EARTH_RADIUS_M * (PI / 4.0 + lat.to_radians() / 2.0).tan().ln();
    (x, y)
}

/// Convert Web Mercator meters to lon/lat degrees.
pub fn mercator_to_geographic(x: f64, y: f64) -> (f64, f64) {
    let lon = (x / EARTH_RADIUS_M).to_degrees();
    let lat = (y / EARTH_RADIUS_M).sinh().atan().to_degrees();
    (lon, lat)
}

/// Transform a single point between spatial references.
pub fn transform_point(
    x: f64,
    y: f64,
    from: SpatialReference,
    to: SpatialReference,
) -> GeometryResult<(f64, f64)> {
    if !x.is_finite() || !y.is_finite() {
        return Err(GeometryError::invalid_coordinate(format!("({x}, {y})")));
    }

    match (family(from), family(to)) {
        (a, b) if a == b => Ok((x, y)),
        (Family::Geographic, Family::WebMercator) => Ok(geographic_to_mercator(x, y)),
        (Family::WebMercator, Family::Geographic) => Ok(mercator_to_geographic(x, y)),
        _ => Err(GeometryError::unsupported_transform(from, to)),
    }
}

/// Transform an extent between spatial references.
///
/// Each edge is densified before transforming so curved edges in the
/// target reference are still enclosed by the result.
pub fn transform_extent(
    extent: &Extent,
    from: SpatialReference,
    to: SpatialReference,
) -> GeometryResult<Extent> {
    if from == to {
        return Ok(*extent);
    }

    let mut points = Vec::with_capacity(EDGE_SAMPLES * 4);
    for i in 0..EDGE_SAMPLES {
        let t = i as f64 / (EDGE_SAMPLES - 1) as f64;
        let x = extent.x_min + t * extent.width();
        let y = extent.y_min + t * extent.height();

        points.push(transform_point(x, extent.y_min, from, to)?);
        points.push(transform_point(x, extent.y_max, from, to)?);
        points.push(transform_point(extent.x_min, y, from, to)?);
        points.push(transform_point(extent.x_max, y, from, to)?);
    }

    Extent::from_points(points)
        .ok_or_else(|| GeometryError::invalid_coordinate("empty extent sample"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_origin() {
        let (x, y) = geographic_to_mercator(0.0, 0.0);
        assert!(x.abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn test_antimeridian_maps_to_half_circumference() {
        let (x, _) = geographic_to_mercator(180.0, 0.0);
        assert!((x - 20_037_508.342_789_244).abs() < 1e-6);
    }

    #[test]
    fn test_mercator_roundtrip() {
        let (x, y) = geographic_to_mercator(-100.0, 40.0);
        let (lon, lat) = mercator_to_geographic(x, y);
        assert!((lon - (-100.0)).abs() < 1e-9);
        assert!((lat - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_identity_transform() {
        let extent = Extent::new(1.0, 2.0, 3.0, 4.0);
        let out = transform_extent(
            &extent,
            SpatialReference::Epsg5070,
            SpatialReference::Epsg5070,
        )
        .unwrap();
        assert_eq!(out, extent);
    }

    #[test]
    fn test_geographic_datums_are_interchangeable() {
        let p = transform_point(
            -100.0,
            40.0,
            SpatialReference::Epsg4269,
            SpatialReference::Epsg4326,
        )
        .unwrap();
        assert_eq!(p, (-100.0, 40.0));
    }

    #[test]
    fn test_unsupported_transform() {
        let err = transform_point(
            0.0,
            0.0,
            SpatialReference::Epsg4326,
            SpatialReference::Epsg3413,
        )
        .unwrap_err();
        assert!(matches!(err, GeometryError::UnsupportedTransform { .. }));
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        let err = transform_point(
            f64::NAN,
            0.0,
            SpatialReference::Epsg4326,
            SpatialReference::Epsg3857,
        )
        .unwrap_err();
        assert!(matches!(err, GeometryError::InvalidCoordinate(_)));
    }
}
