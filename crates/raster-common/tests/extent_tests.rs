//! Tests for Extent operations.

use raster_common::extent::Extent;

// ============================================================================
// Constructor tests
// ============================================================================

#[test]
fn test_extent_new() {
    let extent = Extent::new(-180.0, -90.0, 180.0, 90.0);
    assert_eq!(extent.x_min, -180.0);
    assert_eq!(extent.y_min, -90.0);
    assert_eq!(extent.x_max, 180.0);
    assert_eq!(extent.y_max, 90.0);
}

#[test]
fn test_extent_from_tuple() {
    let extent: Extent = (0.0, 1.0, 2.0, 3.0).into();
    assert_eq!(extent.as_tuple(), (0.0, 1.0, 2.0, 3.0));
}

// ============================================================================
// Dimension tests
// ============================================================================

#[test]
fn test_extent_width_crossing_zero() {
    let extent = Extent::new(-10.0, 0.0, 10.0, 10.0);
    assert_eq!(extent.width(), 20.0);
}

#[test]
fn test_extent_height() {
    let extent = Extent::new(0.0, 5.0, 10.0, 25.0);
    assert_eq!(extent.height(), 20.0);
}

// ============================================================================
// Overlap tests
// ============================================================================

#[test]
fn test_extent_overlaps_partial() {
    let a = Extent::new(0.0, 0.0, 10.0, 10.0);
    let b = Extent::new(5.0, 5.0, 15.0, 15.0);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn test_extent_overlaps_disjoint() {
    let a = Extent::new(0.0, 0.0, 10.0, 10.0);
    let b = Extent::new(20.0, 20.0, 30.0, 30.0);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn test_extent_touching_edge_is_not_overlap() {
    let a = Extent::new(0.0, 0.0, 10.0, 10.0);
    let right = Extent::new(10.0, 0.0, 20.0, 10.0);
    let above = Extent::new(0.0, 10.0, 10.0, 20.0);
    assert!(!a.overlaps(&right));
    assert!(!a.overlaps(&above));
}

#[test]
fn test_extent_overlap_in_one_axis_only() {
    let a = Extent::new(0.0, 0.0, 10.0, 10.0);
    let b = Extent::new(5.0, 20.0, 15.0, 30.0);
    assert!(!a.overlaps(&b));
}

#[test]
fn test_extent_contains() {
    let outer = Extent::new(0.0, 0.0, 100.0, 100.0);
    let inner = Extent::new(25.0, 25.0, 75.0, 75.0);
    assert!(outer.overlaps(&inner));
    assert_eq!(outer.intersection(&inner), Some(inner));
}

#[test]
fn test_extent_intersection_none() {
    let a = Extent::new(0.0, 0.0, 10.0, 10.0);
    let b = Extent::new(20.0, 20.0, 30.0, 30.0);
    assert!(a.intersection(&b).is_none());
}

#[test]
fn test_extent_intersection_with_self() {
    let extent = Extent::new(0.0, 0.0, 10.0, 10.0);
    assert_eq!(extent.intersection(&extent), Some(extent));
}

#[test]
fn test_extent_intersection_is_symmetric() {
    let a = Extent::new(-3.0, 1.0, 7.0, 9.0);
    let b = Extent::new(2.0, -4.0, 12.0, 5.0);
    assert_eq!(a.intersection(&b), b.intersection(&a));
    assert_eq!(a.intersection(&b), Some(Extent::new(2.0, 1.0, 7.0, 5.0)));
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_extent_display() {
    let extent = Extent::new(0.0, 0.5, 10.0, 10.5);
    assert_eq!(extent.to_string(), "(0, 0.5, 10, 10.5)");
}
