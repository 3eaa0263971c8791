//! Tests for the radius bounding box

extern crate std;

use crate::coordinate::{get_bounding_box, BoundingBox, GeoPoint};
use crate::distance::haversine;
use crate::errors::{CoordinateIssue, GeoError};
use crate::test_utils::assert_close;

fn new_york() -> GeoPoint {
    GeoPoint::new(40.6971, -74.2598)
}

#[test]
fn test_bounding_box_new_york_280km() {
    let bbox = get_bounding_box(&new_york(), 280.0).unwrap();
    let expected = [
        -77.57817195169761,
        38.18181720446535,
        -70.94142804830238,
        43.212382795534666,
    ];
    for (actual, expected) in bbox.to_array().iter().zip(expected.iter()) {
        assert_close(*actual, *expected);
    }
    std::assert!(!bbox.crosses_antimeridian());
}

#[test]
fn test_bounding_box_rejects_invalid_center() {
    let result = get_bounding_box(&GeoPoint::new(100.0, 0.0), 10.0);
    std::assert!(matches!(
        result,
        Err(GeoError::InvalidCoordinate(CoordinateIssue::Latitude(_)))
    ));
}

#[test]
fn test_bounding_box_rejects_invalid_distance() {
    for distance in [0.0, -10.0, f64::NAN] {
        let result = get_bounding_box(&new_york(), distance);
        std::assert!(matches!(result, Err(GeoError::InvalidDistance(_))), "distance {}", distance);
    }
}

#[test]
fn test_bounding_box_checks_center_before_distance() {
    let result = get_bounding_box(&GeoPoint::new(0.0, 181.0), -1.0);
    std::assert!(matches!(result, Err(GeoError::InvalidCoordinate(_))));
}

#[test]
fn test_bounding_box_at_north_pole() {
    let bbox = get_bounding_box(&GeoPoint::new(90.0, 0.0), 100.0).unwrap();
    assert_close(bbox.min_lon, -180.0);
    assert_close(bbox.max_lon, 180.0);
    assert_close(bbox.max_lat, 90.0);
    std::assert!(bbox.min_lat < 90.0 && bbox.min_lat > 89.0);
}

#[test]
fn test_bounding_box_at_south_pole() {
    let bbox = get_bounding_box(&GeoPoint::new(-90.0, 45.0), 500.0).unwrap();
    assert_close(bbox.min_lon, -180.0);
    assert_close(bbox.max_lon, 180.0);
    assert_close(bbox.min_lat, -90.0);
    std::assert!(bbox.max_lat > -90.0 && bbox.max_lat < -85.0);
}

#[test]
fn test_bounding_box_radius_reaching_pole_spans_all_longitudes() {
    // 1000 km from 85N passes over the pole
    let bbox = get_bounding_box(&GeoPoint::new(85.0, 10.0), 1000.0).unwrap();
    assert_close(bbox.max_lat, 90.0);
    assert_close(bbox.width(), 360.0);
}

#[test]
fn test_bounding_box_wraps_at_antimeridian() {
    let center = GeoPoint::new(0.0, 179.9);
    let bbox = get_bounding_box(&center, 100.0).unwrap();

    std::assert!(bbox.crosses_antimeridian());
    std::assert!(bbox.min_lon > 178.0 && bbox.min_lon < 179.9);
    std::assert!(bbox.max_lon < -179.0);
    std::assert!(bbox.contains(&center));
    std::assert!(bbox.contains(&GeoPoint::new(0.0, -179.5)));
    std::assert!(!bbox.contains(&GeoPoint::new(0.0, 0.0)));

    let west = get_bounding_box(&GeoPoint::new(0.0, -179.9), 100.0).unwrap();
    std::assert!(west.crosses_antimeridian());
    std::assert!(west.min_lon > 179.0);
}

#[test]
fn test_bounding_box_contains_points_within_radius() {
    let center = new_york();
    let bbox = get_bounding_box(&center, 280.0).unwrap();

    // one degree north, about 111 km away
    let north = GeoPoint::new(41.6971, -74.2598);
    std::assert!(haversine(&center, &north).unwrap() < 280.0);
    std::assert!(bbox.contains(&north));

    let london = GeoPoint::new(51.5074, -0.1278);
    std::assert!(!bbox.contains(&london));
}

#[test]
fn test_bounding_box_corner_contains_points_beyond_radius() {
    // The box encloses the circle, so its corners hold points farther
    // than the radius. Boston sits in the north-east corner.
    let center = new_york();
    let bbox = get_bounding_box(&center, 280.0).unwrap();

    let boston = GeoPoint::new(42.314, -71.2497);
    std::assert!(haversine(&center, &boston).unwrap() > 280.0);
    std::assert!(bbox.contains(&boston));
}

#[test]
fn test_bounding_box_is_symmetric_around_center() {
    let center = GeoPoint::new(-33.8688, 151.2093);
    let bbox = get_bounding_box(&center, 50.0).unwrap();
    assert_close(center.lon - bbox.min_lon, bbox.max_lon - center.lon);
    assert_close(center.lat - bbox.min_lat, bbox.max_lat - center.lat);
}

#[test]
fn test_bounding_box_dimensions_and_display() {
    let bbox = BoundingBox::new(-10.0, -5.0, 10.0, 5.0);
    std::assert_eq!(bbox.width(), 20.0);
    std::assert_eq!(bbox.height(), 10.0);
    std::assert_eq!(bbox.to_string(), "-10,-5,10,5");

    let wrapped = BoundingBox::new(170.0, -5.0, -170.0, 5.0);
    std::assert!(wrapped.crosses_antimeridian());
    std::assert_eq!(wrapped.width(), 20.0);
}
