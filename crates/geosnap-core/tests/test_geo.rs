use approx::assert_abs_diff_eq;

use geosnap_core::consts::WGS84_SEMI_MAJOR_M;
use geosnap_core::geo::{
    destination_point, sphere_destination, vincenty_destination, EarthModel, GeoPoint,
    BEARING_EAST, BEARING_NORTH, BEARING_SOUTH, BEARING_WEST,
};

const ORIGIN: GeoPoint = GeoPoint::new(0.0, 0.0);

#[test]
fn test_sphere_north_one_km() {
    let p = sphere_destination(ORIGIN, 1000.0, BEARING_NORTH, WGS84_SEMI_MAJOR_M);
    let expected = (1000.0 / WGS84_SEMI_MAJOR_M).to_degrees();
    assert_abs_diff_eq!(p.latitude, expected, epsilon = 1e-12);
    assert_abs_diff_eq!(p.longitude, 0.0, epsilon = 1e-12);
}

#[test]
fn test_sphere_east_at_latitude_stretches_longitude() {
    let start = GeoPoint::new(60.0, 10.0);
    let p = sphere_destination(start, 1000.0, BEARING_EAST, WGS84_SEMI_MAJOR_M);
    // At 60 degrees a meter of easting covers twice the longitude it does at the equator.
    let expected = 2.0 * (1000.0 / WGS84_SEMI_MAJOR_M).to_degrees();
    assert_abs_diff_eq!(p.longitude - 10.0, expected, epsilon = 1e-8);
    assert!(p.latitude < 60.0 + 1e-6);
}

#[test]
fn test_sphere_out_and_back_along_meridian() {
    let start = GeoPoint::new(-34.0460495, 18.344531);
    let there = sphere_destination(start, 500.0, BEARING_NORTH, WGS84_SEMI_MAJOR_M);
    let back = sphere_destination(there, 500.0, BEARING_SOUTH, WGS84_SEMI_MAJOR_M);
    assert_abs_diff_eq!(back.longitude, start.longitude, epsilon = 1e-12);
    assert_abs_diff_eq!(back.latitude, start.latitude, epsilon = 1e-12);
}

#[test]
fn test_sphere_west_then_east_lands_near_start() {
    // A great circle heading due west is not a parallel, so the return leg
    // lands a little equatorward of the start latitude.
    let start = GeoPoint::new(-34.0460495, 18.344531);
    let there = sphere_destination(start, 500.0, BEARING_WEST, WGS84_SEMI_MAJOR_M);
    let back = sphere_destination(there, 500.0, BEARING_EAST, WGS84_SEMI_MAJOR_M);
    assert_abs_diff_eq!(back.longitude, start.longitude, epsilon = 1e-9);
    assert_abs_diff_eq!(back.latitude, start.latitude, epsilon = 1e-6);
    assert!(back.latitude > start.latitude);
}

#[test]
fn test_sphere_wraps_across_antimeridian() {
    let start = GeoPoint::new(0.0, 179.9999);
    let p = sphere_destination(start, 1000.0, BEARING_EAST, WGS84_SEMI_MAJOR_M);
    assert!(p.longitude < -179.99, "got {}", p.longitude);
}

#[test]
fn test_vincenty_north_one_km_on_meridian() {
    let p = vincenty_destination(ORIGIN, 1000.0, BEARING_NORTH);
    // Meridional radius of curvature at the equator is a(1 - e^2).
    assert_abs_diff_eq!(p.latitude, 0.009_043_694_8, epsilon = 1e-9);
    assert_abs_diff_eq!(p.longitude, 0.0, epsilon = 1e-12);
}

#[test]
fn test_vincenty_along_equator() {
    let p = vincenty_destination(ORIGIN, 1000.0, BEARING_EAST);
    assert_abs_diff_eq!(p.latitude, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        p.longitude,
        (1000.0 / WGS84_SEMI_MAJOR_M).to_degrees(),
        epsilon = 1e-12
    );
}

#[test]
fn test_vincenty_flinders_peak_to_buninyong() {
    // Reference example from Vincenty's paper as published by Geoscience Australia.
    let flinders = GeoPoint::new(-37.951_033_416_666_67, 144.424_867_888_888_88);
    let p = vincenty_destination(flinders, 54_972.271, 306.868_159_202_777_76);
    assert_abs_diff_eq!(p.latitude, -37.652_821_139, epsilon = 1e-8);
    assert_abs_diff_eq!(p.longitude, 143.926_495_528, epsilon = 1e-8);
}

#[test]
fn test_destination_point_dispatches_on_model() {
    let start = GeoPoint::new(45.0, 5.0);
    let sphere = destination_point(start, 250.0, BEARING_SOUTH, EarthModel::default());
    let direct = sphere_destination(start, 250.0, BEARING_SOUTH, WGS84_SEMI_MAJOR_M);
    assert_eq!(sphere, direct);

    let ellipsoid = destination_point(start, 250.0, BEARING_SOUTH, EarthModel::Wgs84);
    assert_eq!(ellipsoid, vincenty_destination(start, 250.0, BEARING_SOUTH));
    assert_ne!(sphere, ellipsoid);
}

#[test]
fn test_earth_model_display() {
    assert_eq!(format!("{}", EarthModel::Wgs84), "WGS84 ellipsoid");
    let s = format!("{}", EarthModel::default());
    assert!(s.contains("Sphere"), "got: {s}");
    assert!(s.contains("6378137"), "got: {s}");
}
