use super::{normalize_longitude_rad, GeoPoint};

/// Great-circle destination on a sphere of radius `radius_m`.
pub fn sphere_destination(
    start: GeoPoint,
    distance_m: f64,
    bearing_deg: f64,
    radius_m: f64,
) -> GeoPoint {
    let delta = distance_m / radius_m;
    let theta = bearing_deg.to_radians();
    let phi1 = start.latitude.to_radians();
    let lambda1 = start.longitude.to_radians();

    let (sin_phi1, cos_phi1) = phi1.sin_cos();
    let (sin_delta, cos_delta) = delta.sin_cos();

    let phi2 = (sin_phi1 * cos_delta + cos_phi1 * sin_delta * theta.cos()).asin();
    let lambda2 = lambda1
        + (theta.sin() * sin_delta * cos_phi1).atan2(cos_delta - sin_phi1 * phi2.sin());

    GeoPoint::new(
        phi2.to_degrees(),
        normalize_longitude_rad(lambda2).to_degrees(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::WGS84_SEMI_MAJOR_M;

    #[test]
    fn zero_distance_returns_start() {
        let p = GeoPoint::new(-34.0460495, 18.344531);
        let q = sphere_destination(p, 0.0, 123.0, WGS84_SEMI_MAJOR_M);
        assert!((p.latitude - q.latitude).abs() < 1e-12);
        assert!((p.longitude - q.longitude).abs() < 1e-12);
    }

    #[test]
    fn quarter_circumference_north_reaches_pole() {
        let quarter = std::f64::consts::FRAC_PI_2 * WGS84_SEMI_MAJOR_M;
        let q = sphere_destination(GeoPoint::new(0.0, 10.0), quarter, 0.0, WGS84_SEMI_MAJOR_M);
        assert!((q.latitude - 90.0).abs() < 1e-6);
    }
}
