use crate::consts::{
    VINCENTY_MAX_ITERATIONS, VINCENTY_TOLERANCE, WGS84_FLATTENING, WGS84_SEMI_MAJOR_M,
};

use super::{normalize_longitude_rad, GeoPoint};

/// Destination on the WGS84 ellipsoid (Vincenty's direct formula).
pub fn vincenty_destination(start: GeoPoint, distance_m: f64, bearing_deg: f64) -> GeoPoint {
    let a = WGS84_SEMI_MAJOR_M;
    let f = WGS84_FLATTENING;
    let b = a * (1.0 - f);

    let phi1 = start.latitude.to_radians();
    let lambda1 = start.longitude.to_radians();
    let (sin_alpha1, cos_alpha1) = bearing_deg.to_radians().sin_cos();

    // Reduced latitude.
    let tan_u1 = (1.0 - f) * phi1.tan();
    let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
    let sin_u1 = tan_u1 * cos_u1;

    let sigma1 = tan_u1.atan2(cos_alpha1);
    let sin_alpha = cos_u1 * sin_alpha1;
    let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a =
        1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

    let mut sigma = distance_m / (b * big_a);
    let mut cos_2sigma_m;
    let mut sin_sigma;
    let mut cos_sigma;
    let mut iterations = 0;
    loop {
        cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
        sin_sigma = sigma.sin();
        cos_sigma = sigma.cos();
        let delta_sigma = big_b
            * sin_sigma
            * (cos_2sigma_m
                + big_b / 4.0
                    * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                        - big_b / 6.0
                            * cos_2sigma_m
                            * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                            * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));
        let previous = sigma;
        sigma = distance_m / (b * big_a) + delta_sigma;
        iterations += 1;
        if (sigma - previous).abs() <= VINCENTY_TOLERANCE || iterations >= VINCENTY_MAX_ITERATIONS
        {
            break;
        }
    }
    cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
    sin_sigma = sigma.sin();
    cos_sigma = sigma.cos();

    let x = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
    let phi2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
        .atan2((1.0 - f) * (sin_alpha * sin_alpha + x * x).sqrt());
    let lambda =
        (sin_sigma * sin_alpha1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
    let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
    let l = lambda
        - (1.0 - c)
            * f
            * sin_alpha
            * (sigma
                + c * sin_sigma
                    * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

    GeoPoint::new(
        phi2.to_degrees(),
        normalize_longitude_rad(lambda1 + l).to_degrees(),
    )
}
