//! Geodesic destination-point computation.
//!
//! Given a start point, a distance and a bearing, find the point reached on
//! the Earth's surface. Two earth models are available: a sphere (the default,
//! matching the common great-circle helpers used by web mapping tools) and the
//! WGS84 ellipsoid via Vincenty's direct formula.

mod sphere;
mod vincenty;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{WGS84_FLATTENING, WGS84_SEMI_MAJOR_M};
use crate::error::{GeosnapError, Result};

pub use sphere::sphere_destination;
pub use vincenty::vincenty_destination;

pub const BEARING_NORTH: f64 = 0.0;
pub const BEARING_EAST: f64 = 90.0;
pub const BEARING_SOUTH: f64 = 180.0;
pub const BEARING_WEST: f64 = 270.0;

/// A latitude/longitude pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Reject non-finite values and coordinates outside [-90, 90] / [-180, 180].
    pub fn validated(self) -> Result<Self> {
        let lat_ok = self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude);
        let lon_ok = self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude);
        if lat_ok && lon_ok {
            Ok(self)
        } else {
            Err(GeosnapError::InvalidCoordinate {
                lat: self.latitude,
                lon: self.longitude,
            })
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.7}, {:.7}", self.latitude, self.longitude)
    }
}

/// Shape of the Earth used for destination calculations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum EarthModel {
    /// Sphere of the given radius. Great-circle formula.
    Sphere { radius_m: f64 },
    /// WGS84 ellipsoid. Vincenty's direct formula.
    Wgs84,
}

impl Default for EarthModel {
    fn default() -> Self {
        Self::Sphere {
            radius_m: WGS84_SEMI_MAJOR_M,
        }
    }
}

impl EarthModel {
    /// Reject a sphere whose radius is not finite and positive.
    pub fn validated(self) -> Result<Self> {
        match self {
            Self::Sphere { radius_m } if !(radius_m.is_finite() && radius_m > 0.0) => {
                Err(GeosnapError::InvalidEarthRadius(radius_m))
            }
            _ => Ok(self),
        }
    }

    /// Smallest meridional radius of curvature. Converting a north-south
    /// distance with it never underestimates the angle travelled.
    pub fn min_meridian_radius_m(&self) -> f64 {
        match *self {
            Self::Sphere { radius_m } => radius_m,
            // a(1 - e^2), reached at the equator; 1 - e^2 = (1 - f)^2.
            Self::Wgs84 => WGS84_SEMI_MAJOR_M * (1.0 - WGS84_FLATTENING).powi(2),
        }
    }
}

impl fmt::Display for EarthModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sphere { radius_m } => write!(f, "Sphere (r = {radius_m} m)"),
            Self::Wgs84 => write!(f, "WGS84 ellipsoid"),
        }
    }
}

/// Point reached by travelling `distance_m` from `start` along `bearing_deg`
/// (0 = north, clockwise).
pub fn destination_point(
    start: GeoPoint,
    distance_m: f64,
    bearing_deg: f64,
    model: EarthModel,
) -> GeoPoint {
    match model {
        EarthModel::Sphere { radius_m } => {
            sphere_destination(start, distance_m, bearing_deg, radius_m)
        }
        EarthModel::Wgs84 => vincenty_destination(start, distance_m, bearing_deg),
    }
}

/// Wrap a longitude in radians into [-PI, PI] when it has left that range.
pub(crate) fn normalize_longitude_rad(lon: f64) -> f64 {
    use std::f64::consts::PI;
    if (-PI..=PI).contains(&lon) {
        lon
    } else {
        (lon + 3.0 * PI).rem_euclid(2.0 * PI) - PI
    }
}
