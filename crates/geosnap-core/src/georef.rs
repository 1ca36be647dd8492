//! Tie-point and pixel-scale computation for a square map capture.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GeosnapError, Result};
use crate::geo::{
    destination_point, EarthModel, GeoPoint, BEARING_EAST, BEARING_NORTH, BEARING_SOUTH,
    BEARING_WEST,
};

/// Geographic corners of a capture, derived from its center and span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corners {
    pub top_left: GeoPoint,
    pub top_right: GeoPoint,
    pub bottom_left: GeoPoint,
}

/// GeoTIFF georeferencing values for one raster.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Georeference {
    /// `[I, J, K, X, Y, Z]`: raster pixel (I, J) sits at longitude X, latitude Y.
    pub tiepoint: [f64; 6],
    /// `[ScaleX, ScaleY, ScaleZ]`: degrees of longitude and latitude per pixel.
    pub pixel_scale: [f64; 3],
}

impl Georeference {
    /// Geographic coordinate of the raster's top-left corner.
    pub fn origin(&self) -> GeoPoint {
        GeoPoint::new(self.tiepoint[4], self.tiepoint[3])
    }

    /// Geographic coordinate of a (possibly fractional) pixel position.
    /// Rows grow southward.
    pub fn pixel_to_geo(&self, col: f64, row: f64) -> GeoPoint {
        let lon = self.tiepoint[3] + (col - self.tiepoint[0]) * self.pixel_scale[0];
        let lat = self.tiepoint[4] - (row - self.tiepoint[1]) * self.pixel_scale[1];
        GeoPoint::new(lat, lon)
    }

    /// `(west, south, east, north)` of a `width` x `height` raster.
    pub fn bounds(&self, width: u32, height: u32) -> (f64, f64, f64, f64) {
        let top_left = self.pixel_to_geo(0.0, 0.0);
        let bottom_right = self.pixel_to_geo(width as f64, height as f64);
        (
            top_left.longitude,
            bottom_right.latitude,
            bottom_right.longitude,
            top_left.latitude,
        )
    }
}

/// Corners of a square `resolution_m` wide capture centered on `center`.
///
/// The top-left corner is reached by going half the span north, then half the
/// span west. The other two corners are one full span east and south of it.
pub fn compute_corners(center: GeoPoint, resolution_m: f64, model: EarthModel) -> Corners {
    let half = resolution_m / 2.0;
    let top = destination_point(center, half, BEARING_NORTH, model);
    let top_left = destination_point(top, half, BEARING_WEST, model);
    let top_right = destination_point(top_left, resolution_m, BEARING_EAST, model);
    let bottom_left = destination_point(top_left, resolution_m, BEARING_SOUTH, model);
    Corners {
        top_left,
        top_right,
        bottom_left,
    }
}

/// Compute the tie-point and per-pixel scale of a `width` x `height` raster
/// spanning `resolution_m` meters around `center`.
pub fn compute_georeference(
    center: GeoPoint,
    resolution_m: f64,
    width: u32,
    height: u32,
    model: EarthModel,
) -> Result<Georeference> {
    if width == 0 || height == 0 {
        return Err(GeosnapError::InvalidDimensions { width, height });
    }
    if !resolution_m.is_finite() || resolution_m <= 0.0 {
        return Err(GeosnapError::InvalidResolution(resolution_m));
    }
    let center = center.validated()?;
    let model = model.validated()?;

    let half_span_deg = (resolution_m / 2.0 / model.min_meridian_radius_m()).to_degrees();
    if center.latitude.abs() + half_span_deg >= 90.0 {
        return Err(GeosnapError::PolarCapture {
            center,
            resolution_m,
        });
    }

    let corners = compute_corners(center, resolution_m, model);
    let tl = corners.top_left;
    let mut lon_span = corners.top_right.longitude - tl.longitude;
    if lon_span < 0.0 {
        // Capture straddles the antimeridian.
        lon_span += 360.0;
    }
    let scale_x = lon_span / width as f64;
    let scale_y = (tl.latitude - corners.bottom_left.latitude) / height as f64;
    if !(scale_x.is_finite() && scale_x > 0.0 && scale_y.is_finite() && scale_y > 0.0) {
        return Err(GeosnapError::DegenerateScale { scale_x, scale_y });
    }
    let georef = Georeference {
        tiepoint: [0.0, 0.0, 0.0, tl.longitude, tl.latitude, 0.0],
        pixel_scale: [scale_x, scale_y, 0.0],
    };
    debug!(
        %center,
        resolution_m,
        width,
        height,
        scale_x = georef.pixel_scale[0],
        scale_y = georef.pixel_scale[1],
        "Computed georeference"
    );
    Ok(georef)
}
