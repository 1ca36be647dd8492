//! Interface to the screenshot capture step.
//!
//! Driving a browser is left to an external collaborator. This module owns
//! what the rest of the pipeline needs to agree on with it: the request type,
//! the map URL, the UI elements to hide before the screenshot, and how the
//! effective resolution is recovered after the page settles.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{GeosnapError, Result};
use crate::geo::GeoPoint;

/// Control that switches map labels off.
pub const LABELS_TOGGLE_SELECTOR: &str = r#"[jsaction="layerswitcher.intent.labels"]"#;

/// UI overlays hidden before the screenshot is taken.
pub const OVERLAY_SELECTORS: [&str; 8] = [
    "#omnibox-container",
    "#assistive-chips",
    "#vasquette",
    "#minimap",
    "#watermark",
    "#runway",
    ".app-bottom-content-anchor",
    ".scene-footer-container",
];

/// One screenshot to take and georeference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaptureRequest {
    /// Where the screenshot is (or will be) saved.
    pub path: PathBuf,
    pub latitude: f64,
    pub longitude: f64,
    /// Requested ground span of the square viewport, in meters.
    pub resolution_m: f64,
}

impl CaptureRequest {
    pub fn new(path: impl Into<PathBuf>, center: GeoPoint, resolution_m: f64) -> Self {
        Self {
            path: path.into(),
            latitude: center.latitude,
            longitude: center.longitude,
            resolution_m,
        }
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// What the capture step hands back.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptureOutput {
    pub path: PathBuf,
    /// Resolution actually rendered. Hiding the UI chrome changes the map
    /// scale, so this can differ from the requested value.
    pub effective_resolution_m: f64,
}

/// Produces a saved screenshot for a request.
///
/// A session is created once per run and reused for every request.
pub trait MapCapture {
    fn capture(&mut self, request: &CaptureRequest) -> Result<CaptureOutput>;
}

/// Satellite view URL centered on `(lat, lon)` showing `resolution_m` meters.
pub fn map_url(host: &str, lat: f64, lon: f64, resolution_m: f64) -> String {
    format!("https://{host}/maps/@{lat},{lon},{resolution_m}m/data=!3m1!1e3")
}

/// Read the resolution back out of a map URL, e.g. `127` from
/// `https://host/maps/@-34.04,18.34,127m/data=!3m1!1e3`.
pub fn parse_resolution_from_url(url: &str) -> Result<f64> {
    let err = || GeosnapError::MapUrl(url.to_string());

    let view = url.split_once('@').map(|(_, rest)| rest).ok_or_else(err)?;
    let view = view.split('/').next().ok_or_else(err)?;
    let field = view.split(',').nth(2).ok_or_else(err)?;
    let value = field.strip_suffix('m').ok_or_else(err)?;
    let resolution: f64 = value.parse().map_err(|_| err())?;
    if !resolution.is_finite() || resolution <= 0.0 {
        return Err(err());
    }
    Ok(resolution)
}

/// Capture backed by screenshots that are already on disk.
///
/// The effective resolution is taken from a sidecar file `<path>.url` holding
/// the post-render map URL when present, and from the request otherwise.
#[derive(Clone, Debug, Default)]
pub struct StoredCapture {
    root: Option<PathBuf>,
}

impl StoredCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative request paths against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Path of the sidecar file recording the post-render URL of `screenshot`.
pub fn url_sidecar_path(screenshot: &Path) -> PathBuf {
    let mut name = screenshot.as_os_str().to_owned();
    name.push(".url");
    PathBuf::from(name)
}

impl MapCapture for StoredCapture {
    fn capture(&mut self, request: &CaptureRequest) -> Result<CaptureOutput> {
        let path = self.resolve(&request.path);
        if !path.is_file() {
            return Err(GeosnapError::MissingScreenshot(path));
        }

        let sidecar = url_sidecar_path(&path);
        let effective_resolution_m = if sidecar.is_file() {
            let url = fs::read_to_string(&sidecar)?;
            let resolution = parse_resolution_from_url(url.trim())?;
            if resolution != request.resolution_m {
                warn!(
                    requested = request.resolution_m,
                    effective = resolution,
                    "Rendered resolution differs from request"
                );
            }
            resolution
        } else {
            request.resolution_m
        };

        debug!(path = %path.display(), effective_resolution_m, "Using stored screenshot");
        Ok(CaptureOutput {
            path,
            effective_resolution_m,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_appends_extension() {
        let p = url_sidecar_path(Path::new("outputs/tp_200.png"));
        assert_eq!(p, PathBuf::from("outputs/tp_200.png.url"));
    }

    #[test]
    fn resolve_joins_relative_paths_only() {
        let cap = StoredCapture::with_root("/data");
        assert_eq!(cap.resolve(Path::new("a.png")), PathBuf::from("/data/a.png"));
        assert_eq!(cap.resolve(Path::new("/abs/a.png")), PathBuf::from("/abs/a.png"));
    }
}
