use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::capture::CaptureRequest;
use crate::consts::{DEFAULT_GEOTIFF_EXTENSION, DEFAULT_MAP_HOST, DEFAULT_VIEWPORT_PX};
use crate::error::Result;
use crate::geo::{EarthModel, GeoPoint};
use crate::io::geotiff::GeoTiffCompression;

/// Hout Bay, Western Cape.
pub const HOUT_BAY: GeoPoint = GeoPoint::new(-34.0460495, 18.344531);

/// Turret Peak, Cederberg.
pub const TURRET_PEAK: GeoPoint = GeoPoint::new(-32.87282171722992, 19.19763384584335);

/// Resolutions captured by the default batch, in meters.
pub const DEFAULT_RESOLUTIONS_M: [f64; 4] = [200.0, 400.0, 800.0, 1600.0];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default)]
    pub capture: CaptureConfig,
    #[serde(default)]
    pub georef: GeorefOptions,
    #[serde(default)]
    pub requests: Vec<CaptureRequest>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            capture: CaptureConfig::default(),
            georef: GeorefOptions::default(),
            requests: default_requests(),
        }
    }
}

impl BatchConfig {
    /// Parse a config and reject an unusable earth model up front.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.georef.earth_model.validated()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Settings shared with the screenshot collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    pub host: String,
    /// Square viewport edge in pixels.
    pub viewport_px: u32,
}

impl CaptureConfig {
    /// Whether a captured raster has the configured square viewport size.
    pub fn matches_viewport(&self, width: u32, height: u32) -> bool {
        width == self.viewport_px && height == self.viewport_px
    }
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_MAP_HOST.to_string(),
            viewport_px: DEFAULT_VIEWPORT_PX,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeorefOptions {
    /// Appended to the screenshot path to name the GeoTIFF.
    pub extension: String,
    pub compression: GeoTiffCompression,
    pub earth_model: EarthModel,
}

impl Default for GeorefOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_GEOTIFF_EXTENSION.to_string(),
            compression: GeoTiffCompression::default(),
            earth_model: EarthModel::default(),
        }
    }
}

impl fmt::Display for GeorefOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, .{}, {} compression",
            self.earth_model, self.extension, self.compression
        )
    }
}

/// Turret Peak at each of [`DEFAULT_RESOLUTIONS_M`], saved under `outputs/`.
pub fn default_requests() -> Vec<CaptureRequest> {
    DEFAULT_RESOLUTIONS_M
        .iter()
        .map(|&res| {
            CaptureRequest::new(
                PathBuf::from(format!("outputs/tp_{res}.png")),
                TURRET_PEAK,
                res,
            )
        })
        .collect()
}
