use std::path::PathBuf;

use thiserror::Error;

use crate::geo::GeoPoint;

#[derive(Error, Debug)]
pub enum GeosnapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("Invalid resolution: {0} m (must be finite and positive)")]
    InvalidResolution(f64),

    #[error("Invalid earth radius: {0} m (must be finite and positive)")]
    InvalidEarthRadius(f64),

    #[error("A {resolution_m} m capture around {center} reaches a pole")]
    PolarCapture { center: GeoPoint, resolution_m: f64 },

    #[error("Degenerate pixel scale: {scale_x} x {scale_y} degrees")]
    DegenerateScale { scale_x: f64, scale_y: f64 },

    #[error("Invalid coordinate: lat {lat}, lon {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("Cannot read resolution from map URL: {0}")]
    MapUrl(String),

    #[error("Screenshot not found: {}", .0.display())]
    MissingScreenshot(PathBuf),

    #[error("Missing GeoTIFF tag: {0}")]
    MissingGeoTag(&'static str),

    #[error("Request {index} ({}) failed: {source}", .path.display())]
    Request {
        index: usize,
        path: PathBuf,
        #[source]
        source: Box<GeosnapError>,
    },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("TIFF error: {0}")]
    Tiff(#[from] tiff::TiffError),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GeosnapError>;
