/// WGS84 semi-major axis in meters. Also the default radius of the spherical earth model.
pub const WGS84_SEMI_MAJOR_M: f64 = 6_378_137.0;

/// WGS84 flattening.
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257_223_563;

/// Convergence threshold (radians) for Vincenty's direct formula.
pub const VINCENTY_TOLERANCE: f64 = 1e-12;

/// Iteration cap for Vincenty's direct formula.
pub const VINCENTY_MAX_ITERATIONS: usize = 200;

/// Default map host queried by the capture step.
pub const DEFAULT_MAP_HOST: &str = "www.google.com";

/// Default square viewport edge (pixels) of a capture.
pub const DEFAULT_VIEWPORT_PX: u32 = 1024;

/// Default extension appended to a screenshot path for its GeoTIFF.
pub const DEFAULT_GEOTIFF_EXTENSION: &str = "tif";

/// Number of samples per pixel in a captured raster (R, G, B, A).
pub const RGBA_CHANNEL_COUNT: usize = 4;

// GeoTIFF tag IDs.
pub const TAG_MODEL_PIXEL_SCALE: u16 = 33550;
pub const TAG_MODEL_TIEPOINT: u16 = 33922;
pub const TAG_GEO_KEY_DIRECTORY: u16 = 34735;

// GeoKey IDs.
pub const GT_MODEL_TYPE_GEO_KEY: u16 = 1024;
pub const GT_RASTER_TYPE_GEO_KEY: u16 = 1025;
pub const GEOGRAPHIC_TYPE_GEO_KEY: u16 = 2048;

// GeoKey values.
pub const MODEL_TYPE_GEOGRAPHIC: u16 = 2;
pub const RASTER_PIXEL_IS_AREA: u16 = 1;
pub const GCS_WGS84: u16 = 4326;

/// ExtraSamples value marking the fourth channel as alpha rather than color.
pub const EXTRA_SAMPLE_ASSOCIATED_ALPHA: u16 = 1;
