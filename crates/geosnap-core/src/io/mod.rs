pub mod geotiff;
pub mod raster;
