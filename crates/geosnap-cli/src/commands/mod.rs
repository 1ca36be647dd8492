pub mod config;
pub mod georef;
pub mod info;
pub mod run;
pub mod url;

use clap::ValueEnum;
use geosnap_core::io::geotiff::GeoTiffCompression;

#[derive(Clone, Copy, ValueEnum)]
pub enum CompressionArg {
    None,
    Lzw,
    Deflate,
}

impl From<CompressionArg> for GeoTiffCompression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::None => GeoTiffCompression::None,
            CompressionArg::Lzw => GeoTiffCompression::Lzw,
            CompressionArg::Deflate => GeoTiffCompression::Deflate,
        }
    }
}
