use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use geosnap_core::consts::DEFAULT_GEOTIFF_EXTENSION;
use geosnap_core::geo::{EarthModel, GeoPoint};
use geosnap_core::pipeline::config::GeorefOptions;
use geosnap_core::pipeline::{geotiff_path, georeference_to};

use super::CompressionArg;
use crate::summary::print_georef_summary;

#[derive(Args)]
pub struct GeorefArgs {
    /// Screenshot to georeference (PNG or any common raster format)
    pub file: PathBuf,

    /// Latitude of the image center in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude of the image center in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Ground span of the image in meters
    #[arg(long)]
    pub resolution: f64,

    /// Output path (default: <file>.tif)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Strip compression
    #[arg(long, value_enum, default_value = "none")]
    pub compression: CompressionArg,

    /// Use the WGS84 ellipsoid instead of the spherical model
    #[arg(long)]
    pub ellipsoid: bool,
}

pub fn run(args: &GeorefArgs) -> Result<()> {
    let options = GeorefOptions {
        extension: DEFAULT_GEOTIFF_EXTENSION.to_string(),
        compression: args.compression.into(),
        earth_model: if args.ellipsoid {
            EarthModel::Wgs84
        } else {
            EarthModel::default()
        },
    };
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| geotiff_path(&args.file, &options.extension));
    let center = GeoPoint::new(args.lat, args.lon);

    let result = georeference_to(&args.file, &output, center, args.resolution, &options)
        .with_context(|| {
            format!(
                "Failed to georeference {} into {}",
                args.file.display(),
                output.display()
            )
        })?;

    print_georef_summary(&result.output, result.width, result.height, &result.georef);
    Ok(())
}
