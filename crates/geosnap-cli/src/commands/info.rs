use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use geosnap_core::io::geotiff::read_geotiff_info;

#[derive(Args)]
pub struct InfoArgs {
    /// GeoTIFF file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let info = read_geotiff_info(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let (west, south, east, north) = info.georef.bounds(info.width, info.height);

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", info.width, info.height);
    println!(
        "Samples:     {} (photometric {}, extra {:?})",
        info.samples_per_pixel, info.photometric, info.extra_samples
    );
    println!("Tie-point:   {:?}", info.georef.tiepoint);
    println!("Scale:       {:?}", info.georef.pixel_scale);
    println!("Bounds:      W {west:.7}  S {south:.7}  E {east:.7}  N {north:.7}");
    for key in &info.geo_keys {
        println!("GeoKey:      {} = {}", key.id, key.value);
    }

    Ok(())
}
