use anyhow::Result;
use clap::Args;
use geosnap_core::capture::{map_url, LABELS_TOGGLE_SELECTOR, OVERLAY_SELECTORS};
use geosnap_core::consts::DEFAULT_MAP_HOST;

#[derive(Args)]
pub struct UrlArgs {
    /// Latitude of the view center in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude of the view center in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Ground span of the view in meters
    #[arg(long)]
    pub resolution: f64,

    /// Map host
    #[arg(long, default_value = DEFAULT_MAP_HOST)]
    pub host: String,
}

pub fn run(args: &UrlArgs) -> Result<()> {
    println!("{}", map_url(&args.host, args.lat, args.lon, args.resolution));
    println!();
    println!("Labels toggle: {LABELS_TOGGLE_SELECTOR}");
    println!("Hide before capture:");
    for selector in OVERLAY_SELECTORS {
        println!("  {selector}");
    }
    Ok(())
}
