mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "geosnap", about = "Georeference satellite map screenshots as GeoTIFF")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Georeference a single screenshot
    Georef(commands::georef::GeorefArgs),
    /// Georeference a batch of stored screenshots
    Run(commands::run::RunArgs),
    /// Print or save the default batch config
    Config(commands::config::ConfigArgs),
    /// Show GeoTIFF georeferencing metadata
    Info(commands::info::InfoArgs),
    /// Print the capture URL and overlays to hide
    Url(commands::url::UrlArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Georef(args) => commands::georef::run(args),
        Commands::Run(args) => commands::run::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Url(args) => commands::url::run(args),
    }
}
