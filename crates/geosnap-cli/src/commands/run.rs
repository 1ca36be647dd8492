use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use geosnap_core::capture::StoredCapture;
use geosnap_core::pipeline::config::BatchConfig;
use geosnap_core::pipeline::{run_batch_reported, PipelineStage, ProgressReporter};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::CompressionArg;
use crate::summary::{print_batch_results, print_batch_summary};

#[derive(Args)]
pub struct RunArgs {
    /// Batch config file (TOML). Defaults to the built-in Turret Peak series.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory that relative screenshot paths are resolved against
    #[arg(long)]
    pub screenshots: Option<PathBuf>,

    /// Override the configured strip compression
    #[arg(long, value_enum)]
    pub compression: Option<CompressionArg>,
}

struct BarReporter {
    pb: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage, _total_items: Option<usize>) {
        self.pb.set_message(stage.to_string());
    }

    fn advance(&self, items_done: usize) {
        self.pb.set_position(items_done as u64);
    }

    fn finish_stage(&self) {
        self.pb.finish_with_message("Done");
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let mut config = if let Some(ref config_path) = args.config {
        BatchConfig::load(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?
    } else {
        BatchConfig::default()
    };
    if let Some(compression) = args.compression {
        config.georef.compression = compression.into();
    }

    info!(requests = config.requests.len(), "Loaded batch config");
    print_batch_summary(&config);

    let mut capture = match args.screenshots {
        Some(ref dir) => StoredCapture::with_root(dir),
        None => StoredCapture::new(),
    };

    let pb = ProgressBar::new(config.requests.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:20} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = BarReporter { pb };

    let items = run_batch_reported(&config, &mut capture, &reporter)?;
    print_batch_results(&items);

    Ok(())
}
