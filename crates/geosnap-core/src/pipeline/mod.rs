pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{geotiff_path, georeference_file, georeference_to, run_batch, run_batch_reported};
pub use types::{BatchItem, GeorefOutput, PipelineStage, ProgressReporter};
