use std::path::PathBuf;

use crate::georef::Georeference;

/// Per-request processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Capturing,
    Georeferencing,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Capturing => write!(f, "Capturing"),
            Self::Georeferencing => write!(f, "Georeferencing"),
            Self::Writing => write!(f, "Writing GeoTIFF"),
        }
    }
}

/// Progress reporting for a batch run.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter {
    /// A stage has started for the next request. `total_items` is the number
    /// of requests in the batch.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// `items_done` requests have fully completed.
    fn advance(&self, _items_done: usize) {}

    /// The batch is finished.
    fn finish_stage(&self) {}
}

pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// Result of georeferencing one raster file.
#[derive(Clone, Debug, PartialEq)]
pub struct GeorefOutput {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub georef: Georeference,
}

/// Result of one completed batch request.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchItem {
    pub screenshot: PathBuf,
    pub effective_resolution_m: f64,
    pub result: GeorefOutput,
}
