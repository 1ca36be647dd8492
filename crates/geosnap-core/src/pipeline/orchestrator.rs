use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::capture::{CaptureRequest, MapCapture};
use crate::error::{GeosnapError, Result};
use crate::geo::GeoPoint;
use crate::georef::compute_georeference;
use crate::io::geotiff::tag_and_write;
use crate::io::raster::load_raster;

use super::config::{BatchConfig, GeorefOptions};
use super::types::{BatchItem, GeorefOutput, NoOpReporter, PipelineStage, ProgressReporter};

/// `<path>.<extension>`, keeping the original extension in place.
pub fn geotiff_path(path: &Path, extension: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

/// Load the raster at `path`, georeference it around `center`, and write the
/// tagged copy next to it as `<path>.<extension>`. The source file is left
/// untouched.
pub fn georeference_file(
    path: &Path,
    center: GeoPoint,
    resolution_m: f64,
    options: &GeorefOptions,
) -> Result<GeorefOutput> {
    let output = geotiff_path(path, &options.extension);
    georeference_to(path, &output, center, resolution_m, options)
}

/// Like [`georeference_file`], but writes the GeoTIFF to `output`.
pub fn georeference_to(
    path: &Path,
    output: &Path,
    center: GeoPoint,
    resolution_m: f64,
    options: &GeorefOptions,
) -> Result<GeorefOutput> {
    write_georeferenced(path, output, center, resolution_m, options, &NoOpReporter, None)
}

fn write_georeferenced(
    path: &Path,
    output: &Path,
    center: GeoPoint,
    resolution_m: f64,
    options: &GeorefOptions,
    reporter: &dyn ProgressReporter,
    total: Option<usize>,
) -> Result<GeorefOutput> {
    reporter.begin_stage(PipelineStage::Georeferencing, total);
    let raster = load_raster(path)?;
    let georef = compute_georeference(
        center,
        resolution_m,
        raster.width(),
        raster.height(),
        options.earth_model,
    )?;

    reporter.begin_stage(PipelineStage::Writing, total);
    tag_and_write(&raster, &georef, output, options.compression)?;
    Ok(GeorefOutput {
        output: output.to_path_buf(),
        width: raster.width(),
        height: raster.height(),
        georef,
    })
}

fn process_request(
    request: &CaptureRequest,
    config: &BatchConfig,
    capture: &mut dyn MapCapture,
    reporter: &dyn ProgressReporter,
    total: usize,
) -> Result<BatchItem> {
    reporter.begin_stage(PipelineStage::Capturing, Some(total));
    let captured = capture.capture(request)?;

    let output = geotiff_path(&captured.path, &config.georef.extension);
    let result = write_georeferenced(
        &captured.path,
        &output,
        request.center(),
        captured.effective_resolution_m,
        &config.georef,
        reporter,
        Some(total),
    )?;
    if !config.capture.matches_viewport(result.width, result.height) {
        warn!(
            path = %captured.path.display(),
            width = result.width,
            height = result.height,
            viewport_px = config.capture.viewport_px,
            "Screenshot size differs from the configured viewport"
        );
    }

    Ok(BatchItem {
        screenshot: captured.path,
        effective_resolution_m: captured.effective_resolution_m,
        result,
    })
}

/// Run every request in order with a progress reporter. Each request is
/// captured, georeferenced and written before the next starts; the first
/// failure aborts the batch.
pub fn run_batch_reported(
    config: &BatchConfig,
    capture: &mut dyn MapCapture,
    reporter: &dyn ProgressReporter,
) -> Result<Vec<BatchItem>> {
    let total = config.requests.len();
    info!(requests = total, options = %config.georef, "Starting batch");

    let mut items = Vec::with_capacity(total);
    for (index, request) in config.requests.iter().enumerate() {
        let item = process_request(request, config, capture, reporter, total).map_err(
            |e| GeosnapError::Request {
                index,
                path: request.path.clone(),
                source: Box::new(e),
            },
        )?;
        info!(
            index,
            output = %item.result.output.display(),
            resolution_m = item.effective_resolution_m,
            "Request complete"
        );
        items.push(item);
        reporter.advance(index + 1);
    }
    reporter.finish_stage();
    Ok(items)
}

/// Run every request in order.
pub fn run_batch(config: &BatchConfig, capture: &mut dyn MapCapture) -> Result<Vec<BatchItem>> {
    run_batch_reported(config, capture, &NoOpReporter)
}
