#![allow(dead_code)]

use std::path::{Path, PathBuf};

use geosnap_core::io::raster::{save_png, Raster};

/// Build a deterministic RGBA test pattern: red ramps with x, green with y,
/// blue fixed, alpha opaque.
pub fn gradient_raster(width: u32, height: u32) -> Raster {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x * 255 / width.max(1)) as u8);
            pixels.push((y * 255 / height.max(1)) as u8);
            pixels.push(96);
            pixels.push(255);
        }
    }
    Raster::from_rgba(width, height, pixels).expect("valid test raster")
}

/// Save a gradient PNG named `name` under `dir` and return its path.
pub fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dir");
    }
    save_png(&gradient_raster(width, height), &path).expect("save PNG");
    path
}
