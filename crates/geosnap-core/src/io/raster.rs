use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::consts::RGBA_CHANNEL_COUNT;
use crate::error::{GeosnapError, Result};

/// An 8-bit RGBA raster, row-major, four bytes per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Wrap an RGBA buffer. Fails if the buffer length is not `width * height * 4`
    /// or either dimension is zero.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GeosnapError::InvalidDimensions { width, height });
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(RGBA_CHANNEL_COUNT))
            .ok_or(GeosnapError::InvalidDimensions { width, height })?;
        if pixels.len() != expected {
            return Err(GeosnapError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Load any image format the `image` crate understands as RGBA8.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let rgba = image::open(path)?.to_rgba8();
    let (width, height) = rgba.dimensions();
    Raster::from_rgba(width, height, rgba.into_raw())
}

/// Save a raster as an 8-bit RGBA PNG.
pub fn save_png(raster: &Raster, path: &Path) -> Result<()> {
    let img = RgbaImage::from_raw(raster.width, raster.height, raster.pixels.clone()).ok_or(
        GeosnapError::BufferSize {
            expected: raster.width as usize * raster.height as usize * RGBA_CHANNEL_COUNT,
            actual: raster.pixels.len(),
        },
    )?;
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
