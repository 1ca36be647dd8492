//! GeoTIFF encoding for georeferenced RGBA captures.
//!
//! The output is a single-image baseline TIFF with four 8-bit samples per
//! pixel (RGB plus an extra alpha sample), a geographic WGS84 GeoKey
//! directory, and the model tie-point and pixel-scale tags.

use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Seek, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tiff::decoder::Decoder;
use tiff::encoder::colortype::RGBA8;
use tiff::encoder::{Compression, DeflateLevel, DirectoryEncoder, TiffEncoder, TiffKind};
use tiff::tags::Tag;
use tracing::info;

use crate::consts::{
    EXTRA_SAMPLE_ASSOCIATED_ALPHA, GCS_WGS84, GEOGRAPHIC_TYPE_GEO_KEY, GT_MODEL_TYPE_GEO_KEY,
    GT_RASTER_TYPE_GEO_KEY, MODEL_TYPE_GEOGRAPHIC, RASTER_PIXEL_IS_AREA, TAG_GEO_KEY_DIRECTORY,
    TAG_MODEL_PIXEL_SCALE, TAG_MODEL_TIEPOINT,
};
use crate::error::{GeosnapError, Result};
use crate::georef::Georeference;
use crate::io::raster::Raster;

/// Strip compression for GeoTIFF output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeoTiffCompression {
    #[default]
    None,
    Lzw,
    Deflate,
}

impl GeoTiffCompression {
    fn to_tiff(self) -> Compression {
        match self {
            Self::None => Compression::Uncompressed,
            Self::Lzw => Compression::Lzw,
            Self::Deflate => Compression::Deflate(DeflateLevel::Balanced),
        }
    }
}

impl fmt::Display for GeoTiffCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Lzw => write!(f, "LZW"),
            Self::Deflate => write!(f, "Deflate"),
        }
    }
}

/// One entry of the GeoKey directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeoKey {
    pub id: u16,
    pub value: u16,
}

/// Georeferencing metadata read back from a GeoTIFF.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoTiffInfo {
    pub width: u32,
    pub height: u32,
    pub samples_per_pixel: u16,
    pub photometric: u16,
    pub extra_samples: Vec<u16>,
    pub georef: Georeference,
    pub geo_keys: Vec<GeoKey>,
}

/// The keys written for every capture: geographic model, pixel-is-area, WGS84.
pub fn geo_key_directory() -> Vec<u16> {
    let keys = [
        GeoKey {
            id: GT_MODEL_TYPE_GEO_KEY,
            value: MODEL_TYPE_GEOGRAPHIC,
        },
        GeoKey {
            id: GT_RASTER_TYPE_GEO_KEY,
            value: RASTER_PIXEL_IS_AREA,
        },
        GeoKey {
            id: GEOGRAPHIC_TYPE_GEO_KEY,
            value: GCS_WGS84,
        },
    ];

    // Header: KeyDirectoryVersion, KeyRevision, MinorRevision, NumberOfKeys.
    let mut dir = vec![1, 1, 0, keys.len() as u16];
    for key in keys {
        // TIFFTagLocation 0: value stored inline, count 1.
        dir.extend_from_slice(&[key.id, 0, 1, key.value]);
    }
    dir
}

/// Write `raster` as a GeoTIFF at `path`, tagged with `georef`.
pub fn tag_and_write(
    raster: &Raster,
    georef: &Georeference,
    path: &Path,
    compression: GeoTiffCompression,
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_geotiff_to(&mut writer, raster, georef, compression)?;
    writer.flush()?;
    info!(
        path = %path.display(),
        width = raster.width(),
        height = raster.height(),
        %compression,
        "Wrote GeoTIFF"
    );
    Ok(())
}

/// Encode `raster` as an in-memory GeoTIFF.
pub fn encode_geotiff(
    raster: &Raster,
    georef: &Georeference,
    compression: GeoTiffCompression,
) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    write_geotiff_to(&mut cursor, raster, georef, compression)?;
    Ok(cursor.into_inner())
}

fn write_geotiff_to<W: Write + Seek>(
    writer: W,
    raster: &Raster,
    georef: &Georeference,
    compression: GeoTiffCompression,
) -> Result<()> {
    let mut encoder = TiffEncoder::new(writer)?.with_compression(compression.to_tiff());
    let mut image = encoder.new_image::<RGBA8>(raster.width(), raster.height())?;
    write_geo_tags(image.encoder(), georef)?;
    image.write_data(raster.pixels())?;
    Ok(())
}

fn write_geo_tags<W: Write + Seek, K: TiffKind>(
    dir: &mut DirectoryEncoder<'_, W, K>,
    georef: &Georeference,
) -> Result<()> {
    dir.write_tag(Tag::ExtraSamples, EXTRA_SAMPLE_ASSOCIATED_ALPHA)?;
    dir.write_tag(
        Tag::Unknown(TAG_MODEL_PIXEL_SCALE),
        georef.pixel_scale.as_slice(),
    )?;
    dir.write_tag(Tag::Unknown(TAG_MODEL_TIEPOINT), georef.tiepoint.as_slice())?;
    let keys = geo_key_directory();
    dir.write_tag(Tag::Unknown(TAG_GEO_KEY_DIRECTORY), keys.as_slice())?;
    Ok(())
}

/// Read dimensions, sample layout and georeferencing tags from a GeoTIFF.
pub fn read_geotiff_info(path: &Path) -> Result<GeoTiffInfo> {
    let file = File::open(path)?;
    let mut decoder = Decoder::new(BufReader::new(file))?;

    let (width, height) = decoder.dimensions()?;
    let samples_per_pixel = decoder.get_tag_unsigned::<u16>(Tag::SamplesPerPixel)?;
    let photometric = decoder.get_tag_unsigned::<u16>(Tag::PhotometricInterpretation)?;
    let extra_samples = decoder
        .find_tag_unsigned_vec::<u16>(Tag::ExtraSamples)?
        .unwrap_or_default();

    let tiepoint = decoder
        .find_tag(Tag::Unknown(TAG_MODEL_TIEPOINT))?
        .ok_or(GeosnapError::MissingGeoTag("ModelTiepoint"))?
        .into_f64_vec()?;
    let pixel_scale = decoder
        .find_tag(Tag::Unknown(TAG_MODEL_PIXEL_SCALE))?
        .ok_or(GeosnapError::MissingGeoTag("ModelPixelScale"))?
        .into_f64_vec()?;
    let key_dir = decoder
        .find_tag(Tag::Unknown(TAG_GEO_KEY_DIRECTORY))?
        .ok_or(GeosnapError::MissingGeoTag("GeoKeyDirectory"))?
        .into_u16_vec()?;

    let tiepoint: [f64; 6] = tiepoint
        .get(..6)
        .and_then(|s| s.try_into().ok())
        .ok_or(GeosnapError::MissingGeoTag("ModelTiepoint"))?;
    let pixel_scale: [f64; 3] = pixel_scale
        .get(..3)
        .and_then(|s| s.try_into().ok())
        .ok_or(GeosnapError::MissingGeoTag("ModelPixelScale"))?;

    Ok(GeoTiffInfo {
        width,
        height,
        samples_per_pixel,
        photometric,
        extra_samples,
        georef: Georeference {
            tiepoint,
            pixel_scale,
        },
        geo_keys: parse_geo_keys(&key_dir),
    })
}

/// Decode the inline entries of a GeoKey directory. Entries stored in other
/// tags (non-zero TIFFTagLocation) are skipped.
fn parse_geo_keys(dir: &[u16]) -> Vec<GeoKey> {
    let Some(&count) = dir.get(3) else {
        return Vec::new();
    };
    dir[4..]
        .chunks_exact(4)
        .take(count as usize)
        .filter(|entry| entry[1] == 0)
        .map(|entry| GeoKey {
            id: entry[0],
            value: entry[3],
        })
        .collect()
}
