//! Image decoding, nearest-neighbor resizing and PNG export
//!
//! The resize stage normalizes the shortest side of the source to
//! `REFERENCE_SIZE` scaled by the resolution factor, so every photo dithers at
//! a comparable dot size regardless of its original resolution.

use crate::io::configuration::{MAX_OUTPUT_SIDE, MAX_RESOLUTION, REFERENCE_SIZE};
use crate::io::error::{DitherError, Result, invalid_parameter};
use crate::pipeline::PixelBuffer;
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use std::path::Path;
use tracing::debug;

/// Compute output dimensions for a source of `width` x `height`
///
/// Each side is rounded to the nearest pixel and never drops below one.
///
/// # Errors
///
/// Returns an error if:
/// - `resolution` is not finite or lies outside `(0, MAX_RESOLUTION]`
/// - either source dimension is zero
/// - the longer side would exceed `MAX_OUTPUT_SIDE`
pub fn target_dimensions(width: u32, height: u32, resolution: f64) -> Result<(u32, u32)> {
    if !(resolution.is_finite() && resolution > 0.0 && resolution <= MAX_RESOLUTION) {
        return Err(invalid_parameter(
            "resolution",
            &resolution,
            &format!("must be greater than 0 and at most {MAX_RESOLUTION}"),
        ));
    }
    if width == 0 || height == 0 {
        return Err(DitherError::InvalidBuffer {
            width,
            height,
            len: 0,
        });
    }

    let shortest = f64::from(width.min(height));
    let scale = f64::from(REFERENCE_SIZE) * resolution / shortest;

    let longest = (f64::from(width.max(height)) * scale).round();
    if longest > f64::from(MAX_OUTPUT_SIDE) {
        return Err(invalid_parameter(
            "resolution",
            &resolution,
            &format!(
                "a {width}x{height} source would resize to a {longest} pixel side, \
                 the limit is {MAX_OUTPUT_SIDE}"
            ),
        ));
    }

    let side = |n: u32| ((f64::from(n) * scale).round() as u32).max(1);

    Ok((side(width), side(height)))
}

/// Resample a decoded image to the target resolution
///
/// # Errors
///
/// Returns an error if the resolution or the image dimensions are invalid
pub fn fit_to_reference(image: &RgbaImage, resolution: f64) -> Result<PixelBuffer> {
    let (width, height) = target_dimensions(image.width(), image.height(), resolution)?;
    debug!(
        from_width = image.width(),
        from_height = image.height(),
        width,
        height,
        "Resizing with nearest neighbor"
    );

    let resized = imageops::resize(image, width, height, FilterType::Nearest);
    PixelBuffer::try_from(resized)
}

/// Decode an image file and resample it for dithering
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or is not a supported image format
/// - The resolution is invalid or the image has no pixels
pub fn load_buffer(path: &Path, resolution: f64) -> Result<PixelBuffer> {
    let decoded = image::open(path).map_err(|e| DitherError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    fit_to_reference(&decoded.to_rgba8(), resolution)
}

/// Write a pixel buffer as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the specified path
pub fn export_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| DitherError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let image = buffer.clone().into_image()?;
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| DitherError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}
