//! Pixel transform entry point
//!
//! Tone maps a copy of the input, reduces it to gray, then dithers it with
//! the selected algorithm. The input buffer is never touched and nothing
//! survives between calls.

use crate::pipeline::algorithm::{Algorithm, Method};
use crate::pipeline::buffer::PixelBuffer;
use crate::pipeline::tone::{self, ToneParameters};
use crate::pipeline::{diffusion, ordered};
use ndarray::Array2;
use tracing::debug;

/// Transform `buffer` into its dithered rendition
///
/// The output has the same dimensions and alpha channel as the input. Every
/// algorithm except `Grayscale` produces R = G = B in {0, 255}.
pub fn transform(
    buffer: &PixelBuffer,
    algorithm: Algorithm,
    brightness: f64,
    contrast: f64,
) -> PixelBuffer {
    transform_with(buffer, algorithm, ToneParameters::new(brightness, contrast))
}

/// Same as [`transform`], taking the tone settings as one value
pub fn transform_with(
    buffer: &PixelBuffer,
    algorithm: Algorithm,
    settings: ToneParameters,
) -> PixelBuffer {
    let (width, height) = buffer.dimensions();
    debug!(
        width,
        height,
        %algorithm,
        brightness = settings.brightness,
        contrast = settings.contrast,
        "Transforming pixel buffer"
    );

    let mut output = buffer.clone();
    tone::apply(&mut output, settings);

    match algorithm.method() {
        Method::Grayscale => {}
        Method::Ordered(matrix) => {
            let accumulator = error_accumulator(&output);
            ordered::dither(&mut output, &accumulator, matrix);
        }
        Method::Diffusion(kernel) => {
            let mut accumulator = error_accumulator(&output);
            diffusion::diffuse(&mut output, &mut accumulator, kernel);
        }
    }

    output
}

// Shape is (height, width) so rows iterate in raster order
fn error_accumulator(gray: &PixelBuffer) -> Array2<f64> {
    let (width, height) = gray.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        f64::from(gray.gray(x as u32, y as u32).unwrap_or(0))
    })
}
