//! Error diffusion over a floating point accumulator
//!
//! Pixels are visited strictly in raster order. Every quantization reads the
//! accumulator after all earlier pixels have pushed their error into it, so
//! this stage cannot be reordered or split across threads.

use crate::pipeline::buffer::PixelBuffer;
use crate::pipeline::kernel::Kernel;
use ndarray::Array2;

/// Gray level at or above which a pixel quantizes to white
pub const MIDPOINT: f64 = 128.0;

/// Two-level quantization, the midpoint itself goes white
pub fn quantize(value: f64) -> u8 {
    if value < MIDPOINT { 0 } else { 255 }
}

/// Dither `output` in place, spreading error according to `kernel`
///
/// `accumulator` has shape (height, width) and starts as the gray level of
/// each pixel. Contributions that land outside the grid are dropped.
pub(crate) fn diffuse(output: &mut PixelBuffer, accumulator: &mut Array2<f64>, kernel: &Kernel) {
    let (height, width) = accumulator.dim();

    for y in 0..height {
        for x in 0..width {
            let old = accumulator.get([y, x]).copied().unwrap_or(0.0);
            let new = quantize(old);
            let error = old - f64::from(new);
            output.set_gray(x as u32, y as u32, new);

            for (dx, dy, weight) in kernel.weights() {
                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy))
                else {
                    continue;
                };
                if let Some(cell) = accumulator.get_mut([ny, nx]) {
                    *cell += error * weight;
                }
            }
        }
    }
}
