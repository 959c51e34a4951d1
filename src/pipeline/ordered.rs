//! Ordered (threshold matrix) dithering

use crate::pipeline::buffer::PixelBuffer;
use ndarray::Array2;

/// Side length of the Bayer threshold matrix
pub const BAYER_SIZE: usize = 4;

/// A square threshold matrix tiled across the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BayerMatrix {
    /// Threshold ranks, `cells[y][x]`
    pub cells: [[u8; BAYER_SIZE]; BAYER_SIZE],
}

impl BayerMatrix {
    /// Number of distinct threshold levels
    pub const LEVELS: f64 = (BAYER_SIZE * BAYER_SIZE) as f64;

    /// Threshold on the 0..=255 scale for the pixel at (x, y)
    pub fn threshold(&self, x: usize, y: usize) -> f64 {
        let rank = self
            .cells
            .get(y % BAYER_SIZE)
            .and_then(|row| row.get(x % BAYER_SIZE))
            .copied()
            .unwrap_or(0);
        f64::from(rank) / Self::LEVELS * 255.0
    }
}

/// The classic 4x4 Bayer matrix
pub const BAYER_4X4: BayerMatrix = BayerMatrix {
    cells: [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]],
};

/// Threshold each accumulator value against the tiled matrix
///
/// Values strictly above the threshold become white. Pixels have no data
/// dependency on each other; raster order is used anyway.
pub(crate) fn dither(output: &mut PixelBuffer, accumulator: &Array2<f64>, matrix: &BayerMatrix) {
    for ((y, x), &value) in accumulator.indexed_iter() {
        let level = if value > matrix.threshold(x, y) { 255 } else { 0 };
        output.set_gray(x as u32, y as u32, level);
    }
}
