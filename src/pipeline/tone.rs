//! Brightness/contrast adjustment and luma reduction
//!
//! Tone mapping depends only on the input channel value, so the per-channel
//! curve is evaluated once into a 256-entry table and then applied to every
//! pixel. Each adjusted channel is written back as an 8-bit value before luma
//! is taken, and the luma itself is stored as an 8-bit gray level.

use crate::pipeline::buffer::PixelBuffer;

/// Midpoint the contrast curve pivots around
const PIVOT: f64 = 128.0;

/// Rec. 601 luma weights for R, G and B
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Brightness and contrast applied before grayscale reduction
///
/// Both are expected in [-100, 100] but any real value is accepted. A contrast
/// of exactly 259 makes the curve singular; the resulting infinities are
/// clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToneParameters {
    /// Offset added to every channel before the contrast curve
    pub brightness: f64,
    /// Contrast amount, 0 leaves the curve at identity
    pub contrast: f64,
}

impl ToneParameters {
    /// Identity adjustment
    pub const NEUTRAL: Self = Self::new(0.0, 0.0);

    /// Create tone parameters
    pub const fn new(brightness: f64, contrast: f64) -> Self {
        Self {
            brightness,
            contrast,
        }
    }

    /// Slope of the contrast curve
    ///
    /// Exactly 1.0 for a contrast of zero.
    pub fn contrast_factor(&self) -> f64 {
        (259.0 * (self.contrast + 255.0)) / (255.0 * (259.0 - self.contrast))
    }

    /// Adjust a single channel value, clamped to [0, 255] but not yet rounded
    pub fn adjust(&self, value: u8) -> f64 {
        curve(value, self.brightness, self.contrast_factor())
    }

    /// Adjusted 8-bit value for every possible input channel value
    pub fn lookup_table(&self) -> [u8; 256] {
        let factor = self.contrast_factor();
        let mut table = [0; 256];
        for (value, entry) in (0..=u8::MAX).zip(table.iter_mut()) {
            *entry = to_channel(curve(value, self.brightness, factor));
        }
        table
    }
}

// Unfused multiply and add so results are bit-identical on every target
#[allow(clippy::suboptimal_flops)]
fn curve(value: u8, brightness: f64, factor: f64) -> f64 {
    let shifted = f64::from(value) + brightness;
    num_traits::clamp(factor * (shifted - PIVOT) + PIVOT, 0.0, 255.0)
}

/// Weighted luma of an RGB triple
#[allow(clippy::suboptimal_flops)]
pub fn luma(r: u8, g: u8, b: u8) -> f64 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    wr * f64::from(r) + wg * f64::from(g) + wb * f64::from(b)
}

/// Store a real value into an 8-bit channel
///
/// Clamps to [0, 255] and rounds half to even. NaN stores as 0.
pub fn to_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    num_traits::clamp(value, 0.0, 255.0).round_ties_even() as u8
}

/// Tone map every pixel of `buffer` in place and reduce it to gray
///
/// R, G and B all receive the same gray level; alpha is left alone.
pub(crate) fn apply(buffer: &mut PixelBuffer, tone: ToneParameters) {
    let table = tone.lookup_table();
    let adjust = |v: u8| table.get(usize::from(v)).copied().unwrap_or(v);

    for pixel in buffer.pixels_mut() {
        if let [r, g, b, _] = pixel {
            let gray = to_channel(luma(adjust(*r), adjust(*g), adjust(*b)));
            *r = gray;
            *g = gray;
            *b = gray;
        }
    }
}
