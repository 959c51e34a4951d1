//! Retro monochrome dithering of photos
//!
//! A pixel buffer is tone mapped with brightness and contrast, reduced to
//! luma, and rendered in black and white with one of several ordered or
//! error-diffusion dithering algorithms. The transform is pure: it never
//! mutates its input and keeps no state between calls.

#![forbid(unsafe_code)]

/// Image loading, export, command-line handling and error types
pub mod io;
/// Tone mapping, grayscale reduction and dithering
pub mod pipeline;

pub use io::error::{DitherError, Result};
pub use pipeline::{Algorithm, PixelBuffer, ToneParameters, transform, transform_with};
