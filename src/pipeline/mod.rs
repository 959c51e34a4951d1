//! Image transform pipeline
//!
//! This module contains the pure pixel transform:
//! - Buffer storage with validated dimensions
//! - Brightness/contrast tone mapping and luma reduction
//! - Ordered and error-diffusion monochrome dithering

/// Algorithm selector and method lookup
pub mod algorithm;
/// Validated RGBA pixel buffer
pub mod buffer;
/// Raster-order error diffusion
pub mod diffusion;
/// Transform entry point
pub mod engine;
/// Error diffusion kernel table
pub mod kernel;
/// Bayer ordered dithering
pub mod ordered;
/// Tone mapping and grayscale reduction
pub mod tone;

pub use algorithm::{Algorithm, Method};
pub use buffer::PixelBuffer;
pub use engine::{transform, transform_with};
pub use kernel::Kernel;
pub use tone::ToneParameters;
