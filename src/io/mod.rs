//! Input/output around the pixel pipeline
//!
//! This module contains everything outside the pure transform:
//! - Image decoding, resizing and PNG export
//! - Command-line parsing and batch processing
//! - Error types, constants, logging and progress display

/// Command-line interface and batch file processing
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Image decoding, resizing and export
pub mod image;
/// Tracing subscriber setup
pub mod logging;
/// Progress bars for batch runs
pub mod progress;
