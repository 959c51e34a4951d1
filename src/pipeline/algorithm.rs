//! Algorithm selection and the table mapping each algorithm to its method

use crate::io::error::DitherError;
use crate::pipeline::kernel::{ATKINSON, BURKES, FLOYD_STEINBERG, Kernel, SIERRA, STUCKI};
use crate::pipeline::ordered::{BAYER_4X4, BayerMatrix};
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Dithering algorithm chosen for one transform
///
/// Every variant has a stable lowercase name used on the command line and by
/// `FromStr`/`Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Algorithm {
    /// Atkinson error diffusion (6/8 of the error propagated)
    #[default]
    #[value(name = "atkinson")]
    Atkinson,
    /// Floyd-Steinberg error diffusion
    #[value(name = "floyd-steinberg")]
    FloydSteinberg,
    /// Stucki error diffusion
    #[value(name = "stucki")]
    Stucki,
    /// Burkes error diffusion
    #[value(name = "burkes")]
    Burkes,
    /// Sierra error diffusion
    #[value(name = "sierra")]
    Sierra,
    /// Ordered dithering with a 4x4 Bayer matrix
    #[value(name = "bayer4x4")]
    Bayer4x4,
    /// Tone mapping and grayscale only, no dithering
    #[value(name = "grayscale")]
    Grayscale,
}

/// How an algorithm turns gray levels into output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Keep the full gray range
    Grayscale,
    /// Compare against a tiled threshold matrix
    Ordered(&'static BayerMatrix),
    /// Quantize to two levels and diffuse the error
    Diffusion(&'static Kernel),
}

impl Algorithm {
    /// Every algorithm, in menu order
    pub const ALL: [Self; 7] = [
        Self::Atkinson,
        Self::FloydSteinberg,
        Self::Stucki,
        Self::Burkes,
        Self::Sierra,
        Self::Bayer4x4,
        Self::Grayscale,
    ];

    /// Stable name of the algorithm
    pub const fn name(self) -> &'static str {
        match self {
            Self::Atkinson => "atkinson",
            Self::FloydSteinberg => "floyd-steinberg",
            Self::Stucki => "stucki",
            Self::Burkes => "burkes",
            Self::Sierra => "sierra",
            Self::Bayer4x4 => "bayer4x4",
            Self::Grayscale => "grayscale",
        }
    }

    /// Method used by the algorithm
    pub const fn method(self) -> Method {
        match self {
            Self::Atkinson => Method::Diffusion(&ATKINSON),
            Self::FloydSteinberg => Method::Diffusion(&FLOYD_STEINBERG),
            Self::Stucki => Method::Diffusion(&STUCKI),
            Self::Burkes => Method::Diffusion(&BURKES),
            Self::Sierra => Method::Diffusion(&SIERRA),
            Self::Bayer4x4 => Method::Ordered(&BAYER_4X4),
            Self::Grayscale => Method::Grayscale,
        }
    }

    /// Whether the output is restricted to black and white
    pub const fn is_binary(self) -> bool {
        !matches!(self.method(), Method::Grayscale)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = DitherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| DitherError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}
