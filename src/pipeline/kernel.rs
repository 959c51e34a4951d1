//! Error diffusion kernels
//!
//! Each kernel lists the not-yet-visited neighbors that receive a share of a
//! pixel's quantization error. Weights are stored as integer numerators over a
//! common divisor and turned into `f64` fractions when applied.

/// An error diffusion kernel
///
/// Entries are `(dx, dy, numerator)`; a neighbor at `(x + dx, y + dy)`
/// receives `error * numerator / divisor`. `dy` is never negative and `dx` is
/// positive whenever `dy` is zero, so only pixels later in raster order are
/// touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// Human-readable kernel name
    pub name: &'static str,
    /// (dx, dy, numerator) offsets relative to the current pixel
    pub entries: &'static [(i32, i32, u8)],
    /// Common denominator of all weights
    pub divisor: u8,
}

impl Kernel {
    /// Iterate over `(dx, dy, weight)` with the weight as a real fraction
    pub fn weights(&self) -> impl Iterator<Item = (isize, isize, f64)> + '_ {
        let divisor = f64::from(self.divisor);
        self.entries
            .iter()
            .map(move |&(dx, dy, n)| (dx as isize, dy as isize, f64::from(n) / divisor))
    }

    /// Fraction of the quantization error the kernel passes on
    ///
    /// 1.0 for fully conserving kernels, less when part of the error is
    /// deliberately discarded.
    pub fn total_weight(&self) -> f64 {
        let numerators: u32 = self.entries.iter().map(|&(_, _, n)| u32::from(n)).sum();
        f64::from(numerators) / f64::from(self.divisor)
    }
}

/// Floyd-Steinberg kernel
///
/// ```text
///        X   7
///    3   5   1      (1/16)
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    name: "Floyd-Steinberg",
    entries: &[(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)],
    divisor: 16,
};

/// Atkinson kernel
///
/// Only 6/8 of the error is propagated; the rest is dropped, which gives the
/// characteristic high-contrast look.
///
/// ```text
///        X   1   1
///    1   1   1          (1/8)
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    name: "Atkinson",
    entries: &[
        (1, 0, 1),
        (2, 0, 1),
        (-1, 1, 1),
        (0, 1, 1),
        (1, 1, 1),
        (0, 2, 1),
    ],
    divisor: 8,
};

/// Stucki kernel
///
/// ```text
///            X   8   4
///    2   4   8   4   2      (1/42)
///    1   2   4   2   1
/// ```
pub const STUCKI: Kernel = Kernel {
    name: "Stucki",
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
};

/// Burkes kernel, a two-row cut of Stucki
///
/// ```text
///            X   8   4
///    2   4   8   4   2      (1/32)
/// ```
pub const BURKES: Kernel = Kernel {
    name: "Burkes",
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
    ],
    divisor: 32,
};

/// Sierra (three-row) kernel
///
/// ```text
///            X   5   3
///    2   4   5   4   2      (1/32)
///        2   3   2
/// ```
pub const SIERRA: Kernel = Kernel {
    name: "Sierra",
    entries: &[
        (1, 0, 5),
        (2, 0, 3),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 5),
        (1, 1, 4),
        (2, 1, 2),
        (-1, 2, 2),
        (0, 2, 3),
        (1, 2, 2),
    ],
    divisor: 32,
};
