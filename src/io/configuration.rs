//! Pipeline constants and runtime configuration defaults

// Resize stage
/// Length the shortest image side is normalized to before applying resolution
pub const REFERENCE_SIZE: u32 = 512;
/// Default resolution factor applied to the reference size
pub const DEFAULT_RESOLUTION: f64 = 1.0;
/// Largest accepted resolution factor
pub const MAX_RESOLUTION: f64 = 4.0;
/// Longest side a resized image may have
pub const MAX_OUTPUT_SIDE: u32 = 16_384;

// Tone settings exposed to users
/// Lowest brightness or contrast accepted on the command line
pub const MIN_TONE: i64 = -100;
/// Highest brightness or contrast accepted on the command line
pub const MAX_TONE: i64 = 100;
/// Default brightness offset
pub const DEFAULT_BRIGHTNESS: i32 = 0;
/// Default contrast amount
pub const DEFAULT_CONTRAST: i32 = 0;

// Input discovery
/// File extensions picked up when scanning a directory
pub const INPUT_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_dithered";
/// Extension of every output file
pub const OUTPUT_EXTENSION: &str = "png";

// Logging
/// Filter used when `RUST_LOG` is unset and no verbosity flag is given
pub const DEFAULT_LOG_FILTER: &str = "retrodither=warn";
