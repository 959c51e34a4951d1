//! Command-line interface for batch dithering of image files

use crate::io::configuration::{
    DEFAULT_BRIGHTNESS, DEFAULT_CONTRAST, DEFAULT_RESOLUTION, INPUT_EXTENSIONS, MAX_RESOLUTION,
    MAX_TONE, MIN_TONE, OUTPUT_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{DitherError, Result, path_error};
use crate::io::image::{export_png, load_buffer};
use crate::io::progress::{ProgressManager, Stage};
use crate::pipeline::{Algorithm, ToneParameters, transform_with};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "retrodither")]
#[command(
    author,
    version,
    about = "Render photos with a retro monochrome dithered look"
)]
/// Command-line arguments for the dithering tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Dithering algorithm
    #[arg(short, long, value_enum, default_value_t = Algorithm::default())]
    pub algorithm: Algorithm,

    /// Brightness offset from -100 to 100
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_BRIGHTNESS,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(MIN_TONE..=MAX_TONE)
    )]
    pub brightness: i32,

    /// Contrast amount from -100 to 100
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_CONTRAST,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(MIN_TONE..=MAX_TONE)
    )]
    pub contrast: i32,

    /// Resolution factor applied to the 512 pixel reference size
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION, value_parser = parse_resolution)]
    pub resolution: f64,

    /// Directory for results (defaults to next to each input)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Tone settings selected on the command line
    pub fn tone(&self) -> ToneParameters {
        ToneParameters::new(f64::from(self.brightness), f64::from(self.contrast))
    }
}

fn parse_resolution(value: &str) -> std::result::Result<f64, String> {
    let resolution: f64 = value
        .parse()
        .map_err(|e| format!("'{value}' is not a number: {e}"))?;
    if resolution.is_finite() && resolution > 0.0 && resolution <= MAX_RESOLUTION {
        Ok(resolution)
    } else {
        Err(format!(
            "resolution must be greater than 0 and at most {MAX_RESOLUTION}"
        ))
    }
}

/// Whether `path` has an extension the tool reads
pub fn is_supported_input(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            INPUT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Whether `path` looks like a file this tool wrote
pub fn is_output_file(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Returns the paths of the images written, in processing order.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        let files = self.collect_files()?;
        if files.is_empty() {
            return Ok(Vec::new());
        }

        self.progress_manager.initialize(files.len());

        let mut written = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            written.push(self.process_file(file, index)?);
        }

        self.progress_manager.finish();
        info!(
            files = self.progress_manager.completed(),
            "Batch complete"
        );
        Ok(written)
    }

    /// Output location for a given input file
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{OUTPUT_EXTENSION}",
            stem.to_string_lossy()
        );

        match (&self.cli.output, input_path.parent()) {
            (Some(dir), _) => dir.join(output_name),
            (None, Some(parent)) => parent.join(output_name),
            (None, None) => PathBuf::from(output_name),
        }
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if !is_supported_input(target) {
                return Err(path_error(target, "Target file is not a supported image"));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                Vec::new()
            })
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| DitherError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;

            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if path.is_file()
                    && is_supported_input(&path)
                    && !is_output_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(path_error(
                target,
                "Target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.output_path(input_path);
        if output_path.exists() {
            warn!(
                input = %input_path.display(),
                "Skipping, output already exists"
            );
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<PathBuf> {
        let start_time = Instant::now();
        let output_path = self.output_path(input_path);

        self.progress_manager
            .set_stage(index, input_path, Stage::Loading);
        let buffer = load_buffer(input_path, self.cli.resolution)?;

        self.progress_manager
            .set_stage(index, input_path, Stage::Dithering);
        let dithered = transform_with(&buffer, self.cli.algorithm, self.cli.tone());

        self.progress_manager
            .set_stage(index, input_path, Stage::Writing);
        export_png(&dithered, &output_path)?;

        self.progress_manager
            .set_stage(index, input_path, Stage::Done);
        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            algorithm = %self.cli.algorithm,
            width = dithered.width(),
            height = dithered.height(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "Wrote dithered image"
        );

        Ok(output_path)
    }
}
