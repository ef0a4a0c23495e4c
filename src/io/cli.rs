//! Command-line interface for batch processing images into hexagram artwork

use crate::io::configuration::{DEFAULT_GRID_SIZE, IMAGE_EXTENSIONS, OUTPUT_SUFFIX};
use crate::io::error::{HexagramError, Result, path_error};
use crate::io::export::{export_raster, export_vector};
use crate::io::progress::ProgressManager;
use crate::pipeline::{self, GridSize, RunCoordinator};
use crate::render::{raster, vector};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hexagrid")]
#[command(
    author,
    version,
    about = "Render raster images as I Ching hexagram grid artwork"
)]
/// Command-line arguments for the artwork generation tool
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Grid side length in cells
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Export only the raster PNG
    #[arg(long, conflicts_with = "vector_only")]
    pub raster_only: bool,

    /// Export only the vector SVG
    #[arg(long)]
    pub vector_only: bool,
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

    const fn wants_raster(&self) -> bool {
        !self.vector_only
    }

    const fn wants_vector(&self) -> bool {
        !self.raster_only
    }
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
    runs: RunCoordinator,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
            runs: RunCoordinator::new(),
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size is out of range, target validation
    /// fails, or processing of any file fails.
    pub fn process(&mut self) -> Result<()> {
        let grid_size = GridSize::new(self.cli.grid_size)?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file, grid_size)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if has_image_extension(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(path_error("Target file must be an image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if has_image_extension(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(path_error("Target must be an image file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let raster_done =
            !self.cli.wants_raster() || Self::raster_output_path(input_path).exists();
        let vector_done =
            !self.cli.wants_vector() || Self::vector_output_path(input_path).exists();

        if raster_done && vector_done {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, grid_size: GridSize) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let img = image::open(input_path).map_err(|source| HexagramError::ImageLoad {
            path: input_path.to_path_buf(),
            source,
        })?;

        let token = self.runs.begin();
        let grid = pipeline::process_image(&img, grid_size);
        self.runs.commit(token, grid);

        if let Some(grid) = self.runs.latest() {
            if self.cli.wants_raster() {
                let surface = raster::render(grid);
                export_raster(&surface, &Self::raster_output_path(input_path))?;
            }
            if self.cli.wants_vector() {
                let document = vector::render(grid);
                export_vector(&document, &Self::vector_output_path(input_path))?;
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    fn raster_output_path(input_path: &Path) -> PathBuf {
        output_path_with_extension(input_path, "png")
    }

    fn vector_output_path(input_path: &Path) -> PathBuf {
        output_path_with_extension(input_path, "svg")
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lower = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&lower.as_str())
        })
}

fn output_path_with_extension(input_path: &Path, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let output_name = format!("{}{OUTPUT_SUFFIX}.{extension}", stem.to_string_lossy());

    input_path.parent().map_or_else(
        || PathBuf::from(&output_name),
        |parent| parent.join(&output_name),
    )
}
