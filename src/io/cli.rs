//! Command-line interface for batch coloring of raster files

use crate::algorithm::coloring::Palette;
use crate::algorithm::pipeline::color_raster;
use crate::analysis::layout::Layout;
use crate::analysis::statistics::ColoringSummary;
use crate::io::colortable::{check_color_table, export_color_table};
use crate::io::configuration::{
    COLOR_TABLE_EXTENSION, DEFAULT_CELL_SCALE, DEFAULT_SEED, GRAPH_IMAGE_SIZE, GRAPH_SUFFIX,
    IMAGE_EXTENSION, ISOLATED_REGION_RGBA, MAP_SUFFIX, RASTER_EXTENSIONS,
};
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::image::export_map_png;
use crate::io::palette::{Swatch, default_palette, parse_palette};
use crate::io::progress::{ProgressManager, Stage};
use crate::io::raster::load_raster;
use crate::io::visualization::{GraphStyle, export_graph_png};
use crate::spatial::{Connectivity, Stencil};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "mapcolor")]
#[command(
    author,
    version,
    about = "Color raster regions so that no two adjacent regions share a color"
)]
/// Command-line arguments for the region coloring tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Raster file (.txt, .csv, .asc, .png, .tif) or directory of rasters
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Neighborhood used to decide which regions touch
    #[arg(short, long, value_enum, default_value_t = Connectivity::Eight)]
    pub connectivity: Connectivity,

    /// Comma-separated colors in preference order (names or #rrggbb)
    #[arg(short, long)]
    pub palette: Option<String>,

    /// Node placement for the graph image
    #[arg(short, long, value_enum, default_value_t = Layout::Circular)]
    pub layout: Layout,

    /// Random seed for the spring layout
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Pixels per raster cell in the map image
    #[arg(short = 'x', long, default_value_t = DEFAULT_CELL_SCALE)]
    pub scale: u32,

    /// Directory for outputs (defaults to each input's directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Write a color table next to the map
    #[arg(long)]
    pub cpt: bool,

    /// Skip the graph image
    #[arg(long)]
    pub no_graph: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
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

    /// Palette from `--palette`, or the default palette
    ///
    /// # Errors
    ///
    /// Returns an error if the palette list cannot be parsed
    pub fn resolve_palette(&self) -> Result<Palette<Swatch>> {
        self.palette
            .as_deref()
            .map_or_else(default_palette, parse_palette)
    }
}

/// Orchestrates batch processing of raster files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, palette parsing, or file
    /// processing fails
    pub fn process(&mut self) -> Result<()> {
        if self.cli.scale == 0 {
            return Err(invalid_parameter("scale", &0, &"must be at least 1"));
        }
        let palette = self.cli.resolve_palette()?;
        let stencil = Stencil::from(self.cli.connectivity);

        let files = self.collect_files()?;
        if files.is_empty() {
            info!(path = %self.cli.target.display(), "no rasters to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file, &stencil, &palette)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Raster files named by the target, sorted, minus already processed ones
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a supported raster file
    /// nor a readable directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_raster_path(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"unsupported raster extension",
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory")?.path();
                if path.is_file()
                    && is_raster_path(&path)
                    && !is_output_path(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a raster file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = self.map_path(input_path);
        if output_path.exists() {
            info!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        stencil: &Stencil,
        palette: &Palette<Swatch>,
    ) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(input_path);
        }
        let raster = load_raster(input_path)?;

        self.report_stage(Stage::Coloring);
        let result = color_raster(&raster, stencil, palette)?;
        let summary = ColoringSummary::new(&raster, &result);
        if self.cli.cpt {
            check_color_table(&result.coloring)?;
        }

        self.report_stage(Stage::Exporting);
        export_map_png(
            &raster,
            &result.coloring,
            ISOLATED_REGION_RGBA,
            self.cli.scale,
            &self.map_path(input_path),
        )?;

        if !self.cli.no_graph {
            if result.graph.is_empty() {
                warn!(
                    input = %input_path.display(),
                    "no adjacent regions, skipping graph image"
                );
            } else {
                let style = GraphStyle {
                    layout: self.cli.layout,
                    seed: self.cli.seed,
                    size: GRAPH_IMAGE_SIZE,
                };
                export_graph_png(
                    &result.graph,
                    &result.coloring,
                    style,
                    &self.graph_path(input_path),
                )?;
            }
        }

        if self.cli.cpt {
            export_color_table(&result.coloring, &self.color_table_path(input_path))?;
        }

        info!(
            input = %input_path.display(),
            elapsed_s = start_time.elapsed().as_secs_f64(),
            "{summary}"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    fn report_stage(&self, stage: Stage) {
        if let Some(ref pm) = self.progress_manager {
            pm.set_stage(stage);
        }
    }

    /// Map image path for an input raster
    pub fn map_path(&self, input_path: &Path) -> PathBuf {
        self.output_path(input_path, MAP_SUFFIX, IMAGE_EXTENSION)
    }

    /// Graph image path for an input raster
    pub fn graph_path(&self, input_path: &Path) -> PathBuf {
        self.output_path(input_path, GRAPH_SUFFIX, IMAGE_EXTENSION)
    }

    /// Color table path for an input raster
    pub fn color_table_path(&self, input_path: &Path) -> PathBuf {
        self.output_path(input_path, "", COLOR_TABLE_EXTENSION)
    }

    fn output_path(&self, input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

        match (&self.cli.output_dir, input_path.parent()) {
            (Some(dir), _) => dir.join(output_name),
            (None, Some(parent)) => parent.join(output_name),
            (None, None) => PathBuf::from(output_name),
        }
    }
}

fn is_raster_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| RASTER_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

// Rendered maps and graphs land next to their inputs and must not be re-read
fn is_output_path(path: &Path) -> bool {
    let rendered = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(IMAGE_EXTENSION));
    rendered
        && path
            .file_stem()
            .map(|stem| stem.to_string_lossy())
            .is_some_and(|stem| stem.ends_with(MAP_SUFFIX) || stem.ends_with(GRAPH_SUFFIX))
}
