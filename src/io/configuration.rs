//! Pipeline constants and runtime configuration defaults

/// Color names tried in order when no palette is given
pub const DEFAULT_PALETTE: [&str; 12] = [
    "Red", "Blue", "Green", "Yellow", "Black", "Pink", "Orange", "White", "Gray", "Purple",
    "Brown", "Navy",
];

// Safety limit applied before the pipeline runs
/// Maximum number of raster cells accepted by the loaders
pub const MAX_RASTER_CELLS: usize = 25_000_000;

/// Maximum width or height of a rendered image in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;

/// Default pixels per raster cell in the map image
pub const DEFAULT_CELL_SCALE: u32 = 8;

/// Fill for regions without neighbors (fully transparent)
pub const ISOLATED_REGION_RGBA: [u8; 4] = [0, 0, 0, 0];

// Graph image geometry
/// Width and height of the graph image in pixels
pub const GRAPH_IMAGE_SIZE: u32 = 800;
/// Distance kept free between layout and image border
pub const GRAPH_MARGIN: f32 = 48.0;
/// Radius of node discs
pub const NODE_RADIUS: i32 = 15;
/// Thickness of edge strokes in pixels
pub const EDGE_WIDTH: u32 = 6;
/// Canvas fill behind the graph
pub const GRAPH_BACKGROUND_RGBA: [u8; 4] = [255, 255, 255, 255];
/// Stroke color for edges and node outlines
pub const GRAPH_STROKE_RGBA: [u8; 4] = [0, 0, 0, 255];

// Force-directed layout
/// Relaxation steps for the spring layout
pub const SPRING_ITERATIONS: usize = 50;
/// Initial maximum displacement per step, in unit-square coordinates
pub const SPRING_INITIAL_TEMPERATURE: f64 = 0.1;

/// Fixed seed for reproducible spring layouts
pub const DEFAULT_SEED: u64 = 42;

// Color table
/// Gray level written for background, foreground and NaN rows
pub const CPT_DEFAULT_LEVEL: &str = "127.5";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Suffix added to map image filenames
pub const MAP_SUFFIX: &str = "_map";
/// Suffix added to graph image filenames
pub const GRAPH_SUFFIX: &str = "_graph";
/// Extension of rendered images
pub const IMAGE_EXTENSION: &str = "png";
/// Extension of color table files
pub const COLOR_TABLE_EXTENSION: &str = "cpt";

/// Raster file extensions accepted in batch mode
pub const RASTER_EXTENSIONS: [&str; 6] = ["txt", "csv", "asc", "png", "tif", "tiff"];
