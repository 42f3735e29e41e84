//! Raster loading from text grids and label images
//!
//! Text grids (`.txt`, `.csv`, `.asc`) hold one raster row per line with
//! integer cells separated by whitespace or commas. Label images (`.png`,
//! `.tif`, `.tiff`) use the gray level as the region identifier, or map each
//! distinct RGBA color to an identifier when the image has color channels.

use image::{ColorType, DynamicImage};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

use crate::io::configuration::MAX_RASTER_CELLS;
use crate::io::error::{MapColorError, Result, WithPath};
use crate::spatial::Raster;

/// ESRI ASCII grid header keys, lowercase
const ASCII_GRID_KEYS: [&str; 8] = [
    "ncols",
    "nrows",
    "xllcorner",
    "yllcorner",
    "xllcenter",
    "yllcenter",
    "cellsize",
    "nodata_value",
];

/// Load a raster, choosing the decoder by file extension
///
/// # Errors
///
/// Returns an error if the extension is not supported, the file cannot be
/// read or decoded, the grid is malformed, or it exceeds `MAX_RASTER_CELLS`
pub fn load_raster(path: &Path) -> Result<Raster<i64>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let raster = match extension.as_str() {
        "txt" | "csv" | "asc" => {
            let text = std::fs::read_to_string(path).with_path(path, "read raster")?;
            parse_text_raster(&text, path)?
        }
        "png" | "tif" | "tiff" => {
            let img = image::open(path).map_err(|e| MapColorError::RasterLoad {
                path: path.to_path_buf(),
                source: e,
            })?;
            raster_from_image(&img)?
        }
        _ => {
            return Err(MapColorError::InvalidParameter {
                parameter: "raster",
                value: path.display().to_string(),
                reason: "expected a .txt, .csv, .asc, .png, .tif or .tiff file".to_string(),
            });
        }
    };

    debug!(
        path = %path.display(),
        rows = raster.rows(),
        cols = raster.cols(),
        "loaded raster"
    );
    Ok(raster)
}

/// Parse a text grid; `path` is only used for error messages
///
/// # Errors
///
/// Returns an error for non-numeric tokens, ragged rows, empty input,
/// or grids larger than `MAX_RASTER_CELLS`
pub fn parse_text_raster(text: &str, path: &Path) -> Result<Raster<i64>> {
    let mut rows: Vec<Vec<i64>> = Vec::new();
    let mut width = None;
    let mut cells = 0usize;

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let content = line.split('#').next().unwrap_or_default().trim();
        if content.is_empty() || is_header_line(content) {
            continue;
        }

        let row = content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                parse_cell(token).ok_or_else(|| MapColorError::RasterParse {
                    path: path.to_path_buf(),
                    line: line_number,
                    reason: format!("'{token}' is not a number in the 64-bit integer range"),
                })
            })
            .collect::<Result<Vec<i64>>>()?;

        let expected = *width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(MapColorError::RasterParse {
                path: path.to_path_buf(),
                line: line_number,
                reason: format!("row has {} cells, expected {expected}", row.len()),
            });
        }

        cells += row.len();
        check_cell_limit(cells)?;
        rows.push(row);
    }

    Raster::from_rows(rows)
}

fn is_header_line(content: &str) -> bool {
    content
        .split_whitespace()
        .next()
        .is_some_and(|key| ASCII_GRID_KEYS.contains(&key.to_ascii_lowercase().as_str()))
}

// Bounds of i64 as f64; -2^63 is exact and 2^63 is the first value past i64::MAX
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

// Decimal cells are truncated toward zero; values outside i64 are rejected
fn parse_cell(token: &str) -> Option<i64> {
    token.parse::<i64>().ok().or_else(|| {
        token
            .parse::<f64>()
            .ok()
            .map(f64::trunc)
            .filter(|value| (I64_LOWER..I64_UPPER).contains(value))
            .map(|value| value as i64)
    })
}

fn check_cell_limit(cells: usize) -> Result<()> {
    if cells > MAX_RASTER_CELLS {
        return Err(MapColorError::InvalidRaster {
            reason: format!("raster exceeds {MAX_RASTER_CELLS} cells"),
        });
    }
    Ok(())
}

/// Convert a decoded label image into region identifiers
///
/// # Errors
///
/// Returns an error if the image is empty or exceeds `MAX_RASTER_CELLS`
pub fn raster_from_image(img: &DynamicImage) -> Result<Raster<i64>> {
    let (width, height) = (img.width() as usize, img.height() as usize);
    check_cell_limit(width.saturating_mul(height))?;

    let values: Vec<i64> = match img.color() {
        ColorType::L8 | ColorType::La8 => {
            img.to_luma8().pixels().map(|p| i64::from(p.0[0])).collect()
        }
        ColorType::L16 | ColorType::La16 => {
            img.to_luma16().pixels().map(|p| i64::from(p.0[0])).collect()
        }
        _ => color_labels(img),
    };

    let cells = ndarray::Array2::from_shape_vec((height, width), values).map_err(|e| {
        MapColorError::InvalidRaster {
            reason: e.to_string(),
        }
    })?;
    Raster::new(cells)
}

fn color_labels(img: &DynamicImage) -> Vec<i64> {
    let rgba = img.to_rgba8();

    // Deterministic color ordering ensures reproducible region identifiers
    let mut ids: BTreeMap<[u8; 4], i64> = rgba.pixels().map(|p| (p.0, 0)).collect();
    for (next, id) in ids.values_mut().enumerate() {
        *id = next as i64;
    }
    rgba.pixels()
        .map(|p| ids.get(&p.0).copied().unwrap_or_default())
        .collect()
}
