//! Map rendering: every raster cell painted with its region's color

use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

use crate::algorithm::coloring::Coloring;
use crate::io::configuration::MAX_IMAGE_DIMENSION;
use crate::io::error::{MapColorError, Result, invalid_parameter};
use crate::io::palette::Swatch;
use crate::spatial::{Raster, RegionId};

/// Render the colored raster with `scale` pixels per cell
///
/// Regions without a color (isolated regions) are painted `background`.
///
/// # Errors
///
/// Returns an error if `scale` is zero or the image would exceed
/// `MAX_IMAGE_DIMENSION` in either direction
pub fn render_map<T: RegionId>(
    raster: &Raster<T>,
    coloring: &Coloring<T, Swatch>,
    background: [u8; 4],
    scale: u32,
) -> Result<RgbaImage> {
    let width = image_extent(raster.cols(), scale)?;
    let height = image_extent(raster.rows(), scale)?;

    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let row = (y / scale) as usize;
        let col = (x / scale) as usize;
        let rgba = raster
            .get(row, col)
            .and_then(|region| coloring.color_of(region))
            .map_or(background, |swatch| swatch.rgba);
        Rgba(rgba)
    });

    Ok(img)
}

fn image_extent(cells: usize, scale: u32) -> Result<u32> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be at least 1"));
    }
    u32::try_from(cells)
        .ok()
        .and_then(|cells| cells.checked_mul(scale))
        .filter(|&extent| extent <= MAX_IMAGE_DIMENSION)
        .ok_or_else(|| {
            invalid_parameter(
                "scale",
                &scale,
                &format!("{cells} cells would exceed {MAX_IMAGE_DIMENSION} pixels"),
            )
        })
}

/// Save an image as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// image cannot be written
pub fn save_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MapColorError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| MapColorError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Render the colored raster and save it as PNG
///
/// # Errors
///
/// Returns an error if rendering or saving fails
pub fn export_map_png<T: RegionId>(
    raster: &Raster<T>,
    coloring: &Coloring<T, Swatch>,
    background: [u8; 4],
    scale: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_map(raster, coloring, background, scale)?;
    save_png(&img, output_path)
}
