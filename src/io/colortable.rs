//! Tab-separated color tables for cartographic tools
//!
//! Each colored region becomes one `id  color  id+1  color` record so the
//! region's integer value maps onto its color slice. Background, foreground
//! and NaN rows close the table.

use std::fmt::Display;
use std::io::Write;
use std::path::Path;

use crate::algorithm::coloring::Coloring;
use crate::io::configuration::CPT_DEFAULT_LEVEL;
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::spatial::RegionId;

/// Write the color table for `coloring`, in traversal order
///
/// # Errors
///
/// Returns an error if writing fails or a region identifier has no
/// successor in its integer type
pub fn write_color_table<T: RegionId, C: Display, W: Write>(
    coloring: &Coloring<T, C>,
    writer: &mut W,
) -> Result<()> {
    for (region, color) in coloring.iter() {
        let upper = slice_upper(region)?;
        writeln!(writer, "{region}\t{color}\t{upper}\t{color}")?;
    }
    for key in ["B", "F", "N"] {
        writeln!(writer, "{key}\t{CPT_DEFAULT_LEVEL}")?;
    }
    Ok(())
}

/// Check that every colored region can open a color slice
///
/// The CLI runs this before writing any output for an input.
///
/// # Errors
///
/// Returns an error for the first region identifier with no successor in
/// its integer type
pub fn check_color_table<T: RegionId, C>(coloring: &Coloring<T, C>) -> Result<()> {
    coloring
        .nodes()
        .iter()
        .try_for_each(|&region| slice_upper(region).map(|_| ()))
}

fn slice_upper<T: RegionId>(region: T) -> Result<T> {
    region
        .checked_add(&T::one())
        .ok_or_else(|| invalid_parameter("region", &region, &"identifier has no successor"))
}

/// Write the color table to a file, creating parent directories
///
/// # Errors
///
/// Returns an error if the file cannot be created or written
pub fn export_color_table<T: RegionId, C: Display>(
    coloring: &Coloring<T, C>,
    output_path: &Path,
) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    let file = std::fs::File::create(output_path).with_path(output_path, "create file")?;
    let mut writer = std::io::BufWriter::new(file);
    write_color_table(coloring, &mut writer).with_path(output_path, "write color table")?;
    writer.flush().with_path(output_path, "write color table")
}
