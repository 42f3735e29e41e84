//! Palette parsing from color names and hex codes

use std::fmt;

use crate::algorithm::coloring::Palette;
use crate::io::configuration::DEFAULT_PALETTE;
use crate::io::error::{MapColorError, Result};

/// Named colors understood by [`Swatch::parse`], lowercase
const NAMED_COLORS: [(&str, [u8; 3]); 20] = [
    ("red", [255, 0, 0]),
    ("blue", [0, 0, 255]),
    ("green", [0, 128, 0]),
    ("yellow", [255, 255, 0]),
    ("black", [0, 0, 0]),
    ("pink", [255, 192, 203]),
    ("orange", [255, 165, 0]),
    ("white", [255, 255, 255]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("purple", [128, 0, 128]),
    ("brown", [165, 42, 42]),
    ("navy", [0, 0, 128]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("lime", [0, 255, 0]),
    ("teal", [0, 128, 128]),
    ("olive", [128, 128, 0]),
    ("maroon", [128, 0, 0]),
    ("silver", [192, 192, 192]),
];

/// A palette entry: the label written to color tables and its RGBA value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Swatch {
    /// Label as given by the user
    pub name: String,
    /// Pixel value used when rendering
    pub rgba: [u8; 4],
}

impl Swatch {
    /// Parse a color name (case-insensitive) or `#rrggbb` / `#rrggbbaa` code
    ///
    /// # Errors
    ///
    /// Returns an error for unknown names or malformed hex codes
    pub fn parse(value: &str) -> Result<Self> {
        let label = value.trim();
        let rgba = if let Some(hex) = label.strip_prefix('#') {
            parse_hex(hex).ok_or_else(|| MapColorError::InvalidPalette {
                reason: format!("'{label}' is not a #rrggbb or #rrggbbaa color"),
            })?
        } else {
            let lowered = label.to_ascii_lowercase();
            NAMED_COLORS
                .iter()
                .find(|(name, _)| *name == lowered)
                .map(|(_, [r, g, b])| [*r, *g, *b, 255])
                .ok_or_else(|| MapColorError::InvalidPalette {
                    reason: format!("unknown color name '{label}'"),
                })?
        };

        Ok(Self {
            name: label.to_string(),
            rgba,
        })
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn parse_hex(hex: &str) -> Option<[u8; 4]> {
    if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
        return None;
    }
    let channel = |index: usize| {
        hex.get(index * 2..index * 2 + 2)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };
    let alpha = if hex.len() == 8 { channel(3)? } else { 255 };
    Some([channel(0)?, channel(1)?, channel(2)?, alpha])
}

/// Parse a comma-separated list of colors, preserving order
///
/// # Errors
///
/// Returns an error if the list is empty, an entry fails to parse,
/// or two entries name the same color
pub fn parse_palette(list: &str) -> Result<Palette<Swatch>> {
    let mut swatches: Vec<Swatch> = Vec::new();
    for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let swatch = Swatch::parse(entry)?;
        if swatches.iter().any(|s| s.rgba == swatch.rgba) {
            return Err(MapColorError::InvalidPalette {
                reason: format!("'{entry}' repeats an earlier color"),
            });
        }
        swatches.push(swatch);
    }
    Palette::new(swatches)
}

/// The twelve-color default palette
///
/// # Errors
///
/// Only fails if the built-in names are inconsistent with the color table
pub fn default_palette() -> Result<Palette<Swatch>> {
    parse_palette(&DEFAULT_PALETTE.join(","))
}
