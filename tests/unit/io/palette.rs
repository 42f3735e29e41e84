//! Tests for palette parsing from names and hex codes

#[cfg(test)]
mod tests {
    use mapcolor::io::palette::{Swatch, default_palette, parse_palette};
    use mapcolor::MapColorError;

    // Tests names are case-insensitive and keep the label as given
    // Verified by lowercasing the stored label
    #[test]
    fn test_named_color() {
        let swatch = Swatch::parse("Navy").expect("known name");
        assert_eq!(swatch.name, "Navy");
        assert_eq!(swatch.rgba, [0, 0, 128, 255]);
        assert_eq!(swatch.to_string(), "Navy");
        assert_eq!(Swatch::parse(" GREY ").expect("known name").rgba, [128, 128, 128, 255]);
    }

    // Tests hex codes with and without alpha
    // Verified by swapping the red and blue channels
    #[test]
    fn test_hex_color() {
        assert_eq!(Swatch::parse("#ff8000").expect("valid hex").rgba, [255, 128, 0, 255]);
        assert_eq!(Swatch::parse("#0000ff80").expect("valid hex").rgba, [0, 0, 255, 128]);
    }

    // Tests malformed entries are rejected
    // Verified by defaulting unknown names to black
    #[test]
    fn test_invalid_colors() {
        for value in ["chartreuse-ish", "#12345", "#gggggg", "#", ""] {
            assert!(
                matches!(Swatch::parse(value), Err(MapColorError::InvalidPalette { .. })),
                "{value} should be rejected"
            );
        }
    }

    // Tests list order is preserved
    // Verified by sorting swatches by name
    #[test]
    fn test_parse_palette_order() {
        let palette = parse_palette("yellow, #000000,Red").expect("valid list");
        let names: Vec<&str> = palette.colors().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["yellow", "#000000", "Red"]);
    }

    // Tests repeated colors are rejected even under different labels
    // Verified by comparing labels instead of pixel values
    #[test]
    fn test_duplicate_colors_rejected() {
        assert!(parse_palette("red,blue,#ff0000").is_err());
        assert!(parse_palette("gray,grey").is_err());
    }

    // Tests a list with no entries is rejected
    // Verified by accepting empty palettes
    #[test]
    fn test_empty_list_rejected() {
        assert!(matches!(
            parse_palette(" , ,"),
            Err(MapColorError::InvalidPalette { .. })
        ));
    }

    // Tests the built-in palette parses completely
    // Verified by misspelling a default color
    #[test]
    fn test_default_palette() {
        let palette = default_palette().expect("built-in names are known");
        assert_eq!(palette.len(), 12);
        assert_eq!(palette.get(0).map(|s| s.name.as_str()), Some("Red"));
    }
}
