//! Tests for stencil validation and the named neighborhoods

#[cfg(test)]
mod tests {
    use mapcolor::spatial::stencil::{CARDINAL_OFFSETS, Connectivity, DIAGONAL_OFFSETS, Stencil};
    use mapcolor::MapColorError;

    // Tests four-connectivity uses the cardinal offsets in order
    // Verified by reordering the cardinal offsets
    #[test]
    fn test_four_offsets() {
        let stencil = Stencil::four();
        assert_eq!(stencil.offsets(), &CARDINAL_OFFSETS);
        assert_eq!(stencil.len(), 4);
    }

    // Tests eight-connectivity appends diagonals after the cardinals
    // Verified by placing diagonals first
    #[test]
    fn test_eight_offsets() {
        let stencil = Stencil::eight();
        assert_eq!(stencil.len(), 8);
        assert_eq!(stencil.offsets().get(..4), Some(&CARDINAL_OFFSETS[..]));
        assert_eq!(stencil.offsets().get(4..), Some(&DIAGONAL_OFFSETS[..]));
        assert!(!stencil.is_empty());
    }

    // Tests an empty offset list is rejected
    // Verified by removing the emptiness check
    #[test]
    fn test_empty_stencil_rejected() {
        assert!(matches!(
            Stencil::new(vec![]),
            Err(MapColorError::InvalidStencil { .. })
        ));
    }

    // Tests the zero offset is rejected since it compares a cell with itself
    // Verified by removing the zero offset check
    #[test]
    fn test_zero_offset_rejected() {
        assert!(matches!(
            Stencil::new(vec![[0, 1], [0, 0]]),
            Err(MapColorError::InvalidStencil { .. })
        ));
    }

    // Tests custom stencils keep their offset order
    // Verified by sorting offsets in the constructor
    #[test]
    fn test_custom_stencil() {
        let stencil = Stencil::new(vec![[2, 0], [0, -2]]).expect("valid offsets");
        assert_eq!(stencil.offsets(), &[[2, 0], [0, -2]]);
    }

    // Tests named connectivity converts to the matching stencil
    // Verified by mapping both variants to the same stencil
    #[test]
    fn test_connectivity_conversion() {
        assert_eq!(Stencil::from(Connectivity::Four), Stencil::four());
        assert_eq!(Stencil::from(Connectivity::Eight), Stencil::eight());
        assert_eq!(Connectivity::default(), Connectivity::Eight);
    }
}
