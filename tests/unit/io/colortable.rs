//! Tests for color table formatting and export

#[cfg(test)]
mod tests {
    use crate::common;
    use mapcolor::algorithm::coloring::greedy_color;
    use mapcolor::algorithm::graph::RegionGraph;
    use mapcolor::algorithm::pipeline::color_raster;
    use mapcolor::io::colortable::{check_color_table, export_color_table, write_color_table};
    use mapcolor::spatial::Stencil;
    use mapcolor::MapColorError;

    // Tests one record per region in traversal order plus the closing rows
    // Verified by writing regions in identifier order
    #[test]
    fn test_write_color_table() {
        let result = color_raster(
            &common::basins(),
            &Stencil::eight(),
            &common::primary_palette(),
        )
        .expect("three colors suffice");

        let mut buffer = Vec::new();
        write_color_table(&result.coloring, &mut buffer).expect("writes to memory");
        let text = String::from_utf8(buffer).expect("table is UTF-8");

        let expected = "0\tRed\t1\tRed\n\
                        1\tBlue\t2\tBlue\n\
                        3\tGreen\t4\tGreen\n\
                        6\tBlue\t7\tBlue\n\
                        2\tRed\t3\tRed\n\
                        B\t127.5\n\
                        F\t127.5\n\
                        N\t127.5\n";
        assert_eq!(text, expected);
    }

    // Tests the largest identifier of a type cannot form a color slice
    // Verified by wrapping the upper bound
    #[test]
    fn test_identifier_overflow() {
        let graph = RegionGraph::from_edges([(0u8, u8::MAX)]);
        let coloring = greedy_color(&graph, &common::primary_palette()).expect("colorable");

        let mut buffer = Vec::new();
        assert!(matches!(
            write_color_table(&coloring, &mut buffer),
            Err(MapColorError::InvalidParameter { .. })
        ));
    }

    // Tests the successor check accepts ordinary identifiers and flags the type maximum
    // Verified by checking only the first region in traversal order
    #[test]
    fn test_check_color_table() {
        let palette = common::primary_palette();
        let ordinary = greedy_color(&RegionGraph::from_edges([(3i64, 9)]), &palette)
            .expect("colorable");
        assert!(check_color_table(&ordinary).is_ok());

        let maximal = greedy_color(&RegionGraph::from_edges([(0i64, 4), (4, i64::MAX)]), &palette)
            .expect("colorable");
        assert!(matches!(
            check_color_table(&maximal),
            Err(MapColorError::InvalidParameter { parameter: "region", .. })
        ));
    }

    // Tests the table is written to disk
    // Verified by skipping the final flush
    #[test]
    fn test_export_color_table() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tables").join("regions.cpt");
        let result = color_raster(
            &common::three_regions(),
            &Stencil::four(),
            &common::primary_palette(),
        )?;

        export_color_table(&result.coloring, &path)?;

        let text = std::fs::read_to_string(&path)?;
        assert_eq!(text.lines().count(), 6);
        assert!(text.starts_with("0\tRed\t1\tRed\n"));
        Ok(())
    }
}
