//! Tests for circular and spring node placement

#[cfg(test)]
mod tests {
    use mapcolor::algorithm::graph::RegionGraph;
    use mapcolor::analysis::layout::{Layout, circular_layout, layout_positions, spring_layout};

    fn in_unit_square(positions: &[[f64; 2]]) -> bool {
        positions
            .iter()
            .all(|p| p.iter().all(|v| (-1e-9..=1.0 + 1e-9).contains(v)))
    }

    // Tests the circular layout starts at angle zero and stays in the unit square
    // Verified by centering the circle at the origin
    #[test]
    fn test_circular_positions() {
        let positions = circular_layout(4);
        assert_eq!(positions.len(), 4);
        assert!(in_unit_square(&positions));

        let first = positions.first().copied().unwrap_or_default();
        assert!((first[0] - 1.0).abs() < 1e-9);
        assert!((first[1] - 0.5).abs() < 1e-9);

        let opposite = positions.get(2).copied().unwrap_or_default();
        assert!(opposite[0].abs() < 1e-9);
    }

    // Tests a single node sits at the center
    // Verified by placing it on the circle
    #[test]
    fn test_single_node_centered() {
        assert_eq!(circular_layout(1), vec![[0.5, 0.5]]);
        assert!(circular_layout(0).is_empty());
    }

    // Tests the spring layout is reproducible for a fixed seed
    // Verified by seeding from entropy
    #[test]
    fn test_spring_seeded() {
        let graph = RegionGraph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
        let first = spring_layout(&graph, 7);
        let second = spring_layout(&graph, 7);
        let other = spring_layout(&graph, 8);

        assert_eq!(first, second);
        assert_ne!(first, other);
        assert_eq!(first.len(), 4);
        assert!(in_unit_square(&first));
    }

    // Tests layouts provide one position per node
    // Verified by laying out edges instead of nodes
    #[test]
    fn test_layout_dispatch() {
        let graph = RegionGraph::from_edges([(10, 20), (20, 30)]);
        assert_eq!(layout_positions(&graph, Layout::Circular, 0).len(), 3);
        assert_eq!(layout_positions(&graph, Layout::Spring, 0).len(), 3);
        assert_eq!(Layout::default(), Layout::Circular);
    }
}
