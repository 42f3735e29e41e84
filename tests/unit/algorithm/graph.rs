//! Tests for region graph construction, node order and queries

#[cfg(test)]
mod tests {
    use crate::common;
    use mapcolor::algorithm::adjacency::extract_adjacency;
    use mapcolor::algorithm::graph::RegionGraph;
    use mapcolor::spatial::Stencil;

    // Tests nodes are ordered by first appearance in ascending pairs
    // Verified by sorting nodes by identifier
    #[test]
    fn test_node_order_first_appearance() {
        let adjacency = extract_adjacency(&common::basins(), &Stencil::eight());
        let graph = RegionGraph::from_adjacency(&adjacency);
        assert_eq!(graph.nodes(), &[0, 1, 3, 6, 2]);
        assert_eq!(graph.edge_count(), 5);
    }

    // Tests node order follows the given edge order, not identifier order
    // Verified by inserting nodes sorted
    #[test]
    fn test_from_edges_order() {
        let graph = RegionGraph::from_edges([(9, 4), (4, 1)]);
        assert_eq!(graph.nodes(), &[9, 4, 1]);
        assert_eq!(graph.slot(1), Some(2));
    }

    // Tests self loops and repeated edges are dropped
    // Verified by removing the duplicate check
    #[test]
    fn test_duplicates_and_loops_dropped() {
        let graph = RegionGraph::from_edges([(1, 2), (2, 1), (3, 3), (1, 2)]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node_count(), 2);
        assert!(!graph.contains(3));
        assert_eq!(graph.degree(1), 1);
    }

    // Tests adjacency queries are symmetric
    // Verified by recording neighbors only on the first endpoint
    #[test]
    fn test_symmetric_neighbors() {
        let graph = RegionGraph::from_edges([(0, 1), (0, 2), (1, 2), (2, 3)]);
        assert!(graph.has_edge(3, 2));
        assert!(graph.has_edge(2, 3));
        assert!(!graph.has_edge(0, 3));
        assert_eq!(graph.neighbors(2).collect::<Vec<_>>(), vec![0, 1, 3]);
        assert_eq!(graph.degree(2), 3);
        assert_eq!(graph.max_degree(), 3);
    }

    // Tests unknown nodes have no neighbors
    // Verified by panicking on missing slots
    #[test]
    fn test_unknown_node() {
        let graph = RegionGraph::from_edges([(0, 1)]);
        assert_eq!(graph.neighbors(42).count(), 0);
        assert_eq!(graph.degree(42), 0);
        assert_eq!(graph.slot(42), None);
        assert!(graph.neighbor_slots(10).is_empty());
    }

    // Tests the empty graph
    // Verified by seeding graphs with a placeholder node
    #[test]
    fn test_empty_graph() {
        let graph = RegionGraph::from_edges(Vec::<(u32, u32)>::new());
        assert!(graph.is_empty());
        assert_eq!(graph.max_degree(), 0);
        assert!(graph.edges().is_empty());
    }
}
