//! Integration test for large graph handling.

use loregraph::{Direction, Edge, EntityType, GraphStore, Node, PropertyMap, RelationshipType};

fn ring(num_nodes: usize, edges_per_node: usize) -> GraphStore {
    let mut graph = GraphStore::new();

    for i in 0..num_nodes {
        graph.add_node(Node::with_id(
            format!("n{i}"),
            format!("Location {i}"),
            EntityType::Location,
            PropertyMap::new().with("index", i as i64),
        ));
    }

    for i in 0..num_nodes {
        for j in 1..=edges_per_node {
            graph
                .add_edge(Edge::with_id(
                    format!("e{i}-{j}"),
                    "road",
                    RelationshipType::ConnectedTo,
                    format!("n{i}"),
                    format!("n{}", (i + j) % num_nodes),
                    PropertyMap::new(),
                ))
                .unwrap();
        }
    }

    graph
}

#[test]
#[ignore] // This test is slow, run with --ignored flag
fn test_large_graph_100k_nodes_500k_edges() {
    let graph = ring(100_000, 5);

    assert_eq!(graph.node_count(), 100_000);
    assert_eq!(graph.edge_count(), 500_000);

    let node = graph.get_node("n50000").unwrap();
    assert_eq!(node.properties.get_int("index"), Some(50_000));
}

#[test]
fn test_medium_graph_10k_nodes() {
    let mut graph = ring(10_000, 3);

    assert_eq!(graph.node_count(), 10_000);
    assert_eq!(graph.edge_count(), 30_000);
    assert_eq!(graph.get_nodes_by_type(EntityType::Location).len(), 10_000);

    let related = graph.get_related_nodes("n0", None, Direction::Both);
    assert_eq!(related.len(), 6);

    // Hops of three cover 15 positions within the default bound
    let path = graph.find_path("n0", "n15", 5).unwrap();
    assert_eq!(path.len(), 6);
    assert!(graph.find_path("n0", "n16", 5).is_none());

    assert!(graph.delete_node("n1"));
    assert_eq!(graph.edge_count(), 30_000 - 6);
}
