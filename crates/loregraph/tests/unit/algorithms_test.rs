//! Unit tests for breadth-first path finding.

use loregraph::{Edge, EntityType, GraphStore, Node, PropertyMap, RelationshipType, StoreConfig};

fn chain(len: usize) -> GraphStore {
    let mut graph = GraphStore::new();
    for i in 0..len {
        graph.add_node(Node::with_id(
            format!("n{i}"),
            format!("Node {i}"),
            EntityType::Location,
            PropertyMap::new(),
        ));
    }
    for i in 1..len {
        graph
            .add_edge(Edge::with_id(
                format!("e{i}"),
                "road",
                RelationshipType::LocatedIn,
                format!("n{}", i - 1),
                format!("n{i}"),
                PropertyMap::new(),
            ))
            .unwrap();
    }
    graph
}

#[test]
fn test_path_alternates_nodes_and_edges() {
    let graph = chain(3);
    let path = graph.find_path("n0", "n2", 5).unwrap();

    assert_eq!(path.len(), 3);
    assert_eq!(path[0].0.id, "n0");
    assert_eq!(path[0].1.map(|e| e.id.as_str()), Some("e1"));
    assert_eq!(path[1].1.map(|e| e.id.as_str()), Some("e2"));
    assert_eq!(path[2].0.id, "n2");
    assert!(path[2].1.is_none());
}

#[test]
fn test_max_depth_bounds_edge_count() {
    let graph = chain(4);
    assert!(graph.find_path("n0", "n3", 2).is_none());
    assert_eq!(graph.find_path("n0", "n3", 3).map(|p| p.len()), Some(4));
}

#[test]
fn test_path_follows_outgoing_edges_only() {
    let graph = chain(3);
    assert!(graph.find_path("n2", "n0", 5).is_none());
}

#[test]
fn test_path_to_self() {
    let graph = chain(1);
    let path = graph.find_path("n0", "n0", 0).unwrap();
    assert_eq!(path.len(), 1);
    assert!(path[0].1.is_none());
}

#[test]
fn test_unknown_endpoints_yield_none() {
    let graph = chain(2);
    assert!(graph.find_path("ghost", "n1", 5).is_none());
    assert!(graph.find_path("n0", "ghost", 5).is_none());
}

#[test]
fn test_shortest_path_preferred() {
    let mut graph = chain(4);
    graph
        .add_edge(Edge::with_id(
            "shortcut",
            "portal",
            RelationshipType::ConnectedTo,
            "n0",
            "n3",
            PropertyMap::new(),
        ))
        .unwrap();

    let path = graph.find_path("n0", "n3", 5).unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path[0].1.map(|e| e.id.as_str()), Some("shortcut"));
}

#[test]
fn test_default_depth_from_config() {
    let mut graph = GraphStore::with_config(StoreConfig::default().with_default_max_depth(1));
    for i in 0..3 {
        graph.add_node(Node::with_id(
            format!("n{i}"),
            format!("Node {i}"),
            EntityType::Location,
            PropertyMap::new(),
        ));
    }
    for i in 1..3 {
        graph
            .add_edge(Edge::with_id(
                format!("e{i}"),
                "road",
                RelationshipType::LocatedIn,
                format!("n{}", i - 1),
                format!("n{i}"),
                PropertyMap::new(),
            ))
            .unwrap();
    }

    assert!(graph.find_path_default("n0", "n1").is_some());
    assert!(graph.find_path_default("n0", "n2").is_none());
}
