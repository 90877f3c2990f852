//! Unit tests for lookup helpers and the sample campaign graphs.

use loregraph::helpers::{
    create_example_graph, create_larger_example, find_path_between, resolve_entity,
};
use loregraph::{Direction, EntityType, RelationshipType};

#[test]
fn test_example_graph_contents() {
    let graph = create_example_graph().unwrap();

    assert_eq!(graph.get_nodes_by_type(EntityType::Deity).len(), 2);
    let archos = graph.get_node_by_name("Archos").unwrap();
    let children = graph.get_related_nodes(
        &archos.id,
        Some(RelationshipType::ParentOf),
        Direction::Outgoing,
    );
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].0.name, "Nef");
}

#[test]
fn test_larger_example_links_new_entities() {
    let graph = create_larger_example().unwrap();

    let mage = resolve_entity(&graph, "Thalindra the Archmage").unwrap();
    let outgoing = graph.get_related_nodes(&mage.id, None, Direction::Outgoing);
    let names: Vec<_> = outgoing.iter().map(|(n, _)| n.name.as_str()).collect();
    assert_eq!(names, ["Caierah", "Alfir", "Orb of Astral Resonance"]);

    assert_eq!(graph.get_edges_by_type(RelationshipType::Created).len(), 2);
}

#[test]
fn test_find_path_between_unknown_name() {
    let graph = create_example_graph().unwrap();
    assert!(find_path_between(&graph, "Archos", "Nobody", 5).is_none());
}

#[test]
fn test_find_path_between_same_entity() {
    let graph = create_example_graph().unwrap();
    let path = find_path_between(&graph, "Caierah", "Caierah", 5).unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path[0].0.name, "Caierah");
}
