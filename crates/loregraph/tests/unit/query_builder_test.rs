//! Unit tests for the fluent query builder.

use loregraph::{EntityType, GraphStore, Node, PropertyMap};

fn campaign() -> GraphStore {
    let mut graph = GraphStore::new();
    graph.add_node(Node::new(
        "Thalindra the Archmage",
        EntityType::Npc,
        PropertyMap::new().with("class_type", "Wizard").with("level", 20i64),
    ));
    graph.add_node(Node::new(
        "Orin the Bold",
        EntityType::Npc,
        PropertyMap::new().with("class_type", "Fighter").with("level", 5i64),
    ));
    graph.add_node(Node::new(
        "Zoltar",
        EntityType::Villain,
        PropertyMap::new().with("class_type", "Wizard"),
    ));
    graph.add_node(Node::new("Caierah", EntityType::Location, PropertyMap::new()));
    graph
}

#[test]
fn test_query_by_type() {
    let graph = campaign();
    assert_eq!(graph.query().entity_type(EntityType::Npc).count(), 2);
}

#[test]
fn test_query_by_property_across_types() {
    let graph = campaign();
    let wizards = graph.query().property("class_type", "Wizard").execute();
    let names: Vec<_> = wizards.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["Thalindra the Archmage", "Zoltar"]);
}

#[test]
fn test_query_combined_filters() {
    let graph = campaign();
    let results = graph
        .query()
        .entity_type(EntityType::Npc)
        .name_contains("the")
        .custom(|n| n.properties.get_int("level").unwrap_or(0) > 10)
        .execute();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Thalindra the Archmage");
}

#[test]
fn test_query_property_exists_and_limit() {
    let graph = campaign();
    assert_eq!(graph.query().property_exists("level").count(), 2);
    assert_eq!(graph.query().property_exists("class_type").limit(2).execute().len(), 2);
    assert_eq!(graph.query().limit(2).count(), 4);
}

#[test]
fn test_query_exists() {
    let graph = campaign();
    assert!(graph.query().name_contains("zol").exists());
    assert!(!graph.query().entity_type(EntityType::Deity).exists());
}
