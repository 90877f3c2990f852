//! Unit tests for Edge creation and property handling.

use loregraph::{Edge, PropertyMap, PropertyValue, RelationshipType};

#[test]
fn test_edge_creation_with_properties() {
    let props = PropertyMap::new()
        .with("position", "Eastern Coast")
        .with("years", 300i64);

    let edge = Edge::with_id("e1", "Residence", RelationshipType::LocatedIn, "npc", "moon", props);

    assert_eq!(edge.id, "e1");
    assert_eq!(edge.name, "Residence");
    assert_eq!(edge.source_id, "npc");
    assert_eq!(edge.target_id, "moon");
    assert_eq!(edge.relationship_type, RelationshipType::LocatedIn);
    assert_eq!(edge.properties.get_string("position"), Some("Eastern Coast"));
    assert_eq!(edge.properties.get_int("years"), Some(300));
}

#[test]
fn test_edge_set_property() {
    let mut edge = Edge::new("Debt", RelationshipType::OwesFavorTo, "a", "b", PropertyMap::new());

    edge.set_property("repaid", false);
    edge.set_property("favor", "Safe passage");

    assert_eq!(edge.get_property("repaid"), Some(&PropertyValue::Bool(false)));
    assert_eq!(edge.get_property("favor"), Some(&PropertyValue::String("Safe passage".to_string())));
}
