//! Unit tests for Node creation and property handling.

use loregraph::{EntityType, Node, PropertyMap, PropertyValue};

#[test]
fn test_node_creation_with_properties() {
    let props = PropertyMap::new()
        .with("pantheon", "Archosian Pantheon")
        .with("holy_days", vec!["Solstice"]);

    let node = Node::with_id("d1", "Archos", EntityType::Deity, props);

    assert_eq!(node.id, "d1");
    assert_eq!(node.name, "Archos");
    assert_eq!(node.entity_type, EntityType::Deity);
    assert_eq!(node.properties.get_string("pantheon"), Some("Archosian Pantheon"));
    assert_eq!(node.properties.get_list("holy_days").map(<[PropertyValue]>::len), Some(1));
}

#[test]
fn test_node_generates_id_when_omitted() {
    let node = Node::new("Caierah", EntityType::Location, PropertyMap::new());
    assert_eq!(node.id.len(), 36);
}

#[test]
fn test_node_set_property() {
    let mut node = Node::new("Thalindra", EntityType::Npc, PropertyMap::new());

    node.set_property("class_type", "Wizard");
    node.set_property("quest_giver", true);

    assert_eq!(node.get_property("class_type"), Some(&PropertyValue::String("Wizard".to_string())));
    assert_eq!(node.get_property("quest_giver"), Some(&PropertyValue::Bool(true)));
}

#[test]
fn test_node_get_property_missing() {
    let node = Node::new("Nef", EntityType::Deity, PropertyMap::new());

    assert_eq!(node.get_property("missing"), None);
}
