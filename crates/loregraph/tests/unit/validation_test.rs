//! Unit tests for the type registry and validation rules.

use loregraph::schema::{
    allowed_connections, is_valid_entity_type, is_valid_relationship_type, validate_edge,
    validate_node,
};
use loregraph::{EntityType, PropertyMap, RelationshipType};

#[test]
fn test_registry_membership() {
    assert!(is_valid_entity_type("DEITY"));
    assert!(is_valid_entity_type("PARTY_MEMBER"));
    assert!(!is_valid_entity_type("deity"));
    assert!(!is_valid_entity_type("DRAGON"));

    assert!(is_valid_relationship_type("CREATED"));
    assert!(is_valid_relationship_type("OWES_FAVOR_TO"));
    assert!(!is_valid_relationship_type("LIKES"));
}

#[test]
fn test_every_tag_round_trips_through_its_string() {
    for t in EntityType::ALL {
        assert_eq!(t.as_str().parse::<EntityType>().unwrap(), t);
    }
    for t in RelationshipType::ALL {
        assert_eq!(t.as_str().parse::<RelationshipType>().unwrap(), t);
    }
}

#[test]
fn test_only_created_and_destroyed_are_restricted() {
    let restricted: Vec<_> = RelationshipType::ALL
        .into_iter()
        .filter(|t| allowed_connections(*t).is_some())
        .collect();
    assert_eq!(
        restricted,
        [RelationshipType::Created, RelationshipType::Destroyed]
    );
}

#[test]
fn test_validate_node() {
    assert!(validate_node("LOCATION", &PropertyMap::new()).is_valid());

    let result = validate_node("DRAGON", &PropertyMap::new());
    assert!(!result.is_valid());
    assert_eq!(result.errors[0], "Invalid node type: DRAGON");
    assert!(result.errors[1].starts_with("Valid types are: DEITY"));
}

#[test]
fn test_validate_edge_unrestricted_type() {
    let result = validate_edge("ALLY_OF", "LOCATION", "ARTIFACT", &PropertyMap::new());
    assert!(result.is_valid());
}

#[test]
fn test_validate_edge_unknown_type_short_circuits() {
    let result = validate_edge("LIKES", "DRAGON", "DRAGON", &PropertyMap::new());
    assert_eq!(result.errors.len(), 2);
    assert_eq!(result.errors[0], "Invalid edge type: LIKES");
}

#[test]
fn test_validate_edge_created_rules() {
    assert!(validate_edge("CREATED", "EVENT", "LOCATION", &PropertyMap::new()).is_valid());
    assert!(validate_edge("CREATED", "NPC", "ARTIFACT", &PropertyMap::new()).is_valid());

    let result = validate_edge("CREATED", "LOCATION", "LOCATION", &PropertyMap::new());
    assert!(!result.is_valid());
    assert_eq!(
        result.errors[0],
        "Invalid source type LOCATION for relationship CREATED"
    );
    assert!(result.errors[1].starts_with("Valid source types:"));
}

#[test]
fn test_validate_edge_destroyed_reports_both_sides() {
    let result = validate_edge("DESTROYED", "LOCATION", "DEITY", &PropertyMap::new());
    assert_eq!(result.errors.len(), 4);
    assert!(result.errors[2].contains("Invalid target type DEITY"));
}
