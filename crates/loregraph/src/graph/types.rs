//! Core graph records: entities, relationships, ids and traversal direction.

use super::property::{PropertyMap, PropertyValue};
use crate::schema::{EntityType, RelationshipType};
use serde::{Deserialize, Serialize};

/// Unique identifier for a node (opaque string, UUID v4 when generated).
pub type NodeId = String;

/// Unique identifier for an edge (opaque string, UUID v4 when generated).
pub type EdgeId = String;

/// Generate a fresh random id.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Direction for relationship queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Follow outgoing edges (from this node)
    #[default]
    Outgoing,
    /// Follow incoming edges (to this node)
    Incoming,
    /// Outgoing matches first, then incoming matches
    Both,
}

impl Direction {
    /// Whether outgoing edges are followed.
    pub fn includes_outgoing(&self) -> bool {
        matches!(self, Direction::Outgoing | Direction::Both)
    }

    /// Whether incoming edges are followed.
    pub fn includes_incoming(&self) -> bool {
        matches!(self, Direction::Incoming | Direction::Both)
    }
}

/// An entity in the campaign graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    #[serde(default = "generate_id")]
    pub id: NodeId,
    /// Human-readable name, also resolvable through the name index
    pub name: String,
    /// Entity type tag
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// Open key-value metadata
    #[serde(default)]
    pub properties: PropertyMap,
}

impl Node {
    /// Create a node with a freshly generated id.
    pub fn new(name: impl Into<String>, entity_type: EntityType, properties: PropertyMap) -> Self {
        Self::with_id(generate_id(), name, entity_type, properties)
    }

    /// Create a node with a caller-supplied id.
    pub fn with_id(
        id: impl Into<NodeId>,
        name: impl Into<String>,
        entity_type: EntityType,
        properties: PropertyMap,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            entity_type,
            properties,
        }
    }

    /// Add or update a property.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key, value);
    }

    /// Get a property value.
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

/// A directed, typed relationship: `source_id` → `target_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier
    #[serde(default = "generate_id")]
    pub id: EdgeId,
    /// Human-readable name ("Twin Gods Creation")
    pub name: String,
    /// Relationship type tag
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
    /// Source node ID
    pub source_id: NodeId,
    /// Target node ID
    pub target_id: NodeId,
    /// Open key-value metadata
    #[serde(default)]
    pub properties: PropertyMap,
}

impl Edge {
    /// Create an edge with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        relationship_type: RelationshipType,
        source_id: impl Into<NodeId>,
        target_id: impl Into<NodeId>,
        properties: PropertyMap,
    ) -> Self {
        Self::with_id(
            generate_id(),
            name,
            relationship_type,
            source_id,
            target_id,
            properties,
        )
    }

    /// Create an edge with a caller-supplied id.
    pub fn with_id(
        id: impl Into<EdgeId>,
        name: impl Into<String>,
        relationship_type: RelationshipType,
        source_id: impl Into<NodeId>,
        target_id: impl Into<NodeId>,
        properties: PropertyMap,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            relationship_type,
            source_id: source_id.into(),
            target_id: target_id.into(),
            properties,
        }
    }

    /// Add or update a property.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key, value);
    }

    /// Get a property value.
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}
