//! Schema-enforced façade over [`GraphStore`].
//!
//! Only the two write paths are intercepted. Every read, traversal,
//! deletion and persistence call is forwarded unchanged.

use crate::error::{Endpoint, GraphError, Result, SchemaSubject};
use crate::graph::{
    generate_id, Direction, Edge, EdgeId, GraphStore, Node, NodeId, PathStep, PropertyMap,
    PropertyValue,
};
use crate::query::QueryBuilder;
use crate::schema::{validate_edge, validate_node, EntityType, RelationshipType};
use log::{debug, warn};
use std::collections::HashSet;
use std::path::Path;

/// A [`GraphStore`] whose entity and relationship writes are validated.
///
/// `add_entity` rejects unknown entity types, and re-typing an existing
/// entity in a way that breaks a connection rule of one of its edges;
/// `add_relationship` rejects unknown relationship types and pairings
/// forbidden by a connection rule. Rejected writes leave the store
/// unchanged.
///
/// [`graph_mut`](Self::graph_mut) hands out the underlying store, which
/// accepts any well-typed write. Bulk imports and migrations use it on
/// purpose to skip the connection rules.
#[derive(Debug, Clone, Default)]
pub struct SchemaEnforcedStore {
    graph: GraphStore,
}

impl SchemaEnforcedStore {
    /// Wrap an existing store.
    pub fn new(graph: GraphStore) -> Self {
        Self { graph }
    }

    /// The underlying store.
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// The underlying store, writable without validation.
    pub fn graph_mut(&mut self) -> &mut GraphStore {
        &mut self.graph
    }

    /// Unwrap into the underlying store.
    pub fn into_inner(self) -> GraphStore {
        self.graph
    }

    /// Add a validated entity with a generated id.
    ///
    /// `entity_type` may be an [`EntityType`] or a raw tag such as
    /// `"DEITY"`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SchemaViolation`] if the type tag is unknown.
    pub fn add_entity(
        &mut self,
        name: impl Into<String>,
        entity_type: impl AsRef<str>,
        properties: PropertyMap,
    ) -> Result<NodeId> {
        self.add_entity_with_id(generate_id(), name, entity_type, properties)
    }

    /// Add a validated entity under a caller-supplied id.
    ///
    /// Re-using an existing id replaces that entity and keeps its edges, so
    /// every edge touching it is re-checked against the new type first.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SchemaViolation`] if the type tag is unknown,
    /// or if the new type would break the connection rule of an edge
    /// already attached to the entity.
    pub fn add_entity_with_id(
        &mut self,
        id: impl Into<NodeId>,
        name: impl Into<String>,
        entity_type: impl AsRef<str>,
        properties: PropertyMap,
    ) -> Result<NodeId> {
        let tag = entity_type.as_ref();
        let entity_type = Self::checked_entity_type(tag, &properties)?;
        let id = id.into();
        self.check_incident_edges(&id, entity_type)?;
        Ok(self
            .graph
            .add_node(Node::with_id(id, name, entity_type, properties)))
    }

    /// Add a validated relationship with a generated id.
    ///
    /// Both endpoints are resolved before any type check runs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is missing,
    /// or [`GraphError::SchemaViolation`] if the relationship type is
    /// unknown or the endpoint types break its connection rule.
    pub fn add_relationship(
        &mut self,
        name: impl Into<String>,
        relationship_type: impl AsRef<str>,
        source_id: &str,
        target_id: &str,
        properties: PropertyMap,
    ) -> Result<EdgeId> {
        self.add_relationship_with_id(
            generate_id(),
            name,
            relationship_type,
            source_id,
            target_id,
            properties,
        )
    }

    /// Add a validated relationship under a caller-supplied id.
    ///
    /// # Errors
    ///
    /// Same as [`add_relationship`](Self::add_relationship).
    pub fn add_relationship_with_id(
        &mut self,
        id: impl Into<EdgeId>,
        name: impl Into<String>,
        relationship_type: impl AsRef<str>,
        source_id: &str,
        target_id: &str,
        properties: PropertyMap,
    ) -> Result<EdgeId> {
        let tag = relationship_type.as_ref();

        let source_type = self
            .graph
            .get_node(source_id)
            .ok_or_else(|| GraphError::node_not_found(Endpoint::Source, source_id))?
            .entity_type;
        let target_type = self
            .graph
            .get_node(target_id)
            .ok_or_else(|| GraphError::node_not_found(Endpoint::Target, target_id))?
            .entity_type;

        let validation = validate_edge(
            tag,
            source_type.as_str(),
            target_type.as_str(),
            &properties,
        );
        if !validation.is_valid() {
            warn!("Rejected relationship {tag} ({source_type} -> {target_type})");
            validation.into_result(SchemaSubject::Relationship)?;
        }

        let relationship_type = tag.parse::<RelationshipType>().map_err(|_| {
            GraphError::SchemaViolation {
                subject: SchemaSubject::Relationship,
                errors: vec![format!("Invalid edge type: {tag}")],
            }
        })?;

        debug!("Relationship {relationship_type} passed validation");
        self.graph.add_edge(Edge::with_id(
            id,
            name,
            relationship_type,
            source_id,
            target_id,
            properties,
        ))
    }

    // Pass-through reads, traversal, deletion and persistence

    /// See [`GraphStore::get_node`].
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.graph.get_node(id)
    }

    /// See [`GraphStore::get_edge`].
    pub fn get_edge(&self, id: &str) -> Option<&Edge> {
        self.graph.get_edge(id)
    }

    /// See [`GraphStore::get_nodes_by_type`].
    pub fn get_nodes_by_type(&self, entity_type: EntityType) -> Vec<&Node> {
        self.graph.get_nodes_by_type(entity_type)
    }

    /// See [`GraphStore::get_node_by_name`].
    pub fn get_node_by_name(&self, name: &str) -> Option<&Node> {
        self.graph.get_node_by_name(name)
    }

    /// See [`GraphStore::get_edges_by_type`].
    pub fn get_edges_by_type(&self, relationship_type: RelationshipType) -> Vec<&Edge> {
        self.graph.get_edges_by_type(relationship_type)
    }

    /// See [`GraphStore::get_edges_between`].
    pub fn get_edges_between(&self, source_id: &str, target_id: &str) -> Vec<&Edge> {
        self.graph.get_edges_between(source_id, target_id)
    }

    /// See [`GraphStore::get_related_nodes`].
    pub fn get_related_nodes(
        &self,
        node_id: &str,
        edge_type: Option<RelationshipType>,
        direction: Direction,
    ) -> Vec<(&Node, &Edge)> {
        self.graph.get_related_nodes(node_id, edge_type, direction)
    }

    /// See [`GraphStore::find_path`].
    pub fn find_path(
        &self,
        start_id: &str,
        end_id: &str,
        max_depth: usize,
    ) -> Option<Vec<PathStep<'_>>> {
        self.graph.find_path(start_id, end_id, max_depth)
    }

    /// See [`GraphStore::find_path_default`].
    pub fn find_path_default(&self, start_id: &str, end_id: &str) -> Option<Vec<PathStep<'_>>> {
        self.graph.find_path_default(start_id, end_id)
    }

    /// See [`GraphStore::find_nodes_by_property`].
    pub fn find_nodes_by_property(
        &self,
        key: &str,
        value: impl Into<PropertyValue>,
    ) -> Vec<&Node> {
        self.graph.find_nodes_by_property(key, value)
    }

    /// See [`GraphStore::query`].
    pub fn query(&self) -> QueryBuilder<'_> {
        self.graph.query()
    }

    /// See [`GraphStore::node_count`].
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// See [`GraphStore::edge_count`].
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// See [`GraphStore::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// See [`GraphStore::nodes`].
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.nodes()
    }

    /// See [`GraphStore::edges`].
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edges()
    }

    /// See [`GraphStore::save_to_file`].
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.graph.save_to_file(path)
    }

    /// See [`GraphStore::load_from_file`].
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.graph.load_from_file(path)
    }

    /// See [`GraphStore::clear`].
    pub fn clear(&mut self) {
        self.graph.clear()
    }

    /// See [`GraphStore::delete_node`].
    pub fn delete_node(&mut self, id: &str) -> bool {
        self.graph.delete_node(id)
    }

    /// See [`GraphStore::delete_edge`].
    pub fn delete_edge(&mut self, id: &str) -> bool {
        self.graph.delete_edge(id)
    }

    /// Re-validate the edges of `id` as if the node had `new_type`.
    fn check_incident_edges(&self, id: &str, new_type: EntityType) -> Result<()> {
        let current = match self.graph.get_node(id) {
            Some(node) if node.entity_type != new_type => node.entity_type,
            _ => return Ok(()),
        };

        let endpoint_type = |node_id: &str| {
            if node_id == id {
                Some(new_type)
            } else {
                self.graph.get_node(node_id).map(|n| n.entity_type)
            }
        };

        let incident = self
            .graph
            .outgoing_edge_ids(id)
            .iter()
            .chain(self.graph.incoming_edge_ids(id))
            .filter_map(|edge_id| self.graph.get_edge(edge_id));

        let mut errors = Vec::new();
        let mut checked = HashSet::new();
        for edge in incident {
            // Self-loops sit in both adjacency lists
            if !checked.insert(edge.id.as_str()) {
                continue;
            }
            let (Some(source), Some(target)) =
                (endpoint_type(&edge.source_id), endpoint_type(&edge.target_id))
            else {
                continue;
            };
            let validation = validate_edge(
                edge.relationship_type.as_str(),
                source.as_str(),
                target.as_str(),
                &edge.properties,
            );
            if !validation.is_valid() {
                errors.push(format!(
                    "Changing {id} from {current} to {new_type} breaks edge {}",
                    edge.id
                ));
                errors.extend(validation.errors);
            }
        }

        if errors.is_empty() {
            return Ok(());
        }
        warn!("Rejected re-typing of {id} to {new_type}");
        Err(GraphError::SchemaViolation {
            subject: SchemaSubject::Entity,
            errors,
        })
    }

    fn checked_entity_type(tag: &str, properties: &PropertyMap) -> Result<EntityType> {
        let validation = validate_node(tag, properties);
        if !validation.is_valid() {
            warn!("Rejected entity of type {tag}");
            validation.into_result(SchemaSubject::Entity)?;
        }
        tag.parse::<EntityType>().map_err(|_| GraphError::SchemaViolation {
            subject: SchemaSubject::Entity,
            errors: vec![format!("Invalid node type: {tag}")],
        })
    }
}

impl From<GraphStore> for SchemaEnforcedStore {
    fn from(graph: GraphStore) -> Self {
        Self::new(graph)
    }
}
