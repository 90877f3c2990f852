//! The in-memory graph store: record tables, derived indexes and CRUD.

use super::algorithms::{self, PathStep};
use super::property::PropertyValue;
use super::types::{Direction, Edge, EdgeId, Node, NodeId};
use crate::config::StoreConfig;
use crate::error::{Endpoint, GraphError, Result};
use crate::schema::{EntityType, RelationshipType};
use crate::storage::GraphSnapshot;
use log::{debug, info, trace};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// A record plus the sequence number of its latest insertion.
#[derive(Debug, Clone)]
struct Stored<T> {
    seq: u64,
    record: T,
}

/// Single-process, in-memory property graph.
///
/// Node and edge tables are backed by five derived indexes that are kept
/// exactly consistent with the tables after every mutation:
/// entity type → node ids, name → node id, outgoing and incoming
/// adjacency lists, and relationship type → edge ids.
///
/// `GraphStore` performs no schema validation beyond what the type system
/// already guarantees; wrap it in a
/// [`SchemaEnforcedStore`](crate::SchemaEnforcedStore) to check
/// connection rules. It has no internal locking: share it through
/// [`SharedGraph`](crate::SharedGraph) or keep it behind a single owner.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    config: StoreConfig,
    // Monotonic insertion counter; orders listings and snapshots
    sequence: u64,
    nodes: HashMap<NodeId, Stored<Node>>,
    edges: HashMap<EdgeId, Stored<Edge>>,
    type_index: HashMap<EntityType, HashSet<NodeId>>,
    name_index: HashMap<String, NodeId>,
    adjacency_out: HashMap<NodeId, Vec<EdgeId>>,
    adjacency_in: HashMap<NodeId, Vec<EdgeId>>,
    edge_type_index: HashMap<RelationshipType, HashSet<EdgeId>>,
}

impl GraphStore {
    /// Create an empty store with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// The store's configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Insert or replace a node.
    ///
    /// Re-inserting an existing id replaces the record and repairs the
    /// previous type-index and name-index entries first, so indexes never
    /// hold stale ids. Edges attached to the id are kept. If another node
    /// already owns `node.name`, the name now resolves to this node.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        debug!(
            "Adding node: id={}, name={}, type={}",
            node.id, node.name, node.entity_type
        );

        if let Some(previous) = self.nodes.remove(&node.id) {
            trace!("Node {} already present, repairing indexes", node.id);
            self.unindex_node(&previous.record);
        }

        let id = node.id.clone();
        self.type_index
            .entry(node.entity_type)
            .or_default()
            .insert(id.clone());
        self.name_index.insert(node.name.clone(), id.clone());

        let seq = self.next_sequence();
        self.nodes.insert(id.clone(), Stored { seq, record: node });

        id
    }

    /// Insert an edge between two existing nodes.
    ///
    /// Re-inserting an existing edge id replaces the old edge, including
    /// its adjacency entries.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either endpoint is absent;
    /// the store is left unchanged.
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeId> {
        debug!(
            "Adding edge: id={}, source={}, target={}, type={}",
            edge.id, edge.source_id, edge.target_id, edge.relationship_type
        );

        if !self.nodes.contains_key(&edge.source_id) {
            return Err(GraphError::node_not_found(Endpoint::Source, &edge.source_id));
        }
        if !self.nodes.contains_key(&edge.target_id) {
            return Err(GraphError::node_not_found(Endpoint::Target, &edge.target_id));
        }

        if self.edges.contains_key(&edge.id) {
            trace!("Edge {} already present, replacing", edge.id);
            self.delete_edge(&edge.id);
        }

        let id = edge.id.clone();
        self.adjacency_out
            .entry(edge.source_id.clone())
            .or_default()
            .push(id.clone());
        self.adjacency_in
            .entry(edge.target_id.clone())
            .or_default()
            .push(id.clone());
        self.edge_type_index
            .entry(edge.relationship_type)
            .or_default()
            .insert(id.clone());

        let seq = self.next_sequence();
        self.edges.insert(id.clone(), Stored { seq, record: edge });

        Ok(id)
    }

    /// Get a node by ID.
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id).map(|stored| &stored.record)
    }

    /// Get an edge by ID.
    pub fn get_edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id).map(|stored| &stored.record)
    }

    /// Get the node currently registered under `name`.
    pub fn get_node_by_name(&self, name: &str) -> Option<&Node> {
        self.name_index.get(name).and_then(|id| self.get_node(id))
    }

    /// All nodes of one entity type, in insertion order.
    pub fn get_nodes_by_type(&self, entity_type: EntityType) -> Vec<&Node> {
        let Some(ids) = self.type_index.get(&entity_type) else {
            return Vec::new();
        };
        let mut stored: Vec<_> = ids.iter().filter_map(|id| self.nodes.get(id)).collect();
        stored.sort_by_key(|s| s.seq);
        stored.into_iter().map(|s| &s.record).collect()
    }

    /// All edges of one relationship type, in insertion order.
    pub fn get_edges_by_type(&self, relationship_type: RelationshipType) -> Vec<&Edge> {
        let Some(ids) = self.edge_type_index.get(&relationship_type) else {
            return Vec::new();
        };
        let mut stored: Vec<_> = ids.iter().filter_map(|id| self.edges.get(id)).collect();
        stored.sort_by_key(|s| s.seq);
        stored.into_iter().map(|s| &s.record).collect()
    }

    /// Nodes connected to `node_id`, each paired with the connecting edge.
    ///
    /// With [`Direction::Both`], outgoing matches come first (in adjacency
    /// order), then incoming matches. An unknown `node_id` yields an empty
    /// list.
    pub fn get_related_nodes(
        &self,
        node_id: &str,
        edge_type: Option<RelationshipType>,
        direction: Direction,
    ) -> Vec<(&Node, &Edge)> {
        let mut results = Vec::new();
        let matches = |edge: &Edge| edge_type.map_or(true, |t| edge.relationship_type == t);

        if direction.includes_outgoing() {
            for edge in self.edges_for(self.outgoing_edge_ids(node_id)) {
                if matches(edge) {
                    if let Some(target) = self.get_node(&edge.target_id) {
                        results.push((target, edge));
                    }
                }
            }
        }

        if direction.includes_incoming() {
            for edge in self.edges_for(self.incoming_edge_ids(node_id)) {
                if matches(edge) {
                    if let Some(source) = self.get_node(&edge.source_id) {
                        results.push((source, edge));
                    }
                }
            }
        }

        results
    }

    /// All edges from `source_id` to `target_id`, in adjacency order.
    pub fn get_edges_between(&self, source_id: &str, target_id: &str) -> Vec<&Edge> {
        self.edges_for(self.outgoing_edge_ids(source_id))
            .filter(|edge| edge.target_id == target_id)
            .collect()
    }

    /// Ids of edges leaving `node_id`, in insertion order.
    pub fn outgoing_edge_ids(&self, node_id: &str) -> &[EdgeId] {
        self.adjacency_out
            .get(node_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ids of edges arriving at `node_id`, in insertion order.
    pub fn incoming_edge_ids(&self, node_id: &str) -> &[EdgeId] {
        self.adjacency_in
            .get(node_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Shortest directed path from `start_id` to `end_id`.
    ///
    /// Breadth-first over outgoing edges only. `max_depth` bounds the
    /// number of edges in the returned path. The result alternates node and
    /// edge and ends with `(end_node, None)`; `start_id == end_id` returns
    /// `[(start_node, None)]` without searching. Returns `None` when either
    /// node is unknown or no path fits within the bound.
    ///
    /// Among several shortest paths, the one found first in adjacency
    /// insertion order is returned.
    pub fn find_path(
        &self,
        start_id: &str,
        end_id: &str,
        max_depth: usize,
    ) -> Option<Vec<PathStep<'_>>> {
        algorithms::find_path(self, start_id, end_id, max_depth)
    }

    /// [`find_path`](Self::find_path) with the configured default bound.
    pub fn find_path_default(&self, start_id: &str, end_id: &str) -> Option<Vec<PathStep<'_>>> {
        self.find_path(start_id, end_id, self.config.default_max_depth)
    }

    /// Nodes whose property `key` equals `value` exactly, in insertion order.
    ///
    /// Linear scan; properties are not indexed.
    pub fn find_nodes_by_property(
        &self,
        key: &str,
        value: impl Into<PropertyValue>,
    ) -> Vec<&Node> {
        let value = value.into();
        self.nodes()
            .filter(|node| node.properties.get(key) == Some(&value))
            .collect()
    }

    /// Delete a node and every edge touching it.
    ///
    /// Returns `false` if the node does not exist.
    pub fn delete_node(&mut self, id: &str) -> bool {
        let Some(stored) = self.nodes.remove(id) else {
            return false;
        };
        debug!("Deleting node: id={id}");

        self.unindex_node(&stored.record);

        let mut incident: Vec<EdgeId> = self.outgoing_edge_ids(id).to_vec();
        incident.extend(self.incoming_edge_ids(id).iter().cloned());

        trace!("Deleting {} connected edges for node {}", incident.len(), id);
        for edge_id in incident {
            // Self-loops appear in both lists; the second delete is a no-op
            self.delete_edge(&edge_id);
        }

        self.adjacency_out.remove(id);
        self.adjacency_in.remove(id);

        true
    }

    /// Delete an edge.
    ///
    /// Returns `false` if the edge does not exist.
    pub fn delete_edge(&mut self, id: &str) -> bool {
        let Some(stored) = self.edges.remove(id) else {
            return false;
        };
        debug!("Deleting edge: id={id}");
        let edge = stored.record;

        if let Some(ids) = self.edge_type_index.get_mut(&edge.relationship_type) {
            ids.remove(id);
            if ids.is_empty() {
                self.edge_type_index.remove(&edge.relationship_type);
            }
        }

        if let Some(out_edges) = self.adjacency_out.get_mut(&edge.source_id) {
            out_edges.retain(|e| e != id);
        }
        if let Some(in_edges) = self.adjacency_in.get_mut(&edge.target_id) {
            in_edges.retain(|e| e != id);
        }

        true
    }

    /// Remove every node, edge and index entry.
    ///
    /// Configuration is kept.
    pub fn clear(&mut self) {
        info!(
            "Clearing graph ({} nodes, {} edges)",
            self.node_count(),
            self.edge_count()
        );
        *self = Self::with_config(self.config.clone());
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the graph holds no nodes (and therefore no edges).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        let mut stored: Vec<_> = self.nodes.values().collect();
        stored.sort_by_key(|s| s.seq);
        stored.into_iter().map(|s| &s.record)
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        let mut stored: Vec<_> = self.edges.values().collect();
        stored.sort_by_key(|s| s.seq);
        stored.into_iter().map(|s| &s.record)
    }

    /// Create a new query builder over this graph's nodes.
    pub fn query(&self) -> crate::query::QueryBuilder<'_> {
        crate::query::QueryBuilder::new(self)
    }

    /// Write the node and edge tables to a JSON snapshot at `path`.
    ///
    /// Indexes are not written; they are rebuilt on load.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Storage`] if the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!(
            "Saving graph to {:?} ({} nodes, {} edges)",
            path,
            self.node_count(),
            self.edge_count()
        );
        crate::storage::write_snapshot(&self.to_snapshot(), path, &self.config)
    }

    /// Replace this graph with the snapshot stored at `path`.
    ///
    /// The snapshot is replayed (nodes first, then edges) into a fresh
    /// store, which replaces this one only if every record loads. On error
    /// the current contents are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Storage`] if the file is unreadable or
    /// malformed, or if an edge references a node missing from the
    /// snapshot.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!("Loading graph from {:?}", path);
        let snapshot = crate::storage::read_snapshot(path)?;
        let loaded = Self::from_snapshot(snapshot, self.config.clone())?;
        *self = loaded;
        Ok(())
    }

    /// Capture the node and edge tables in insertion order.
    pub fn to_snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().cloned().collect(),
            edges: self.edges().cloned().collect(),
        }
    }

    /// Build a store by replaying a snapshot, nodes first.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Storage`] if an edge references a node that
    /// is not part of the snapshot.
    pub fn from_snapshot(snapshot: GraphSnapshot, config: StoreConfig) -> Result<Self> {
        let mut graph = Self::with_config(config);

        for node in snapshot.nodes {
            graph.add_node(node);
        }

        for edge in snapshot.edges {
            let edge_id = edge.id.clone();
            graph.add_edge(edge).map_err(|e| {
                GraphError::storage(format!("Snapshot edge {edge_id} cannot be restored"), Some(e))
            })?;
        }

        trace!(
            "Replayed snapshot: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    // Private helper methods

    fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence;
        self.sequence += 1;
        seq
    }

    fn edges_for<'a>(&'a self, ids: &'a [EdgeId]) -> impl Iterator<Item = &'a Edge> + 'a {
        ids.iter().filter_map(move |id| self.get_edge(id))
    }

    /// Drop a node's type-index and name-index entries.
    fn unindex_node(&mut self, node: &Node) {
        if let Some(ids) = self.type_index.get_mut(&node.entity_type) {
            ids.remove(&node.id);
            if ids.is_empty() {
                self.type_index.remove(&node.entity_type);
            }
        }

        // The name may have been claimed by a later node
        if self.name_index.get(&node.name) == Some(&node.id) {
            self.name_index.remove(&node.name);
        }
    }
}
