//! # loregraph
//!
//! A schema-enforced, in-memory property graph for tabletop campaign
//! knowledge: deities, places, events, factions, NPCs and the typed
//! relationships between them.
//!
//! ## Core Principles
//!
//! - **Indexes Stay Exact**: Every mutation keeps the type, name, adjacency
//!   and relationship-type indexes consistent with the record tables
//! - **No Dangling Edges**: Edges need live endpoints; deleting a node
//!   deletes its edges
//! - **Schema at the Gate**: Validation runs before writes, never after
//! - **Zero Magic**: No background work, no retries, no hidden locking
//!
//! ## Architecture
//!
//! ```text
//! Ingestion / query tools (external)
//!     ↓
//! SchemaEnforcedStore (validated writes)   SharedGraph (single writer)
//!     ↓
//! GraphStore (records, indexes, traversal, path search)
//!     ↓
//! JSON snapshots
//! ```
//!
//! ## Example
//!
//! ```rust
//! use loregraph::{Direction, EntityType, PropertyMap, RelationshipType, SchemaEnforcedStore};
//!
//! let mut store = SchemaEnforcedStore::default();
//! let archos = store.add_entity("Archos", EntityType::Deity, PropertyMap::new()).unwrap();
//! let nef = store.add_entity("Nef", EntityType::Deity, PropertyMap::new()).unwrap();
//! store
//!     .add_relationship("Twins", RelationshipType::ParentOf, &archos, &nef, PropertyMap::new())
//!     .unwrap();
//!
//! let related = store.get_related_nodes(&archos, None, Direction::Outgoing);
//! assert_eq!(related[0].0.name, "Nef");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod enforced;
pub mod error;
pub mod graph;
pub mod helpers;
pub mod query;
pub mod schema;
pub mod shared;
pub mod storage;

// Re-export main types
pub use config::{StoreConfig, DEFAULT_MAX_DEPTH};
pub use enforced::SchemaEnforcedStore;
pub use error::{Endpoint, GraphError, Result, SchemaSubject};
pub use graph::{
    Direction, Edge, EdgeId, GraphStore, Node, NodeId, PathStep, PropertyMap, PropertyValue,
};
pub use query::QueryBuilder;
pub use schema::{EntityType, RelationshipType, ValidationResult};
pub use shared::SharedGraph;
pub use storage::GraphSnapshot;
