//! Error types for loregraph operations.
//!
//! All fallible operations return [`Result<T>`]. Lookups that miss return
//! `None` and deletions of absent records return `false`; only insertions,
//! snapshot I/O and the shared handle produce errors.

use std::fmt;
use thiserror::Error;

/// Result type alias for loregraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Which end of a relationship a missing node was supposed to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The edge's `source_id`
    Source,
    /// The edge's `target_id`
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => write!(f, "Source"),
            Endpoint::Target => write!(f, "Target"),
        }
    }
}

/// What a rejected write was trying to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaSubject {
    /// A node written through `add_entity`
    Entity,
    /// An edge written through `add_relationship`
    Relationship,
}

impl fmt::Display for SchemaSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaSubject::Entity => write!(f, "entity"),
            SchemaSubject::Relationship => write!(f, "relationship"),
        }
    }
}

/// Error type for all graph operations.
///
/// Failures are surfaced immediately; nothing is retried or defaulted.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An edge names a node that is not in the graph
    #[error("{endpoint} node {node_id} does not exist")]
    NodeNotFound {
        /// Which end of the edge was missing
        endpoint: Endpoint,
        /// ID of the missing node
        node_id: String,
    },

    /// A write was rejected by schema validation
    #[error("Invalid {subject}: {}", .errors.join("; "))]
    SchemaViolation {
        /// Whether an entity or a relationship was rejected
        subject: SchemaSubject,
        /// Every validation message, in the order they were found
        errors: Vec<String>,
    },

    /// Snapshot could not be read, parsed, replayed or written
    #[error("Storage error: {message}")]
    Storage {
        /// Detailed error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A writer panicked while holding the shared graph lock
    #[error("Graph lock poisoned by a panicked writer")]
    LockPoisoned,
}

impl GraphError {
    /// Create a storage error from a message and optional source.
    pub fn storage<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a missing-node reference error.
    pub fn node_not_found(endpoint: Endpoint, node_id: impl Into<String>) -> Self {
        Self::NodeNotFound {
            endpoint,
            node_id: node_id.into(),
        }
    }

    /// True for reference errors (an id that does not resolve).
    pub fn is_reference_error(&self) -> bool {
        matches!(self, Self::NodeNotFound { .. })
    }

    /// True for schema violations.
    pub fn is_schema_violation(&self) -> bool {
        matches!(self, Self::SchemaViolation { .. })
    }
}
