//! Campaign schema: type tags, connection rules and validation.
//!
//! - [`EntityType`] / [`RelationshipType`]: the closed tag sets
//! - [`registry`]: membership checks and the connection rule table
//! - [`validation`]: accumulated-error checks used by the enforced store

pub mod registry;
mod types;
pub mod validation;

pub use registry::{
    advisory_properties, allowed_connections, is_valid_entity_type, is_valid_relationship_type,
    ConnectionRule, BASE_PROPERTIES,
};
pub use types::{EntityType, RelationshipType, UnknownTypeTag};
pub use validation::{validate_edge, validate_node, ValidationResult};
