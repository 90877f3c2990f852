//! Pre-insertion validation of entity and relationship type tags.
//!
//! Validation accumulates every problem it can find instead of stopping at
//! the first one, so a rejected write reports all of its errors at once.
//! Property content is never inspected.

use super::registry::allowed_connections;
use super::types::{EntityType, RelationshipType};
use crate::error::{GraphError, Result, SchemaSubject};
use crate::graph::PropertyMap;

/// Outcome of a validation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the check passed
    pub is_valid: bool,
    /// Every error message, in the order found
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// A passing result with no errors.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Record an error and mark the result invalid.
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Whether the check passed.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Turn a failing result into a [`GraphError::SchemaViolation`].
    pub fn into_result(self, subject: SchemaSubject) -> Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(GraphError::SchemaViolation {
                subject,
                errors: self.errors,
            })
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl From<&ValidationResult> for bool {
    fn from(result: &ValidationResult) -> bool {
        result.is_valid
    }
}

impl From<ValidationResult> for bool {
    fn from(result: ValidationResult) -> bool {
        result.is_valid
    }
}

/// Validate a prospective entity.
///
/// Fails only when `node_type` is not a known [`EntityType`].
pub fn validate_node(node_type: &str, _properties: &PropertyMap) -> ValidationResult {
    let mut result = ValidationResult::valid();

    if node_type.parse::<EntityType>().is_err() {
        result.add_error(format!("Invalid node type: {node_type}"));
        result.add_error(format!("Valid types are: {}", join_tags(&EntityType::ALL)));
    }

    result
}

/// Validate a prospective relationship between nodes of the given types.
///
/// An unknown `edge_type` ends the check immediately. Otherwise unknown
/// endpoint types and, for restricted relationship types, disallowed
/// pairings are all reported.
pub fn validate_edge(
    edge_type: &str,
    source_type: &str,
    target_type: &str,
    _properties: &PropertyMap,
) -> ValidationResult {
    let mut result = ValidationResult::valid();

    let relationship_type = match edge_type.parse::<RelationshipType>() {
        Ok(t) => t,
        Err(_) => {
            result.add_error(format!("Invalid edge type: {edge_type}"));
            result.add_error(format!(
                "Valid types are: {}",
                join_tags(&RelationshipType::ALL)
            ));
            return result;
        }
    };

    let source = source_type.parse::<EntityType>().ok();
    if source.is_none() {
        result.add_error(format!("Invalid source node type: {source_type}"));
    }

    let target = target_type.parse::<EntityType>().ok();
    if target.is_none() {
        result.add_error(format!("Invalid target node type: {target_type}"));
    }

    if let Some(rule) = allowed_connections(relationship_type) {
        if !source.is_some_and(|t| rule.allows_source(t)) {
            result.add_error(format!(
                "Invalid source type {source_type} for relationship {relationship_type}"
            ));
            result.add_error(format!(
                "Valid source types: {}",
                join_tags(rule.valid_sources)
            ));
        }

        if !target.is_some_and(|t| rule.allows_target(t)) {
            result.add_error(format!(
                "Invalid target type {target_type} for relationship {relationship_type}"
            ));
            result.add_error(format!(
                "Valid target types: {}",
                join_tags(rule.valid_targets)
            ));
        }
    }

    result
}

fn join_tags<T: AsRef<str>>(tags: &[T]) -> String {
    tags.iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}
