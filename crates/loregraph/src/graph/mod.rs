//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`]: A campaign entity
//! - [`Edge`]: A directed, typed relationship between two nodes
//! - [`GraphStore`]: The indexed in-memory store

pub mod algorithms;
mod property;
mod store;
mod types;

pub use algorithms::PathStep;
pub use property::{PropertyMap, PropertyValue};
pub use store::GraphStore;
pub use types::{generate_id, Direction, Edge, EdgeId, Node, NodeId};
