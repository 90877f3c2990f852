//! Query builder for fluent node searches.
//!
//! Filters are combined with AND and evaluated by a linear scan in
//! insertion order. This is a convenience over the store's lookups, not a
//! graph query language.

use crate::graph::{GraphStore, Node, PropertyValue};
use crate::schema::EntityType;

/// A filter predicate that can be applied to nodes.
type FilterFn = Box<dyn Fn(&Node) -> bool>;

/// Fluent query builder over a [`GraphStore`].
///
/// # Examples
///
/// ```
/// use loregraph::{EntityType, GraphStore, Node, PropertyMap};
///
/// let mut graph = GraphStore::new();
/// graph.add_node(Node::new(
///     "Thalindra the Archmage",
///     EntityType::Npc,
///     PropertyMap::new().with("class_type", "Wizard"),
/// ));
///
/// let wizards = graph.query()
///     .entity_type(EntityType::Npc)
///     .property("class_type", "Wizard")
///     .execute();
/// assert_eq!(wizards.len(), 1);
/// ```
pub struct QueryBuilder<'a> {
    graph: &'a GraphStore,
    entity_type: Option<EntityType>,
    filters: Vec<FilterFn>,
    limit_value: Option<usize>,
}

impl<'a> QueryBuilder<'a> {
    /// Create a new query builder for the given graph.
    pub fn new(graph: &'a GraphStore) -> Self {
        Self {
            graph,
            entity_type: None,
            filters: Vec::new(),
            limit_value: None,
        }
    }

    /// Restrict results to one entity type.
    ///
    /// Uses the type index instead of scanning every node.
    pub fn entity_type(mut self, entity_type: EntityType) -> Self {
        self.entity_type = Some(entity_type);
        self
    }

    /// Filter nodes by exact property match.
    pub fn property<V: Into<PropertyValue>>(mut self, key: &str, value: V) -> Self {
        let key = key.to_string();
        let value = value.into();
        self.filters
            .push(Box::new(move |node| node.properties.get(&key) == Some(&value)));
        self
    }

    /// Filter nodes that have a specific property (regardless of value).
    pub fn property_exists(mut self, key: &str) -> Self {
        let key = key.to_string();
        self.filters
            .push(Box::new(move |node| node.properties.contains_key(&key)));
        self
    }

    /// Filter nodes by name containing a substring (case-insensitive).
    pub fn name_contains(mut self, substring: &str) -> Self {
        let substring = substring.to_lowercase();
        self.filters
            .push(Box::new(move |node| node.name.to_lowercase().contains(&substring)));
        self
    }

    /// Filter nodes using a custom predicate function.
    pub fn custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Node) -> bool + 'static,
    {
        self.filters.push(Box::new(predicate));
        self
    }

    /// Limit the number of results returned.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit_value = Some(n);
        self
    }

    /// Execute the query and return matching nodes in insertion order.
    pub fn execute(&self) -> Vec<&'a Node> {
        let limit = self.limit_value.unwrap_or(usize::MAX);
        self.candidates()
            .into_iter()
            .filter(|node| self.matches_filters(node))
            .take(limit)
            .collect()
    }

    /// Count the number of matching nodes (ignores `limit`).
    pub fn count(&self) -> usize {
        self.candidates()
            .into_iter()
            .filter(|node| self.matches_filters(node))
            .count()
    }

    /// Check if any nodes match the query (short-circuits on first match).
    pub fn exists(&self) -> bool {
        self.candidates()
            .into_iter()
            .any(|node| self.matches_filters(node))
    }

    fn candidates(&self) -> Vec<&'a Node> {
        match self.entity_type {
            Some(t) => self.graph.get_nodes_by_type(t),
            None => self.graph.nodes().collect(),
        }
    }

    /// Check if a node matches all filters.
    fn matches_filters(&self, node: &Node) -> bool {
        self.filters.iter().all(|filter| filter(node))
    }
}
