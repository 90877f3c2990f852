//! Path finding over the directed relationship graph.

use super::store::GraphStore;
use super::types::{Edge, Node};
use log::trace;
use std::collections::{HashMap, HashSet, VecDeque};

/// One hop of a path: a node and the edge leaving it toward the next node.
///
/// The final step of a path carries `None`.
pub type PathStep<'a> = (&'a Node, Option<&'a Edge>);

/// Breadth-first shortest path from `start_id` to `end_id` along outgoing edges.
///
/// Each discovered node is enqueued once and expanded in FIFO order, so
/// ties between equally short paths go to the earliest-inserted edges.
/// Nodes at depth `max_depth` are not expanded, which caps the returned
/// path at `max_depth` edges.
pub fn find_path<'a>(
    graph: &'a GraphStore,
    start_id: &str,
    end_id: &str,
    max_depth: usize,
) -> Option<Vec<PathStep<'a>>> {
    let start = graph.get_node(start_id)?;
    if start_id == end_id {
        return Some(vec![(start, None)]);
    }
    let end = graph.get_node(end_id)?;

    let mut visited: HashSet<&'a str> = HashSet::new();
    // Edge through which each node was first reached
    let mut reached_by: HashMap<&'a str, &'a Edge> = HashMap::new();
    let mut queue: VecDeque<(&'a str, usize)> = VecDeque::new();

    visited.insert(start.id.as_str());
    queue.push_back((start.id.as_str(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }

        for edge_id in graph.outgoing_edge_ids(current) {
            let Some(edge) = graph.get_edge(edge_id) else {
                continue;
            };
            let target = edge.target_id.as_str();

            if target == end.id {
                reached_by.insert(target, edge);
                trace!("Path {start_id} -> {end_id} found at depth {}", depth + 1);
                return rebuild_path(graph, end, &reached_by);
            }

            if visited.insert(target) {
                reached_by.insert(target, edge);
                queue.push_back((target, depth + 1));
            }
        }
    }

    trace!(
        "No path {start_id} -> {end_id} within {max_depth} edges ({} nodes visited)",
        visited.len()
    );
    None
}

/// Walk `reached_by` back from `end` to the start node.
fn rebuild_path<'a>(
    graph: &'a GraphStore,
    end: &'a Node,
    reached_by: &HashMap<&'a str, &'a Edge>,
) -> Option<Vec<PathStep<'a>>> {
    let mut steps = vec![(end, None)];
    let mut cursor = end.id.as_str();

    while let Some(edge) = reached_by.get(cursor).copied() {
        let source = graph.get_node(&edge.source_id)?;
        steps.push((source, Some(edge)));
        cursor = source.id.as_str();
    }

    steps.reverse();
    Some(steps)
}
