//! JSON snapshot file format and I/O.

use crate::config::StoreConfig;
use crate::error::{GraphError, Result};
use crate::graph::{Edge, Node};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// The persisted form of a graph: records only, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Every node
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Every edge; replayed after all nodes
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Read and parse a snapshot file.
///
/// # Errors
///
/// Returns [`GraphError::Storage`] if the file cannot be opened or is not a
/// valid snapshot (bad JSON, unknown type tag, missing required field).
pub fn read_snapshot(path: &Path) -> Result<GraphSnapshot> {
    let file = File::open(path).map_err(|e| {
        GraphError::storage(format!("Failed to open snapshot {}", path.display()), Some(e))
    })?;

    let snapshot: GraphSnapshot = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        warn!("Rejecting malformed snapshot {}: {e}", path.display());
        GraphError::storage(format!("Malformed snapshot {}", path.display()), Some(e))
    })?;

    debug!(
        "Read snapshot {}: {} nodes, {} edges",
        path.display(),
        snapshot.nodes.len(),
        snapshot.edges.len()
    );
    Ok(snapshot)
}

/// Serialize a snapshot to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`GraphError::Storage`] if the directory or file cannot be
/// written.
pub fn write_snapshot(snapshot: &GraphSnapshot, path: &Path, config: &StoreConfig) -> Result<()> {
    if config.create_parent_dirs {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                GraphError::storage(
                    format!("Failed to create directory {}", parent.display()),
                    Some(e),
                )
            })?;
        }
    }

    let file = File::create(path).map_err(|e| {
        GraphError::storage(format!("Failed to create snapshot {}", path.display()), Some(e))
    })?;
    let mut writer = BufWriter::new(file);

    let written = if config.pretty_snapshots {
        serde_json::to_writer_pretty(&mut writer, snapshot)
    } else {
        serde_json::to_writer(&mut writer, snapshot)
    };
    written.map_err(|e| {
        GraphError::storage(format!("Failed to write snapshot {}", path.display()), Some(e))
    })?;

    writer.flush().map_err(|e| {
        GraphError::storage(format!("Failed to flush snapshot {}", path.display()), Some(e))
    })?;

    debug!(
        "Wrote snapshot {}: {} nodes, {} edges",
        path.display(),
        snapshot.nodes.len(),
        snapshot.edges.len()
    );
    Ok(())
}
