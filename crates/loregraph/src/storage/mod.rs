//! Snapshot persistence.
//!
//! The whole graph is written as one JSON document:
//!
//! ```text
//! { "nodes": [ {id, name, type, properties}, ... ],
//!   "edges": [ {id, name, type, source_id, target_id, properties}, ... ] }
//! ```
//!
//! ## Design Philosophy
//!
//! - **Whole Snapshots**: No write-ahead log and no partial writes
//! - **Indexes Are Derived**: Only records are persisted; loading replays them
//! - **Fail Fast**: Unreadable or malformed files are errors, never defaults

mod snapshot;

pub use snapshot::{read_snapshot, write_snapshot, GraphSnapshot};
