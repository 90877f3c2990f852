//! Store configuration.

use serde::{Deserialize, Serialize};

/// Path searches stop after this many edges unless told otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Tunables for a [`GraphStore`](crate::GraphStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Edge bound used by `find_path_default`
    pub default_max_depth: usize,

    /// Write indented JSON snapshots
    pub pretty_snapshots: bool,

    /// Create missing parent directories when saving a snapshot
    pub create_parent_dirs: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_max_depth: DEFAULT_MAX_DEPTH,
            pretty_snapshots: true,
            create_parent_dirs: true,
        }
    }
}

impl StoreConfig {
    /// Config for machine-consumed snapshots (compact JSON).
    pub fn compact() -> Self {
        Self {
            pretty_snapshots: false,
            ..Default::default()
        }
    }

    /// Set the default path-search edge bound
    pub fn with_default_max_depth(mut self, depth: usize) -> Self {
        self.default_max_depth = depth;
        self
    }

    /// Enable or disable pretty-printed snapshots
    pub fn with_pretty_snapshots(mut self, pretty: bool) -> Self {
        self.pretty_snapshots = pretty;
        self
    }

    /// Enable or disable parent directory creation on save
    pub fn with_create_parent_dirs(mut self, create: bool) -> Self {
        self.create_parent_dirs = create;
        self
    }
}
