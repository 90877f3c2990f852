//! Shared handle enforcing a single-writer discipline.
//!
//! The stores themselves do no locking. `SharedGraph` guards one
//! [`SchemaEnforcedStore`] with a reader-writer lock: any number of
//! concurrent readers, or exactly one writer.

use crate::enforced::SchemaEnforcedStore;
use crate::error::{GraphError, Result};
use crate::graph::GraphStore;
use log::error;
use std::sync::{Arc, RwLock};

/// Cloneable, thread-safe handle to a schema-enforced graph.
#[derive(Debug, Clone, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<SchemaEnforcedStore>>,
}

impl SharedGraph {
    /// Share an existing store.
    pub fn new(store: SchemaEnforcedStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Run `f` with shared read access.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::LockPoisoned`] if a writer panicked.
    pub fn read<R>(&self, f: impl FnOnce(&SchemaEnforcedStore) -> R) -> Result<R> {
        let guard = self.inner.read().map_err(|_| {
            error!("Graph lock poisoned (read)");
            GraphError::LockPoisoned
        })?;
        Ok(f(&*guard))
    }

    /// Run `f` with exclusive write access.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::LockPoisoned`] if a writer panicked.
    pub fn write<R>(&self, f: impl FnOnce(&mut SchemaEnforcedStore) -> R) -> Result<R> {
        let mut guard = self.inner.write().map_err(|_| {
            error!("Graph lock poisoned (write)");
            GraphError::LockPoisoned
        })?;
        Ok(f(&mut *guard))
    }
}

impl From<SchemaEnforcedStore> for SharedGraph {
    fn from(store: SchemaEnforcedStore) -> Self {
        Self::new(store)
    }
}

impl From<GraphStore> for SharedGraph {
    fn from(graph: GraphStore) -> Self {
        Self::new(SchemaEnforcedStore::new(graph))
    }
}
