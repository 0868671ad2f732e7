use std::fmt::Debug;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::algorithm::{ShortestPath, ShortestPathAlgorithm};
use crate::graph::directed::DirectedGraph;
use crate::{Error, Result, VertexId};

/// A graph handle that can be cloned across threads
///
/// Solver runs go through [`SharedGraph::shortest_path`], which holds the read
/// lock for the whole run. Writers block until every active run finishes.
#[derive(Debug)]
pub struct SharedGraph<T> {
    inner: Arc<RwLock<DirectedGraph<T>>>,
}

impl<T> Clone for SharedGraph<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedGraph<T> {
    /// Creates a new handle owning `graph`
    pub fn new(graph: DirectedGraph<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Acquires shared read access
    pub fn read(&self) -> Result<RwLockReadGuard<'_, DirectedGraph<T>>> {
        self.inner.read().map_err(|_| Error::LockPoisoned)
    }

    /// Acquires exclusive write access
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, DirectedGraph<T>>> {
        self.inner.write().map_err(|_| Error::LockPoisoned)
    }
}

impl<T: Debug> SharedGraph<T> {
    /// Runs `algorithm` while holding the read lock for its whole duration
    pub fn shortest_path<A>(
        &self,
        algorithm: &A,
        source: VertexId,
        target: VertexId,
    ) -> Result<ShortestPath>
    where
        A: ShortestPathAlgorithm<DirectedGraph<T>>,
    {
        let guard = self.read()?;
        algorithm.find_path(&guard, source, target)
    }
}

impl<T> From<DirectedGraph<T>> for SharedGraph<T> {
    fn from(graph: DirectedGraph<T>) -> Self {
        Self::new(graph)
    }
}
