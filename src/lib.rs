//! Dijkstra Route - single-source, single-target shortest paths
//!
//! This library finds the cheapest route between two vertices of a weighted
//! directed graph with Dijkstra's algorithm. It ships its own supporting
//! containers: a binary min-heap used as a lazy-deletion priority queue, an
//! adjacency-list graph keyed by integer vertex ids, and a stack used to turn
//! a predecessor chain into a forward path.
//!
//! Edge weights are non-negative `u64` values.

pub mod algorithm;
pub mod data_structures;
pub mod display;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, shortest_path, ShortestPath, ShortestPathAlgorithm};
/// Re-export main types for convenient use
pub use graph::directed::{DirectedGraph, Edge, Vertex};
pub use graph::shared::SharedGraph;

/// Identifier of a vertex; assigned by the graph and never reused
pub type VertexId = usize;

/// Weight of a single edge
pub type Weight = u64;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(VertexId),

    #[error("Priority queue is empty")]
    EmptyQueue,

    #[error("Path stack is empty")]
    EmptyStack,

    #[error("Graph lock poisoned by a panicking writer")]
    LockPoisoned,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
