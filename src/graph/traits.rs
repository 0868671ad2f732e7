use std::collections::HashSet;
use std::fmt::Debug;

use crate::graph::directed::Edge;
use crate::{Result, VertexId, Weight};

/// Trait representing a weighted directed graph
pub trait Graph: Debug {
    /// Returns the number of live vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of a vertex in insertion order
    fn outgoing_edges(&self, vertex: VertexId) -> Result<&[Edge]>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool;

    /// Returns the ids of all live vertices
    fn vertex_ids(&self) -> HashSet<VertexId>;

    /// Returns true if there's at least one edge between the two vertices
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.outgoing_edges(from)
            .map(|edges| edges.iter().any(|edge| edge.to == to))
            .unwrap_or(false)
    }

    /// Gets the weight of the lightest edge between two vertices, if any
    fn min_edge_weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.outgoing_edges(from)
            .ok()?
            .iter()
            .filter(|edge| edge.to == to)
            .map(|edge| edge.weight)
            .min()
    }
}

/// Trait for mutable graph operations
///
/// Every operation validates its ids first and leaves the graph untouched on
/// failure.
pub trait MutableGraph<T>: Graph {
    /// Adds a vertex carrying `data` and returns its freshly allocated ID
    fn add_vertex(&mut self, data: T) -> VertexId;

    /// Removes a vertex together with every edge that mentions it
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<T>;

    /// Adds a directed edge between vertices with the given weight
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()>;

    /// Removes all edges from `from` to `to`, returning how many were dropped
    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<usize>;
}
