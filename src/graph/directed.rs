use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result, VertexId, Weight};
use log::debug;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

/// A vertex and the payload it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<T> {
    pub id: VertexId,
    pub data: T,
}

/// A directed, weighted edge stored under its source vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Edge { from, to, weight }
    }
}

/// A directed multigraph implementation using adjacency lists
///
/// Vertices live in an arena keyed by id. Ids come from a monotonically
/// increasing counter, so a removed id is never handed out again.
#[derive(Debug, Clone)]
pub struct DirectedGraph<T> {
    /// Vertex arena: vertex_id -> vertex
    vertices: HashMap<VertexId, Vertex<T>>,

    /// Outgoing edges for each vertex: vertex_id -> [edge]
    adjacency: HashMap<VertexId, Vec<Edge>>,

    /// Next id to hand out
    next_id: VertexId,
}

impl<T> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DirectedGraph<T> {
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: HashMap::new(),
            adjacency: HashMap::new(),
            next_id: 0,
        }
    }

    /// Creates a new empty directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertices: HashMap::with_capacity(vertices),
            adjacency: HashMap::with_capacity(vertices),
            next_id: 0,
        }
    }

    /// Returns the payload of a vertex
    pub fn vertex_data(&self, vertex: VertexId) -> Result<&T> {
        self.vertices
            .get(&vertex)
            .map(|v| &v.data)
            .ok_or(Error::InvalidVertex(vertex))
    }

    /// Returns a mutable reference to the payload of a vertex
    pub fn vertex_data_mut(&mut self, vertex: VertexId) -> Result<&mut T> {
        self.vertices
            .get_mut(&vertex)
            .map(|v| &mut v.data)
            .ok_or(Error::InvalidVertex(vertex))
    }

    /// Returns the full vertex record
    pub fn vertex(&self, vertex: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(&vertex)
    }

    /// Iterates over all live vertices in unspecified order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<T>> + '_ {
        self.vertices.values()
    }

    /// Finds the first vertex whose payload equals `data`
    pub fn find_vertex(&self, data: &T) -> Option<VertexId>
    where
        T: PartialEq,
    {
        self.vertices
            .values()
            .find(|v| &v.data == data)
            .map(|v| v.id)
    }
}

impl<T: Debug> Graph for DirectedGraph<T> {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Result<&[Edge]> {
        self.adjacency
            .get(&vertex)
            .map(Vec::as_slice)
            .ok_or(Error::InvalidVertex(vertex))
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains_key(&vertex)
    }

    fn vertex_ids(&self) -> HashSet<VertexId> {
        self.vertices.keys().copied().collect()
    }
}

impl<T: Debug> MutableGraph<T> for DirectedGraph<T> {
    fn add_vertex(&mut self, data: T) -> VertexId {
        let id = self.next_id;
        self.next_id += 1;
        self.vertices.insert(id, Vertex { id, data });
        self.adjacency.insert(id, Vec::new());
        id
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Result<T> {
        let removed = self
            .vertices
            .remove(&vertex)
            .ok_or(Error::InvalidVertex(vertex))?;
        let outgoing = self.adjacency.remove(&vertex).map_or(0, |edges| edges.len());

        // Scrub incoming edges stored under every other vertex
        let mut incoming = 0;
        for edges in self.adjacency.values_mut() {
            let len_before = edges.len();
            edges.retain(|edge| edge.to != vertex);
            incoming += len_before - edges.len();
        }

        debug!(
            "removed vertex {} with {} outgoing and {} incoming edges",
            vertex, outgoing, incoming
        );
        Ok(removed.data)
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        if !self.has_vertex(from) {
            return Err(Error::InvalidVertex(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }
        let edges = self
            .adjacency
            .get_mut(&from)
            .ok_or(Error::InvalidVertex(from))?;
        edges.push(Edge::new(from, to, weight));
        Ok(())
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<usize> {
        let edges = self
            .adjacency
            .get_mut(&from)
            .ok_or(Error::InvalidVertex(from))?;
        let len_before = edges.len();
        edges.retain(|edge| edge.to != to);
        Ok(len_before - edges.len())
    }
}
