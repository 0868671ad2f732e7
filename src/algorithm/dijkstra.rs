use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::algorithm::{Distance, ShortestPath, ShortestPathAlgorithm};
use crate::data_structures::{MinHeap, PathStack};
use crate::graph::Graph;
use crate::{Error, Result, VertexId};

/// Priority queue payload: a vertex and the tentative distance it was queued with
///
/// Entries compare by distance only; ties between vertices are unordered.
#[derive(Debug, Clone, Copy)]
pub struct DistanceEntry {
    pub vertex: VertexId,
    pub distance: u64,
}

impl DistanceEntry {
    pub fn new(vertex: VertexId, distance: u64) -> Self {
        DistanceEntry { vertex, distance }
    }
}

impl PartialEq for DistanceEntry {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl Eq for DistanceEntry {}

impl PartialOrd for DistanceEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DistanceEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}

/// Classic Dijkstra's algorithm with lazy deletion and early exit on the target
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    /// Initial capacity of the priority queue; `None` uses the heap default
    queue_capacity: Option<usize>,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { queue_capacity: None }
    }

    /// Pre-sizes the priority queue for large searches
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    fn new_queue(&self) -> MinHeap<DistanceEntry> {
        match self.queue_capacity {
            Some(capacity) => MinHeap::with_capacity(capacity),
            None => MinHeap::new(),
        }
    }
}

impl<G> ShortestPathAlgorithm<G> for Dijkstra
where
    G: Graph + ?Sized,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_path(&self, graph: &G, source: VertexId, target: VertexId) -> Result<ShortestPath> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }
        debug!(
            "dijkstra: searching {} -> {} over {} vertices",
            source,
            target,
            graph.vertex_count()
        );

        let vertex_ids = graph.vertex_ids();
        let mut distances: HashMap<VertexId, Distance> =
            vertex_ids.iter().map(|&id| (id, Distance::Infinite)).collect();
        let mut predecessors: HashMap<VertexId, Option<VertexId>> =
            vertex_ids.iter().map(|&id| (id, None)).collect();
        let mut visited: HashSet<VertexId> = HashSet::with_capacity(vertex_ids.len());

        distances.insert(source, Distance::Finite(0));

        let mut queue = self.new_queue();
        queue.insert(DistanceEntry::new(source, 0));

        // Main Dijkstra loop
        while let Some(entry) = queue.pop() {
            let current = entry.vertex;

            // The first pop of the target carries its final distance
            if current == target {
                break;
            }

            if !visited.insert(current) {
                trace!("dijkstra: discarding stale entry for {} at {}", current, entry.distance);
                continue;
            }

            let current_distance = distances.get(&current).copied().unwrap_or(Distance::Infinite);

            // Relax all outgoing edges
            for edge in graph.outgoing_edges(current)? {
                let neighbor = edge.to;
                if visited.contains(&neighbor) {
                    continue;
                }

                let candidate = current_distance.add_weight(edge.weight);
                let best = distances.entry(neighbor).or_insert(Distance::Infinite);
                if candidate < *best {
                    trace!("dijkstra: relaxing {} -> {} to {}", current, neighbor, candidate);
                    *best = candidate;
                    predecessors.insert(neighbor, Some(current));
                    if let Distance::Finite(d) = candidate {
                        queue.insert(DistanceEntry::new(neighbor, d));
                    }
                }
            }
        }

        let path = reconstruct_path(&predecessors, source, target)?;
        if path.is_empty() {
            debug!("dijkstra: {} is unreachable from {}", target, source);
            return Ok(ShortestPath::unreachable(source, target));
        }

        let distance = distances.get(&target).copied().unwrap_or(Distance::Infinite);
        debug!(
            "dijkstra: {} -> {} finished with {} vertices in path, distance {}",
            source,
            target,
            path.len(),
            distance
        );

        Ok(ShortestPath {
            source,
            target,
            vertices: path,
            distance,
        })
    }
}

/// Walks predecessor links back from `target` and returns the forward path
///
/// An empty vector means `target` was never reached.
fn reconstruct_path(
    predecessors: &HashMap<VertexId, Option<VertexId>>,
    source: VertexId,
    target: VertexId,
) -> Result<Vec<VertexId>> {
    let has_predecessor = matches!(predecessors.get(&target), Some(Some(_)));
    if !has_predecessor && target != source {
        return Ok(Vec::new());
    }

    let mut stack = PathStack::new();
    let mut at = Some(target);
    while let Some(vertex) = at {
        stack.push(vertex);
        if vertex == source {
            break;
        }
        at = predecessors.get(&vertex).copied().flatten();
    }

    let mut path = Vec::with_capacity(stack.len());
    while !stack.is_empty() {
        path.push(stack.pop()?);
    }
    Ok(path)
}
