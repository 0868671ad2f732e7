use std::fmt;

use crate::graph::Graph;
use crate::{Result, VertexId, Weight};

/// Best-known distance of a vertex from the source
///
/// `Finite` sorts below `Infinite`, so the derived order matches the usual
/// reading of "unknown distance".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(u64),
    Infinite,
}

impl Distance {
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }

    /// Extends the distance by one edge. Infinity absorbs any weight.
    pub fn add_weight(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d + weight),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}

/// Result of a single-source, single-target search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Source vertex ID
    pub source: VertexId,

    /// Target vertex ID
    pub target: VertexId,

    /// Vertices from source to target; empty when the target is unreachable
    pub vertices: Vec<VertexId>,

    /// Total weight of the path, `Infinite` when there is none
    pub distance: Distance,
}

impl ShortestPath {
    /// A result for an unreachable target
    pub fn unreachable(source: VertexId, target: VertexId) -> Self {
        ShortestPath {
            source,
            target,
            vertices: Vec::new(),
            distance: Distance::Infinite,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn into_vertices(self) -> Vec<VertexId> {
        self.vertices
    }
}

/// Trait for single-target shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: Graph + ?Sized,
{
    /// Compute the shortest path from `source` to `target`
    ///
    /// Fails with `InvalidVertex` when either endpoint is missing. An
    /// unreachable target is not an error; it yields an empty path.
    fn find_path(&self, graph: &G, source: VertexId, target: VertexId) -> Result<ShortestPath>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Total weight of `path`, taking the lightest edge for each hop
///
/// Returns `None` if some consecutive pair has no connecting edge. The empty
/// path and single-vertex paths weigh 0.
pub fn path_weight<G: Graph + ?Sized>(graph: &G, path: &[VertexId]) -> Result<Option<u64>> {
    if let Some(&first) = path.first() {
        // Surface missing ids as errors rather than as a broken hop
        graph.outgoing_edges(first)?;
    }
    let mut total = 0;
    for hop in path.windows(2) {
        graph.outgoing_edges(hop[1])?;
        match graph.min_edge_weight(hop[0], hop[1]) {
            Some(weight) => total += weight,
            None => return Ok(None),
        }
    }
    Ok(Some(total))
}
