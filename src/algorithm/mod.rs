pub mod traits;
pub mod dijkstra;

pub use traits::{path_weight, Distance, ShortestPath, ShortestPathAlgorithm};

use crate::graph::Graph;
use crate::{Result, VertexId};

/// Finds the shortest path from `source` to `target` with [`dijkstra::Dijkstra`]
///
/// Returns the vertex ids from source to target, or an empty vector when the
/// target is unreachable.
pub fn shortest_path<G: Graph>(
    graph: &G,
    source: VertexId,
    target: VertexId,
) -> Result<Vec<VertexId>> {
    dijkstra::Dijkstra::new()
        .find_path(graph, source, target)
        .map(ShortestPath::into_vertices)
}
