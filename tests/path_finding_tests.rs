use dijkstra_route::algorithm::{path_weight, Distance, ShortestPath, ShortestPathAlgorithm};
use dijkstra_route::graph::{DirectedGraph, Graph, MutableGraph};
use dijkstra_route::{shortest_path, Dijkstra, Error, VertexId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

// Test helper building the six-vertex A-F graph
fn create_letter_graph() -> (DirectedGraph<char>, Vec<VertexId>) {
    let mut graph = DirectedGraph::new();
    let ids: Vec<_> = ['A', 'B', 'C', 'D', 'E', 'F']
        .into_iter()
        .map(|label| graph.add_vertex(label))
        .collect();
    let (a, b, c, d, e, f) = (ids[0], ids[1], ids[2], ids[3], ids[4], ids[5]);

    graph.add_edge(a, b, 7).unwrap();
    graph.add_edge(a, c, 9).unwrap();
    graph.add_edge(a, f, 14).unwrap();
    graph.add_edge(b, c, 10).unwrap();
    graph.add_edge(b, d, 15).unwrap();
    graph.add_edge(c, d, 11).unwrap();
    graph.add_edge(c, f, 2).unwrap();
    graph.add_edge(d, e, 6).unwrap();
    graph.add_edge(f, e, 9).unwrap();

    (graph, ids)
}

// Test helper to create a simple grid graph with unit weights
fn create_test_grid(width: usize, height: usize) -> DirectedGraph<(usize, usize)> {
    let mut graph = DirectedGraph::new();
    for y in 0..height {
        for x in 0..width {
            graph.add_vertex((x, y));
        }
    }

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.add_edge(vertex, vertex + 1, 1).unwrap();
                graph.add_edge(vertex + 1, vertex, 1).unwrap();
            }
            if y + 1 < height {
                graph.add_edge(vertex, vertex + width, 1).unwrap();
                graph.add_edge(vertex + width, vertex, 1).unwrap();
            }
        }
    }
    graph
}

// Minimum path weight by enumerating every simple path
fn brute_force_distance<G: Graph>(graph: &G, source: VertexId, target: VertexId) -> Option<u64> {
    fn walk<G: Graph>(
        graph: &G,
        at: VertexId,
        target: VertexId,
        cost: u64,
        seen: &mut HashSet<VertexId>,
        best: &mut Option<u64>,
    ) {
        if at == target {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for edge in graph.outgoing_edges(at).unwrap() {
            if seen.insert(edge.to) {
                walk(graph, edge.to, target, cost + edge.weight, seen, best);
                seen.remove(&edge.to);
            }
        }
    }

    let mut best = None;
    let mut seen = HashSet::from([source]);
    walk(graph, source, target, 0, &mut seen, &mut best);
    best
}

#[test]
fn test_letter_graph_a_to_e() {
    let (graph, ids) = create_letter_graph();
    let (a, c, e, f) = (ids[0], ids[2], ids[4], ids[5]);

    let result = Dijkstra::new().find_path(&graph, a, e).unwrap();

    assert_eq!(result.vertices(), &[a, c, f, e]);
    assert_eq!(result.distance(), Distance::Finite(20));
    assert_eq!(path_weight(&graph, result.vertices()).unwrap(), Some(20));
}

#[test]
fn test_free_function_returns_ids_only() {
    let (graph, ids) = create_letter_graph();
    let path = shortest_path(&graph, ids[0], ids[3]).unwrap();
    assert_eq!(path, vec![ids[0], ids[2], ids[3]]);
}

#[test]
fn test_missing_target_is_invalid_vertex() {
    let (graph, ids) = create_letter_graph();
    let result = Dijkstra::new().find_path(&graph, ids[0], 42);
    assert_eq!(result, Err(Error::InvalidVertex(42)));
}

#[test]
fn test_missing_source_is_invalid_vertex() {
    let (graph, ids) = create_letter_graph();
    let result = Dijkstra::new().find_path(&graph, 99, ids[0]);
    assert_eq!(result, Err(Error::InvalidVertex(99)));
}

#[test]
fn test_single_isolated_vertex() {
    let mut graph = DirectedGraph::new();
    let only = graph.add_vertex("lonely");

    let result = Dijkstra::new().find_path(&graph, only, only).unwrap();
    assert_eq!(result.vertices(), &[only]);
    assert_eq!(result.distance(), Distance::Finite(0));
}

#[test]
fn test_source_equals_target_in_connected_graph() {
    let (graph, ids) = create_letter_graph();
    let path = shortest_path(&graph, ids[2], ids[2]).unwrap();
    assert_eq!(path, vec![ids[2]]);
}

#[test]
fn test_unreachable_target_is_empty_path() {
    let (graph, ids) = create_letter_graph();
    // Nothing leaves E
    let result = Dijkstra::new().find_path(&graph, ids[4], ids[0]).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.distance(), Distance::Infinite);
    assert_eq!(result, ShortestPath::unreachable(ids[4], ids[0]));
}

#[test]
fn test_multi_edges_use_lightest() {
    let mut graph = DirectedGraph::new();
    let a = graph.add_vertex('a');
    let b = graph.add_vertex('b');
    graph.add_edge(a, b, 8).unwrap();
    graph.add_edge(a, b, 3).unwrap();
    graph.add_edge(a, b, 5).unwrap();

    let result = Dijkstra::new().find_path(&graph, a, b).unwrap();
    assert_eq!(result.vertices(), &[a, b]);
    assert_eq!(result.distance(), Distance::Finite(3));
}

#[test]
fn test_zero_weight_edges() {
    let mut graph = DirectedGraph::new();
    let ids: Vec<_> = (0..4).map(|i| graph.add_vertex(i)).collect();
    graph.add_edge(ids[0], ids[1], 0).unwrap();
    graph.add_edge(ids[1], ids[2], 0).unwrap();
    graph.add_edge(ids[2], ids[3], 0).unwrap();
    graph.add_edge(ids[0], ids[3], 1).unwrap();

    let result = Dijkstra::new().find_path(&graph, ids[0], ids[3]).unwrap();
    assert_eq!(result.vertices(), &ids[..]);
    assert_eq!(result.distance(), Distance::Finite(0));
}

#[test]
fn test_path_around_removed_vertices() {
    let mut graph = create_test_grid(5, 5);

    // Wall on column 2, leaving the bottom row open
    for y in 0..4 {
        graph.remove_vertex(y * 5 + 2).unwrap();
    }

    let result = Dijkstra::new().find_path(&graph, 0, 4).unwrap();
    assert_eq!(result.distance(), Distance::Finite(12));
    assert_eq!(result.vertices().first(), Some(&0));
    assert_eq!(result.vertices().last(), Some(&4));
    assert!(result.vertices().contains(&22));

    // Verify path continuity
    for hop in result.vertices().windows(2) {
        assert!(graph.has_edge(hop[0], hop[1]), "Path should only use existing edges");
    }
}

#[test]
fn test_wall_blocks_every_route() {
    let mut graph = create_test_grid(5, 5);
    for y in 0..5 {
        graph.remove_vertex(y * 5 + 2).unwrap();
    }
    let path = shortest_path(&graph, 0, 4).unwrap();
    assert!(path.is_empty());
}

#[test]
fn test_matches_brute_force_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(2025);

    for _ in 0..200 {
        let n = rng.gen_range(1..=6);
        let mut graph = DirectedGraph::new();
        let ids: Vec<_> = (0..n).map(|i| graph.add_vertex(i)).collect();
        for _ in 0..rng.gen_range(0..=n * 3) {
            let u = ids[rng.gen_range(0..n)];
            let v = ids[rng.gen_range(0..n)];
            graph.add_edge(u, v, rng.gen_range(0..20)).unwrap();
        }

        let source = ids[rng.gen_range(0..n)];
        let target = ids[rng.gen_range(0..n)];
        let expected = brute_force_distance(&graph, source, target);
        let result = Dijkstra::new().find_path(&graph, source, target).unwrap();

        match expected {
            None => assert!(result.is_empty()),
            Some(best) => {
                assert_eq!(result.distance(), Distance::Finite(best));
                assert_eq!(result.vertices().first(), Some(&source));
                assert_eq!(result.vertices().last(), Some(&target));
                assert_eq!(path_weight(&graph, result.vertices()).unwrap(), Some(best));
            }
        }
    }
}

#[test]
fn test_presized_queue_gives_same_answer() {
    let (graph, ids) = create_letter_graph();
    let default = Dijkstra::new().find_path(&graph, ids[0], ids[4]).unwrap();
    let presized = Dijkstra::new()
        .with_queue_capacity(64)
        .find_path(&graph, ids[0], ids[4])
        .unwrap();
    assert_eq!(default, presized);
}

#[test]
fn test_algorithm_name() {
    let dijkstra = Dijkstra::new();
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<DirectedGraph<char>>>::name(&dijkstra),
        "Dijkstra"
    );
}
