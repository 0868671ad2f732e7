use dijkstra_route::algorithm::ShortestPathAlgorithm;
use dijkstra_route::display::{render_path, DEFAULT_SEPARATOR};
use dijkstra_route::graph::{DirectedGraph, MutableGraph};
use dijkstra_route::{Dijkstra, VertexId};
use std::env;

/// Configuration for the demo run
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub source: char,
    pub target: char,
    pub separator: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            source: 'A',
            target: 'E',
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl DemoConfig {
    /// Reads `[source] [target] [separator]` positional overrides
    fn from_args(args: &[String]) -> Self {
        let mut config = Self::default();
        if let Some(c) = args.get(1).and_then(|s| s.chars().next()) {
            config.source = c.to_ascii_uppercase();
        }
        if let Some(c) = args.get(2).and_then(|s| s.chars().next()) {
            config.target = c.to_ascii_uppercase();
        }
        if let Some(separator) = args.get(3) {
            config.separator = separator.clone();
        }
        config
    }
}

fn build_graph() -> dijkstra_route::Result<DirectedGraph<char>> {
    let mut graph = DirectedGraph::with_capacity(6);
    let a = graph.add_vertex('A');
    let b = graph.add_vertex('B');
    let c = graph.add_vertex('C');
    let d = graph.add_vertex('D');
    let e = graph.add_vertex('E');
    let f = graph.add_vertex('F');

    graph.add_edge(a, b, 7)?;
    graph.add_edge(a, c, 9)?;
    graph.add_edge(a, f, 14)?;
    graph.add_edge(b, c, 10)?;
    graph.add_edge(b, d, 15)?;
    graph.add_edge(c, d, 11)?;
    graph.add_edge(c, f, 2)?;
    graph.add_edge(d, e, 6)?;
    graph.add_edge(f, e, 9)?;
    Ok(graph)
}

/// Maps the configured labels to vertex ids, naming the first unknown label
fn resolve_endpoints(
    graph: &DirectedGraph<char>,
    config: &DemoConfig,
) -> Result<(VertexId, VertexId), String> {
    let lookup = |label: char| {
        graph
            .find_vertex(&label)
            .ok_or_else(|| format!("no vertex labelled '{}'", label))
    };
    Ok((lookup(config.source)?, lookup(config.target)?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = DemoConfig::from_args(&args);

    let graph = build_graph()?;
    let (source, target) = match resolve_endpoints(&graph, &config) {
        Ok(endpoints) => endpoints,
        Err(message) => {
            eprintln!("Error: {}", message);
            return Ok(());
        }
    };

    println!("Shortest path from {} to {}...", config.source, config.target);

    let dijkstra = Dijkstra::new();
    match dijkstra.find_path(&graph, source, target) {
        Ok(path) => {
            println!("{}", render_path(&graph, path.vertices(), &config.separator)?);
            if let Some(weight) = path.distance().finite() {
                println!("Total weight: {}", weight);
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }

    Ok(())
}
