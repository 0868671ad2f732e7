use colored::*;
use dijkstra_route::algorithm::ShortestPathAlgorithm;
use dijkstra_route::graph::{DirectedGraph, Graph, MutableGraph};
use dijkstra_route::{Dijkstra, VertexId};
use std::collections::HashSet;

const WIDTH: usize = 20;
const HEIGHT: usize = 10;

/// Walls of the grid, as (x, y) cells
fn walls() -> HashSet<(usize, usize)> {
    let mut walls = HashSet::new();
    for y in 0..7 {
        walls.insert((6, y));
    }
    for y in 3..HEIGHT {
        walls.insert((13, y));
    }
    walls
}

/// Builds a grid graph whose payload is the (x, y) cell
fn build_grid(
    walls: &HashSet<(usize, usize)>,
) -> dijkstra_route::Result<DirectedGraph<(usize, usize)>> {
    let mut graph = DirectedGraph::with_capacity(WIDTH * HEIGHT);
    let mut ids = vec![vec![0; WIDTH]; HEIGHT];
    for (y, row) in ids.iter_mut().enumerate() {
        for (x, id) in row.iter_mut().enumerate() {
            *id = graph.add_vertex((x, y));
        }
    }

    // Cardinal moves cost 10, diagonals 14
    let directions: [(i32, i32, u64); 8] = [
        (0, -1, 10), (1, 0, 10), (0, 1, 10), (-1, 0, 10),
        (1, -1, 14), (1, 1, 14), (-1, 1, 14), (-1, -1, 14),
    ];

    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            if walls.contains(&(x, y)) {
                continue;
            }
            for (dx, dy, cost) in directions {
                let nx = x as i32 + dx;
                let ny = y as i32 + dy;
                if nx < 0 || ny < 0 || nx >= WIDTH as i32 || ny >= HEIGHT as i32 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !walls.contains(&(nx, ny)) {
                    graph.add_edge(ids[y][x], ids[ny][nx], cost)?;
                }
            }
        }
    }
    Ok(graph)
}

fn main() -> dijkstra_route::Result<()> {
    let walls = walls();
    let graph = build_grid(&walls)?;
    let corners: Option<(VertexId, VertexId)> = graph
        .find_vertex(&(0, 0))
        .zip(graph.find_vertex(&(WIDTH - 1, HEIGHT - 1)));
    let Some((source, target)) = corners else {
        eprintln!("{} grid has no cell at a corner", "Error:".red());
        return Ok(());
    };

    let blocked = graph
        .vertices()
        .filter(|v| walls.contains(&v.data))
        .count();
    println!(
        "{} {} vertices ({} walls), {} edges",
        "Grid:".bold(),
        graph.vertex_count(),
        blocked,
        graph.edge_count()
    );

    let result = Dijkstra::new().find_path(&graph, source, target)?;
    let on_path: HashSet<(usize, usize)> = result
        .vertices()
        .iter()
        .filter_map(|&id| graph.vertex_data(id).ok().copied())
        .collect();

    for y in 0..HEIGHT {
        let mut line = String::new();
        for x in 0..WIDTH {
            let cell = if (x, y) == (0, 0) {
                "S".green().bold()
            } else if (x, y) == (WIDTH - 1, HEIGHT - 1) {
                "T".red().bold()
            } else if walls.contains(&(x, y)) {
                "#".bright_black()
            } else if on_path.contains(&(x, y)) {
                "*".yellow()
            } else {
                ".".normal()
            };
            line.push_str(&cell.to_string());
        }
        println!("{}", line);
    }

    if result.is_empty() {
        println!("{}", "No path exists!".red());
    } else {
        println!(
            "{} {} steps, total cost {}",
            "Route:".bold(),
            result.len() - 1,
            result.distance().to_string().cyan()
        );
    }
    Ok(())
}
