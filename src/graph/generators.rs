use crate::graph::{Edge, KeyedGraph};
use rand::prelude::*;

/// Generates a random directed graph with roughly `vertices * edge_factor`
/// edges, keyed by vertex number. Weights are uniform in 1..=max_weight and
/// self-loops are skipped. Pass a seeded rng for reproducible graphs.
pub fn random_graph<R: Rng>(
    vertices: usize,
    edge_factor: f64,
    max_weight: u64,
    rng: &mut R,
) -> KeyedGraph<u32, u64> {
    assert!(vertices > 1, "vertices must be greater than 1");
    assert!(max_weight > 0, "max_weight must be positive");

    let num_edges = (vertices as f64 * edge_factor) as usize;
    let mut adjacency: Vec<Vec<Edge<u32, u64>>> = vec![Vec::new(); vertices];

    let mut added = 0;
    while added < num_edges {
        let from = rng.gen_range(0..vertices);
        let to = rng.gen_range(0..vertices);

        // Skip self-loops
        if from == to {
            continue;
        }

        adjacency[from].push(Edge::new(to as u32, rng.gen_range(1..=max_weight)));
        added += 1;
    }

    let mut graph = KeyedGraph::with_capacity(vertices);
    for (v, edges) in adjacency.into_iter().enumerate() {
        graph
            .add_vertex(v as u32, edges)
            .expect("generated weights are positive");
    }

    graph
}

/// Generates a width x height grid with unit weights and 4-connectivity,
/// keyed by (x, y) coordinate. The shortest distance from the origin to
/// (x, y) is x + y.
pub fn grid_graph(width: u32, height: u32) -> KeyedGraph<(u32, u32), u64> {
    let mut graph = KeyedGraph::with_capacity((width as usize) * (height as usize));

    for x in 0..width {
        for y in 0..height {
            let mut edges = Vec::new();
            if x > 0 {
                edges.push(Edge::new((x - 1, y), 1));
            }
            if x + 1 < width {
                edges.push(Edge::new((x + 1, y), 1));
            }
            if y > 0 {
                edges.push(Edge::new((x, y - 1), 1));
            }
            if y + 1 < height {
                edges.push(Edge::new((x, y + 1), 1));
            }
            graph
                .add_vertex((x, y), edges)
                .expect("unit weights are positive");
        }
    }

    graph
}
