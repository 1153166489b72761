use crate::graph::LabeledGraph;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Graph with `usize` labels and `OrderedFloat<f64>` weights, as produced by the generators
pub type GeneratedGraph = LabeledGraph<usize, OrderedFloat<f64>>;

fn with_vertices(n: usize) -> GeneratedGraph {
    let mut graph = LabeledGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    graph
}

/// Generates a random directed graph with about `edge_factor * n` edges and
/// weights uniformly drawn from `[1, max_weight)`.
///
/// The same seed always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, max_weight: f64, seed: u64) -> GeneratedGraph {
    assert!(max_weight > 1.0, "max_weight must be greater than 1");

    let mut graph = with_vertices(n);
    if n == 0 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = OrderedFloat(rng.gen_range(1.0..max_weight));
        graph.add_edge(&u, &v, weight);
    }

    graph
}

/// Generates a random DAG (edges only go from lower to higher label) whose
/// weights may be negative. It never contains a negative cycle.
pub fn generate_random_dag(n: usize, edge_factor: f64, seed: u64) -> GeneratedGraph {
    let mut graph = with_vertices(n);
    if n < 2 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n - 1);
        let v = rng.gen_range(u + 1..n);
        let weight = OrderedFloat(rng.gen_range(-10.0..50.0));
        graph.add_edge(&u, &v, weight);
    }

    graph
}

/// Generates a `width` x `height` grid with unit edges between 4-neighbours
/// in both directions. Vertex `(x, y)` has label `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> GeneratedGraph {
    let mut graph = with_vertices(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                graph.add_edge(&vertex, &(vertex + 1), OrderedFloat(1.0));
                graph.add_edge(&(vertex + 1), &vertex, OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_edge(&vertex, &(vertex + width), OrderedFloat(1.0));
                graph.add_edge(&(vertex + width), &vertex, OrderedFloat(1.0));
            }
        }
    }

    graph
}
