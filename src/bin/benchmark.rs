use std::env;
use std::time::{Duration, Instant};

use ordered_float::OrderedFloat;
use weighted_paths::graph::generators::{generate_random, GeneratedGraph};
use weighted_paths::{BellmanFord, Dijkstra, FloydWarshall, ShortestPathAlgorithm, Unweighted};

// Function to benchmark a single-source algorithm on a graph
fn benchmark_algorithm<A>(algorithm: &A, graph: &mut GeneratedGraph, source: usize) -> Duration
where
    A: ShortestPathAlgorithm<usize, OrderedFloat<f64>>,
{
    log::info!(
        "Running {} on graph with {} vertices...",
        algorithm.name(),
        graph.vertex_count()
    );

    let start = Instant::now();
    let outcome = graph.run(algorithm, &source);
    let duration = start.elapsed();

    match outcome.and_then(|_| graph.shortest_path_result()) {
        Ok(result) => {
            let reachable = result.distances.iter().filter(|d| d.is_some()).count();
            log::info!("  - Found {} reachable vertices in {:?}", reachable, duration);
        }
        Err(err) => log::warn!("  - {} failed: {}", algorithm.name(), err),
    }

    duration
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Usage: benchmark [edge_factor] [sizes...]
    let args: Vec<String> = env::args().skip(1).collect();
    let edge_factor: f64 = args.first().and_then(|a| a.parse().ok()).unwrap_or(4.0);
    let mut graph_sizes: Vec<usize> = args.iter().skip(1).filter_map(|a| a.parse().ok()).collect();
    if graph_sizes.is_empty() {
        graph_sizes = vec![100, 1_000, 10_000];
    }

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs Bellman-Ford vs BFS");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let bellman_ford = BellmanFord::new();
    let unweighted = Unweighted::new();

    let mut results = Vec::new();

    for &size in &graph_sizes {
        log::info!("Generating random graph with {} vertices...", size);
        let mut graph = generate_random(size, edge_factor, 100.0, size as u64);
        let source = 0;

        let dijkstra_time = benchmark_algorithm(&dijkstra, &mut graph, source);
        let bellman_ford_time = benchmark_algorithm(&bellman_ford, &mut graph, source);
        let bfs_time = benchmark_algorithm(&unweighted, &mut graph, source);

        // All pairs is cubic, keep it to small graphs
        let floyd_warshall_time = (size <= 1_000).then(|| {
            let start = Instant::now();
            graph.floyd_warshall_with(&FloydWarshall::new().with_parallel(true));
            start.elapsed()
        });

        results.push((size, dijkstra_time, bellman_ford_time, bfs_time, floyd_warshall_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<15} | {:<15}",
        "Vertices", "Dijkstra (ms)", "B-Ford (ms)", "BFS (ms)", "F-W par (ms)"
    );
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, bellman_ford_time, bfs_time, floyd_warshall_time) in &results {
        let floyd_warshall = floyd_warshall_time
            .map(|t| format!("{:.2}", t.as_secs_f64() * 1000.0))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<10} | {:<15.2} | {:<15.2} | {:<15.2} | {:<15}",
            size,
            dijkstra_time.as_secs_f64() * 1000.0,
            bellman_ford_time.as_secs_f64() * 1000.0,
            bfs_time.as_secs_f64() * 1000.0,
            floyd_warshall
        );
    }
}
