use ordered_float::OrderedFloat;
use std::collections::HashSet;
use weighted_paths::graph::generators::{
    generate_grid, generate_random, generate_random_dag, GeneratedGraph,
};
use weighted_paths::graph::Graph;
use weighted_paths::{BellmanFord, Dijkstra, Error, Unweighted};

// Sum of the lightest edge weights along a path
fn path_weight(graph: &GeneratedGraph, path: &[usize]) -> OrderedFloat<f64> {
    path.windows(2)
        .map(|pair| {
            let from = graph.find_vertex(&pair[0]).unwrap();
            let to = graph.find_vertex(&pair[1]).unwrap();
            graph.get_edge_weight(from, to).expect("path should only use existing edges")
        })
        .fold(OrderedFloat(0.0), |acc, w| acc + w)
}

fn assert_close(a: OrderedFloat<f64>, b: OrderedFloat<f64>) {
    assert!((a.0 - b.0).abs() < 1e-9, "{} != {}", a.0, b.0);
}

// Every reached vertex: path is simple, starts at the source and weighs its distance
fn check_paths(graph: &GeneratedGraph, source: usize) {
    for v in 0..graph.vertex_count() {
        match graph.distance_to(&v).unwrap() {
            Some(distance) => {
                let path = graph.get_path(&v).unwrap();
                assert_eq!(path[0], source, "Path should start at source");
                assert_eq!(*path.last().unwrap(), v, "Path should end at target");

                let unique: HashSet<_> = path.iter().collect();
                assert_eq!(unique.len(), path.len(), "Path should not repeat vertices");
                assert_close(path_weight(graph, &path), distance);
            }
            None => assert_eq!(graph.get_path(&v), Err(Error::Unreachable)),
        }
    }
}

#[test]
fn test_path_finding_simple_grid() {
    let mut graph = generate_grid(10, 10);

    graph.dijkstra_shortest_path(&0).unwrap();
    assert_eq!(graph.distance_to(&99), Ok(Some(OrderedFloat(18.0))));
    let path = graph.get_path(&99).unwrap();
    assert_eq!(path.len(), 19);
    check_paths(&graph, 0);
}

#[test]
fn test_unweighted_matches_dijkstra_on_unit_grid() {
    let mut graph = generate_grid(12, 7);

    graph.dijkstra_shortest_path(&5).unwrap();
    let dijkstra = graph.shortest_path_result().unwrap();
    graph.unweighted_shortest_path(&5).unwrap();
    let unweighted = graph.shortest_path_result().unwrap();

    assert_eq!(dijkstra.distances, unweighted.distances);
    check_paths(&graph, 5);
}

#[test]
fn test_dijkstra_matches_bellman_ford_on_random_graphs() {
    for seed in 0..10 {
        let mut graph = generate_random(150, 3.0, 50.0, seed);

        graph.run(&Dijkstra::new(), &0).unwrap();
        let dijkstra = graph.shortest_path_result().unwrap();
        check_paths(&graph, 0);

        graph.run(&BellmanFord::new(), &0).unwrap();
        let bellman_ford = graph.shortest_path_result().unwrap();
        check_paths(&graph, 0);

        for v in 0..graph.vertex_count() {
            match (dijkstra.distances[v], bellman_ford.distances[v]) {
                (Some(a), Some(b)) => assert_close(a, b),
                (a, b) => assert_eq!(a, b, "reachability differs at vertex {} (seed {})", v, seed),
            }
        }
    }
}

#[test]
fn test_bellman_ford_matches_floyd_warshall_rows() {
    for seed in 0..5 {
        let mut graph = generate_random_dag(60, 4.0, seed);
        graph.floyd_warshall_shortest_path();

        for source in [0, 10, 30] {
            graph.bellman_ford_shortest_path(&source).unwrap();
            check_paths(&graph, source);

            for v in 0..graph.vertex_count() {
                let row = graph.floyd_warshall_distance(&source, &v).unwrap();
                match (graph.distance_to(&v).unwrap(), row) {
                    (Some(a), Some(b)) => assert_close(a, b),
                    (a, b) => assert_eq!(a, b),
                }

                if let Ok(path) = graph.get_floyd_warshall_path(&source, &v) {
                    assert_close(path_weight(&graph, &path), row.unwrap());
                }
            }
        }
    }
}

#[test]
fn test_repeated_runs_are_idempotent() {
    let mut graph = generate_random(300, 2.5, 30.0, 99);
    let algorithms: [(&str, Box<dyn Fn(&mut GeneratedGraph)>); 3] = [
        ("dijkstra", Box::new(|g: &mut GeneratedGraph| g.run(&Dijkstra::new(), &3).unwrap())),
        ("bellman_ford", Box::new(|g: &mut GeneratedGraph| g.run(&BellmanFord::new(), &3).unwrap())),
        ("unweighted", Box::new(|g: &mut GeneratedGraph| g.run(&Unweighted::new(), &3).unwrap())),
    ];

    for (name, run) in &algorithms {
        run(&mut graph);
        let first = graph.shortest_path_result().unwrap();
        let first_paths: Vec<_> = (0..300).map(|v| graph.get_path(&v)).collect();

        run(&mut graph);
        assert_eq!(graph.shortest_path_result().unwrap(), first, "{} changed between runs", name);
        let second_paths: Vec<_> = (0..300).map(|v| graph.get_path(&v)).collect();
        assert_eq!(first_paths, second_paths);
    }
}

#[test]
fn test_path_finding_around_wall() {
    // Grid with column 5 cut off except for the bottom two rows
    let width = 10;
    let mut graph = GeneratedGraph::new();
    for v in 0..width * width {
        graph.add_vertex(v);
    }
    let wall = |x: usize, y: usize| x == 5 && y < 8;
    for y in 0..width {
        for x in 0..width {
            if wall(x, y) {
                continue;
            }
            let vertex = y * width + x;
            if x + 1 < width && !wall(x + 1, y) {
                graph.add_edge(&vertex, &(vertex + 1), OrderedFloat(1.0));
                graph.add_edge(&(vertex + 1), &vertex, OrderedFloat(1.0));
            }
            if y + 1 < width && !wall(x, y + 1) {
                graph.add_edge(&vertex, &(vertex + width), OrderedFloat(1.0));
                graph.add_edge(&(vertex + width), &vertex, OrderedFloat(1.0));
            }
        }
    }

    graph.dijkstra_shortest_path(&0).unwrap();
    // Down to row 8, across, back up to row 0
    assert_eq!(graph.distance_to(&9), Ok(Some(OrderedFloat(25.0))));
    assert_eq!(graph.get_path(&5), Err(Error::Unreachable));
    check_paths(&graph, 0);
}
