use weighted_paths::LabeledGraph;

// 1 -> 2 -> 4, 1 -> 3 -> 4, 4 -> 5, 6 isolated
fn dag() -> LabeledGraph<u32, f64> {
    let mut graph = LabeledGraph::from_edges(vec![
        (1, 2, 1.0),
        (1, 3, 1.0),
        (2, 4, 1.0),
        (3, 4, 1.0),
        (4, 5, 1.0),
    ]);
    graph.add_vertex(6);
    graph
}

fn respects_edges(graph: &LabeledGraph<u32, f64>, order: &[u32]) -> bool {
    let position = |label: &u32| order.iter().position(|l| l == label);
    graph.vertex_set().iter().all(|v| {
        v.adj().iter().all(|edge| {
            let dest = graph.label(edge.dest).unwrap();
            position(v.info()) < position(dest)
        })
    })
}

#[test]
fn test_dfs_preorder() {
    let mut graph = dag();
    assert_eq!(graph.dfs(), vec![1, 2, 4, 5, 3, 6]);
}

#[test]
fn test_bfs_order() {
    let mut graph = dag();
    assert_eq!(graph.bfs(&1), vec![1, 2, 3, 4, 5]);
    assert_eq!(graph.bfs(&4), vec![4, 5]);
    assert!(graph.bfs(&42).is_empty());
}

#[test]
fn test_max_new_children() {
    let mut graph = dag();
    assert_eq!(graph.max_new_children(&1), Some((1, 2)));
    assert_eq!(graph.max_new_children(&4), Some((4, 1)));
    assert_eq!(graph.max_new_children(&6), Some((6, 0)));
    assert_eq!(graph.max_new_children(&42), None);

    // 4 is already discovered by 2 when 3 gets dequeued
    graph.add_vertex(7);
    graph.add_edge(&3, &6, 1.0);
    graph.add_edge(&3, &5, 1.0);
    graph.add_edge(&3, &7, 1.0);
    assert_eq!(graph.max_new_children(&1), Some((3, 3)));

    // 2 and 4 both discover one vertex, the first dequeued wins
    assert_eq!(graph.max_new_children(&2), Some((2, 1)));
}

#[test]
fn test_topsort_respects_edges() {
    let graph = dag();
    let order = graph.topsort();
    assert_eq!(order.len(), 6);
    assert!(respects_edges(&graph, &order));
}

#[test]
fn test_cycle_detection() {
    let mut graph = dag();
    assert!(graph.is_dag());

    graph.add_edge(&5, &1, 1.0);
    assert!(!graph.is_dag());
    assert!(graph.topsort().is_empty());
}

#[test]
fn test_self_loop_is_a_cycle() {
    let mut graph = dag();
    graph.add_edge(&6, &6, 1.0);
    assert!(!graph.is_dag());
}

#[test]
fn test_traversal_keeps_distances() {
    let mut graph = dag();
    graph.dijkstra_shortest_path(&1).unwrap();
    graph.dfs();
    graph.is_dag();
    assert_eq!(graph.distance_to(&5), Ok(Some(3.0)));
    assert_eq!(graph.get_path(&5).unwrap(), vec![1, 2, 4, 5]);
}

#[test]
fn test_deep_chain_does_not_recurse() {
    let n = 200_000u32;
    let mut graph: LabeledGraph<u32, f64> = LabeledGraph::with_capacity(n as usize);
    for v in 0..n {
        graph.add_vertex(v);
    }
    for v in 1..n {
        graph.add_edge(&(v - 1), &v, 1.0);
    }

    assert!(graph.is_dag());
    assert_eq!(graph.dfs().len(), n as usize);
}
