//! Weight-agnostic traversals: depth-first and breadth-first order,
//! topological sort, the DAG check and the widest BFS expansion.
//!
//! All of them use explicit stacks or queues, so deep graphs do not grow the
//! call stack.

use num_traits::Float;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::{LabeledGraph, VertexId, VisitMark};

/// Every vertex in depth-first preorder, starting new trees in index order
pub fn dfs<L, W>(graph: &mut LabeledGraph<L, W>) -> Vec<VertexId>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    graph.reset_marks();
    let vertices = graph.vertices_mut();
    let mut order = Vec::with_capacity(vertices.len());
    // (vertex, index of the next edge to follow)
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    for root in 0..vertices.len() {
        if vertices[root].state.visited {
            continue;
        }
        vertices[root].state.visited = true;
        order.push(root);
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (v, next) = *top;
            match vertices[v].adj().get(next).map(|edge| edge.dest) {
                Some(w) => {
                    top.1 += 1;
                    if !vertices[w].state.visited {
                        vertices[w].state.visited = true;
                        order.push(w);
                        stack.push((w, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }
    }

    order
}

/// Vertices reachable from `source` in breadth-first order
pub fn bfs<L, W>(graph: &mut LabeledGraph<L, W>, source: VertexId) -> Vec<VertexId>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    let mut order = Vec::new();
    breadth_first(graph, source, |v, _| order.push(v));
    order
}

/// The vertex that discovers the most new vertices during a BFS from
/// `source`, with that count. Ties go to the vertex dequeued first.
pub fn max_new_children<L, W>(
    graph: &mut LabeledGraph<L, W>,
    source: VertexId,
) -> Option<(VertexId, usize)>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    let mut best: Option<(VertexId, usize)> = None;
    breadth_first(graph, source, |v, discovered| {
        if best.map_or(true, |(_, max)| discovered > max) {
            best = Some((v, discovered));
        }
    });
    best
}

// Calls `visit` with each dequeued vertex and how many unvisited neighbours it enqueued
fn breadth_first<L, W, F>(graph: &mut LabeledGraph<L, W>, source: VertexId, mut visit: F)
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Debug,
    F: FnMut(VertexId, usize),
{
    graph.reset_marks();
    let vertices = graph.vertices_mut();
    if source >= vertices.len() {
        return;
    }

    let mut queue = VecDeque::new();
    vertices[source].state.visited = true;
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        let mut discovered = 0;
        for e in 0..vertices[v].adj().len() {
            let w = vertices[v].adj()[e].dest;
            if !vertices[w].state.visited {
                vertices[w].state.visited = true;
                queue.push_back(w);
                discovered += 1;
            }
        }
        visit(v, discovered);
    }
}

/// Kahn's algorithm. Returns an empty order when the graph has a cycle.
pub fn topsort<L, W>(graph: &LabeledGraph<L, W>) -> Vec<VertexId>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    let vertices = graph.vertex_set();
    let mut indegree = vec![0usize; vertices.len()];
    for edge in vertices.iter().flat_map(|v| v.adj()) {
        indegree[edge.dest] += 1;
    }

    let mut candidates: VecDeque<VertexId> =
        (0..vertices.len()).filter(|&v| indegree[v] == 0).collect();
    let mut order = Vec::with_capacity(vertices.len());

    while let Some(v) = candidates.pop_front() {
        order.push(v);
        for edge in vertices[v].adj() {
            indegree[edge.dest] -= 1;
            if indegree[edge.dest] == 0 {
                candidates.push_back(edge.dest);
            }
        }
    }

    if order.len() != vertices.len() {
        log::debug!("Topological sort stopped at {} of {} vertices", order.len(), vertices.len());
        order.clear();
    }
    order
}

/// True if the graph has no directed cycle.
///
/// A vertex stays `Processing` while it is on the DFS stack; reaching one
/// again through an edge closes a cycle.
pub fn is_dag<L, W>(graph: &mut LabeledGraph<L, W>) -> bool
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    graph.reset_marks();
    let vertices = graph.vertices_mut();
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    for root in 0..vertices.len() {
        if vertices[root].state.mark != VisitMark::Unvisited {
            continue;
        }
        vertices[root].state.mark = VisitMark::Processing;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (v, next) = *top;
            match vertices[v].adj().get(next).map(|edge| edge.dest) {
                Some(w) => {
                    top.1 += 1;
                    match vertices[w].state.mark {
                        VisitMark::Processing => return false,
                        VisitMark::Unvisited => {
                            vertices[w].state.mark = VisitMark::Processing;
                            stack.push((w, 0));
                        }
                        VisitMark::Done => {}
                    }
                }
                None => {
                    vertices[v].state.mark = VisitMark::Done;
                    stack.pop();
                }
            }
        }
    }

    true
}
