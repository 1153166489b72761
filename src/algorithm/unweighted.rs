use num_traits::Float;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{LabeledGraph, VertexId};
use crate::Result;

/// Shortest paths by edge count, computed with a FIFO queue.
///
/// Edge weights are ignored: every edge counts as one. On unit-weight graphs
/// this agrees with [`Dijkstra`](crate::Dijkstra) in linear time.
#[derive(Debug, Default, Clone)]
pub struct Unweighted;

impl Unweighted {
    pub fn new() -> Self {
        Unweighted
    }
}

impl<L, W> ShortestPathAlgorithm<L, W> for Unweighted
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn name(&self) -> &'static str {
        "Unweighted BFS"
    }

    fn compute_shortest_paths(&self, graph: &mut LabeledGraph<L, W>, source: VertexId) -> Result<()> {
        graph.begin_single_source(source)?;

        let vertices = graph.vertices_mut();
        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(v) = queue.pop_front() {
            let next = vertices[v].state.distance + W::one();

            for e in 0..vertices[v].adj().len() {
                let w = vertices[v].adj()[e].dest;
                if vertices[w].state.distance == W::infinity() {
                    vertices[w].state.distance = next;
                    vertices[w].state.predecessor = Some(v);
                    queue.push_back(w);
                }
            }
        }

        log::debug!("Unweighted shortest path from vertex {} done", source);
        Ok(())
    }
}
