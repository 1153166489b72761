use num_traits::Float;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{LabeledGraph, Vertex, VertexId};
use crate::{Error, Result};

/// Bellman-Ford single-source shortest paths.
///
/// Accepts negative edge weights. A negative cycle reachable from the source
/// is reported as [`Error::NegativeCycle`] instead of a distance table.
#[derive(Debug, Clone)]
pub struct BellmanFord {
    /// Stop as soon as a pass relaxes nothing
    early_exit: bool,
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self::new()
    }
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance with early exit enabled
    pub fn new() -> Self {
        BellmanFord { early_exit: true }
    }

    /// Enable or disable stopping at the first pass without updates
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }
}

/// One pass over every edge leaving a reached vertex. Returns the number of
/// relaxations performed.
fn relax_all<L, W>(vertices: &mut [Vertex<L, W>]) -> usize
where
    W: Float + Debug,
{
    let mut updates = 0;

    for v in 0..vertices.len() {
        for e in 0..vertices[v].adj().len() {
            let dist_v = vertices[v].state.distance;
            if dist_v == W::infinity() {
                break;
            }

            let edge = vertices[v].adj()[e];
            let new_dist = dist_v + edge.weight;
            if new_dist < vertices[edge.dest].state.distance {
                vertices[edge.dest].state.distance = new_dist;
                vertices[edge.dest].state.predecessor = Some(v);
                updates += 1;
            }
        }
    }

    updates
}

/// Finds an edge that still violates the shortest path invariant
fn find_violation<L, W>(vertices: &[Vertex<L, W>]) -> Option<(VertexId, VertexId)>
where
    W: Float + Debug,
{
    vertices
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_reached())
        .flat_map(|(id, v)| v.adj().iter().map(move |edge| (id, v.distance(), edge)))
        .find(|(_, dist_v, edge)| *dist_v + edge.weight < vertices[edge.dest].distance())
        .map(|(id, _, edge)| (id, edge.dest))
}

impl<L, W> ShortestPathAlgorithm<L, W> for BellmanFord
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &mut LabeledGraph<L, W>, source: VertexId) -> Result<()> {
        graph.begin_single_source(source)?;

        let n = graph.vertex_count();
        let vertices = graph.vertices_mut();
        let mut passes = 0;

        for _ in 1..n {
            passes += 1;
            let updates = relax_all(vertices);
            log::trace!("Bellman-Ford pass {}: {} relaxations", passes, updates);
            if updates == 0 && self.early_exit {
                break;
            }
        }

        if let Some((from, to)) = find_violation(vertices) {
            log::warn!(
                "Negative cycle reachable from vertex {} (edge {} -> {} still relaxes)",
                source,
                from,
                to
            );
            graph.abort_single_source();
            return Err(Error::NegativeCycle);
        }

        log::debug!("Bellman-Ford from vertex {} converged after {} passes", source, passes);
        Ok(())
    }
}
