use num_traits::Float;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::MutablePriorityQueue;
use crate::graph::{LabeledGraph, VertexId};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm on a mutable indexed priority queue.
///
/// Edge weights must be non-negative. This is not checked unless
/// [`Dijkstra::with_weight_check`] is enabled; with negative weights the
/// computed distances are not guaranteed to be shortest.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    /// Reject graphs with negative edge weights before running
    check_weights: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            check_weights: false,
        }
    }

    /// Scan every edge for a negative weight before running
    pub fn with_weight_check(mut self, enabled: bool) -> Self {
        self.check_weights = enabled;
        self
    }
}

impl<L, W> ShortestPathAlgorithm<L, W> for Dijkstra
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &mut LabeledGraph<L, W>, source: VertexId) -> Result<()> {
        if self.check_weights {
            if let Some(weight) = graph.first_negative_weight() {
                graph.abort_single_source();
                return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
            }
        }

        graph.begin_single_source(source)?;
        log::debug!(
            "Dijkstra from vertex {} over {} vertices",
            source,
            graph.vertex_count()
        );

        let vertices = graph.vertices_mut();
        let mut queue = MutablePriorityQueue::new();
        queue.insert(vertices, source);

        let mut settled = 0usize;
        while let Some(v) = queue.extract_min(vertices) {
            vertices[v].state.visited = true;
            settled += 1;
            let dist_v = vertices[v].state.distance;

            for e in 0..vertices[v].adj().len() {
                let edge = vertices[v].adj()[e];
                let w = edge.dest;

                // Settled vertices cannot improve under non-negative weights
                if vertices[w].state.visited {
                    continue;
                }

                let new_dist = dist_v + edge.weight;
                let old_dist = vertices[w].state.distance;
                if new_dist < old_dist {
                    log::trace!("relax {} -> {}: {:?} -> {:?}", v, w, old_dist, new_dist);
                    vertices[w].state.distance = new_dist;
                    vertices[w].state.predecessor = Some(v);

                    if old_dist == W::infinity() {
                        queue.insert(vertices, w);
                    } else {
                        queue.decrease_key(vertices, w);
                    }
                }
            }
        }

        log::debug!("Dijkstra settled {} vertices", settled);
        Ok(())
    }
}
