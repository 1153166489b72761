use num_traits::Float;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::{LabeledGraph, VertexId};
use crate::{Error, Result};

/// Snapshot of a single-source run: distances and the shortest path tree
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Distances from source to each vertex, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<VertexId>>,

    /// Source vertex ID
    pub source: VertexId,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Get the shortest path from source to target as a sequence of vertices
    pub fn path(&self, target: VertexId) -> Result<Vec<VertexId>> {
        match self.distances.get(target) {
            None => Err(Error::InvalidVertex(target)),
            Some(None) => Err(Error::Unreachable),
            Some(Some(_)) => {
                walk_predecessors(target, self.source, self.predecessors.len(), |v| {
                    self.predecessors[v]
                })
            }
        }
    }
}

/// Follows predecessor links from `target` back to `source` and returns the
/// path in source-to-target order.
///
/// The target must already be known to be reached.
pub(crate) fn walk_predecessors<F>(
    target: VertexId,
    source: VertexId,
    vertex_count: usize,
    predecessor: F,
) -> Result<Vec<VertexId>>
where
    F: Fn(VertexId) -> Option<VertexId>,
{
    let mut path = vec![target];
    let mut current = target;

    while let Some(pred) = predecessor(current) {
        // A tree path never repeats a vertex
        if path.len() >= vertex_count {
            log::warn!("Predecessor chain from {} does not end at the source", target);
            return Err(Error::NegativeCycle);
        }
        path.push(pred);
        current = pred;
    }

    if current != source {
        return Err(Error::Unreachable);
    }

    path.reverse();
    Ok(path)
}

/// Trait for single-source shortest path algorithms.
///
/// Implementations reset and overwrite the scratch state of every vertex in
/// the graph; the outcome is read back through the graph's path queries.
pub trait ShortestPathAlgorithm<L, W>
where
    L: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &mut LabeledGraph<L, W>, source: VertexId)
        -> Result<()>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
