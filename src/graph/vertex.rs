use num_traits::Float;
use std::fmt::Debug;

/// Stable index of a vertex inside its graph's arena
pub type VertexId = usize;

/// Depth-first traversal state of a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitMark {
    #[default]
    Unvisited,
    /// On the active traversal stack
    Processing,
    Done,
}

/// Per-vertex scratch state shared by every algorithm.
///
/// Each algorithm resets the whole record for every vertex before it runs, so
/// a graph can be reused for independent queries from different sources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexState<W>
where
    W: Float + Debug,
{
    /// Tentative or final distance from the last source, `W::infinity()` if unreached
    pub distance: W,

    /// Previous vertex on the shortest path from the last source
    pub predecessor: Option<VertexId>,

    pub visited: bool,

    pub mark: VisitMark,

    /// Heap slot, only meaningful while the vertex is queued
    pub queue_index: usize,
}

impl<W> Default for VertexState<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        VertexState {
            distance: W::infinity(),
            predecessor: None,
            visited: false,
            mark: VisitMark::Unvisited,
            queue_index: 0,
        }
    }
}

/// A directed weighted arc, owned by its source vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub dest: VertexId,
    pub weight: W,
}

/// A labeled vertex with its outgoing edges and algorithm scratch state
#[derive(Debug, Clone)]
pub struct Vertex<L, W>
where
    W: Float + Debug,
{
    info: L,
    adj: Vec<Edge<W>>,
    pub(crate) state: VertexState<W>,
}

impl<L, W> Vertex<L, W>
where
    W: Float + Debug,
{
    pub(crate) fn new(info: L) -> Self {
        Vertex {
            info,
            adj: Vec::new(),
            state: VertexState::default(),
        }
    }

    pub(crate) fn add_edge(&mut self, dest: VertexId, weight: W) {
        self.adj.push(Edge { dest, weight });
    }

    /// The user label identifying this vertex
    pub fn info(&self) -> &L {
        &self.info
    }

    /// Outgoing edges in insertion order
    pub fn adj(&self) -> &[Edge<W>] {
        &self.adj
    }

    pub fn distance(&self) -> W {
        self.state.distance
    }

    pub fn predecessor(&self) -> Option<VertexId> {
        self.state.predecessor
    }

    pub fn state(&self) -> &VertexState<W> {
        &self.state
    }

    /// True once the last single-source run assigned a finite distance
    pub fn is_reached(&self) -> bool {
        self.state.distance < W::infinity()
    }
}
