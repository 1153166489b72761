use num_traits::Float;
use std::fmt::Debug;

use crate::graph::vertex::VertexId;

/// Trait representing a weighted directed graph addressed by stable vertex index
pub trait Graph<W>: Debug
where
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges counted separately
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool;

    /// Gets the weight of the lightest edge between two vertices if one exists
    fn get_edge_weight(&self, from: VertexId, to: VertexId) -> Option<W>;
}

/// Trait for label-based graph construction
pub trait MutableGraph<L, W>: Graph<W>
where
    W: Float + Debug,
{
    /// Adds a vertex with the given label, false if the label is already present
    fn add_vertex(&mut self, label: L) -> bool;

    /// Adds a directed edge between two labeled vertices, false if either is absent
    fn add_edge(&mut self, from: &L, to: &L, weight: W) -> bool;
}
