//! Weighted Paths - shortest paths over a generic labeled graph
//!
//! This library provides a weighted directed graph keyed by user labels and the
//! classic shortest-path algorithms that run on it: Dijkstra with a mutable
//! indexed priority queue, Bellman-Ford with negative-cycle detection, an
//! unweighted BFS variant and Floyd-Warshall for all pairs.
//!
//! Single-source algorithms leave their result in the per-vertex scratch state
//! of the graph, which is then read with [`LabeledGraph::distance_to`] and
//! [`LabeledGraph::get_path`].

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, floyd_warshall::AllPairsShortestPaths,
    floyd_warshall::FloydWarshall, unweighted::Unweighted, ShortestPathAlgorithm,
    ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::labeled::LabeledGraph;
pub use graph::vertex::VertexId;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Vertex not found in graph")]
    VertexNotFound,

    #[error("Destination is unreachable from the source")]
    Unreachable,

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Graph contains a negative-weight cycle reachable from the source")]
    NegativeCycle,

    #[error("No shortest path result is available, run an algorithm first")]
    NotComputed,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
