pub mod bellman_ford;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod traits;
pub mod traversal;
pub mod unweighted;

pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;
pub use floyd_warshall::{AllPairsShortestPaths, FloydWarshall};
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
pub use unweighted::Unweighted;
