pub mod generators;
pub mod labeled;
pub mod traits;
pub mod vertex;

pub use labeled::LabeledGraph;
pub use traits::{Graph, MutableGraph};
pub use vertex::{Edge, Vertex, VertexId, VertexState, VisitMark};
