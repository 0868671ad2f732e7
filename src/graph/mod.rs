pub mod traits;
pub mod directed;
pub mod shared;

pub use traits::{Graph, MutableGraph};
pub use directed::{DirectedGraph, Edge, Vertex};
pub use shared::SharedGraph;
