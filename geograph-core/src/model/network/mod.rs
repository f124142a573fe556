mod anchor;
mod edge;
mod graph;
mod network_error;
mod vertex;

pub use anchor::Anchor;
pub use edge::{Edge, PolylineEdge, SimpleEdge};
pub use graph::Graph;
pub use network_error::NetworkError;
pub use vertex::Vertex;
