mod kruskal;
mod mst_algorithm;
mod prim;

pub use mst_algorithm::MstAlgorithm;
pub use mst_algorithm::MstRequest;
pub use mst_algorithm::MstResponse;

use crate::model::network::{Edge, Graph, Vertex};

/// add an accepted edge to a forest under construction, creating endpoint
/// vertices as needed and recording the edge on its source vertex's
/// adjacency.
fn attach(forest: &mut Graph, edge: Edge) {
    let from = *edge.from();
    let to = *edge.to();
    if !forest.contains_vertex_key(from.key()) {
        forest.add_vertex(Vertex::with_id(from.id, from.position));
    }
    if !forest.contains_vertex_key(to.key()) {
        forest.add_vertex(Vertex::with_id(to.id, to.position));
    }
    if let Ok(vertex) = forest.get_vertex_mut(from.key()) {
        vertex.add_edge(edge.clone());
    }
    forest.add_edge(edge);
}
