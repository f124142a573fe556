mod greedy;
mod random;
mod tsp_algorithm;

pub use tsp_algorithm::TspAlgorithm;
pub use tsp_algorithm::TspRequest;
pub use tsp_algorithm::TspResponse;

use crate::model::network::{Anchor, Edge, Graph, Vertex};

/// close a non-empty tour back to its starting vertex, preferring an
/// existing adjacency edge over a synthesized one.
fn close_tour(graph: &Graph, tour: &mut Vec<Edge>, current: Anchor, start: &Vertex) {
    if tour.is_empty() {
        return;
    }
    let closing = graph
        .get_vertex(current.key())
        .ok()
        .and_then(|vertex| vertex.edge_to(start.key()))
        .cloned()
        .unwrap_or_else(|| Edge::new(current, start.anchor()));
    tour.push(closing);
}
