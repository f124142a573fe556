use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::model::network::{Anchor, Edge, Vertex};
use crate::model::Path;

use super::{close_tour, TspRequest, TspResponse};

/// random tour: choose uniformly among adjacency edges to unvisited
/// vertices; on a dead end, jump to a uniformly chosen unvisited vertex
/// over a synthesized edge.
pub(super) fn run<R: Rng>(request: &TspRequest, rng: &mut R) -> TspResponse {
    let graph = request.graph;
    let vertices: Vec<&Vertex> = graph.vertices().collect();
    if vertices.len() < 2 {
        return TspResponse { path: Path::empty() };
    }

    let start = vertices[rng.random_range(0..vertices.len())];
    let mut visited: HashSet<i64> = HashSet::from([start.key()]);
    let mut tour: Vec<Edge> = vec![];
    let mut current: Anchor = start.anchor();

    while visited.len() < vertices.len() {
        let adjacency = graph
            .get_vertex(current.key())
            .map(|vertex| vertex.edges())
            .unwrap_or(&[]);
        let candidates: Vec<&Edge> = adjacency
            .iter()
            .filter(|edge| !visited.contains(&edge.to().key()))
            .collect();
        match candidates.choose(rng) {
            Some(edge) => {
                let to = *edge.to();
                tour.push((*edge).clone());
                visited.insert(to.key());
                current = to;
            }
            None => {
                let unvisited: Vec<&&Vertex> = vertices
                    .iter()
                    .filter(|vertex| !visited.contains(&vertex.key()))
                    .collect();
                let Some(target) = unvisited.choose(rng) else {
                    break;
                };
                tour.push(Edge::new(current, target.anchor()));
                visited.insert(target.key());
                current = target.anchor();
            }
        }
    }

    close_tour(graph, &mut tour, current, start);
    TspResponse {
        path: Path::new(tour),
    }
}
