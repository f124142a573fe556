use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::util::geo::{DistanceMetric, Position};
use crate::util::hashing;

use super::{Anchor, Edge};

/// a vertex in a geometric graph: a location plus the ordered list of its
/// outgoing edges. identity is the explicit id when positive, otherwise the
/// structural hash of the coordinates; two vertices with equal keys are
/// treated as the same node.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Vertex {
    pub id: i64,
    pub position: Position,
    edges: Vec<Edge>,
}

impl Vertex {
    pub fn new(position: Position) -> Self {
        Self {
            id: -1,
            position,
            edges: vec![],
        }
    }

    pub fn with_id(id: i64, position: Position) -> Self {
        Self {
            id,
            position,
            edges: vec![],
        }
    }

    pub fn key(&self) -> i64 {
        hashing::hash_or_id(self.id, || hashing::hash_values(self.position.values()))
    }

    pub fn anchor(&self) -> Anchor {
        Anchor::from(self)
    }

    /// outgoing edges in insertion order. the successor-expansion order of a
    /// search follows this order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// drop every outgoing edge whose key matches.
    pub fn remove_edge(&mut self, key: i64) {
        self.edges.retain(|edge| edge.key() != key);
    }

    /// first outgoing edge landing on the vertex identified by `key`.
    pub fn edge_to(&self, key: i64) -> Option<&Edge> {
        self.edges.iter().find(|edge| edge.to().key() == key)
    }

    pub fn distance_to(&self, other: &Vertex, metric: DistanceMetric) -> f64 {
        self.position.distance_to(&other.position, metric)
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vertex {} {}", self.key(), self.position)
    }
}
