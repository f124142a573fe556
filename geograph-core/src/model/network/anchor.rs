use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::util::geo::Position;
use crate::util::hashing;

use super::Vertex;

/// an edge endpoint: a location plus the identity of the vertex it lands on,
/// when one is known. `id = -1` means no explicit id, in which case identity
/// falls back to the structural hash of the coordinates. an anchor taken from
/// a vertex always shares that vertex's key.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub id: i64,
    pub position: Position,
}

impl Anchor {
    pub fn new(position: Position) -> Self {
        Self { id: -1, position }
    }

    pub fn with_id(id: i64, position: Position) -> Self {
        Self { id, position }
    }

    pub fn key(&self) -> i64 {
        hashing::hash_or_id(self.id, || hashing::hash_values(self.position.values()))
    }
}

impl From<&Vertex> for Anchor {
    fn from(vertex: &Vertex) -> Self {
        Anchor {
            id: vertex.id,
            position: vertex.position,
        }
    }
}

impl Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.id > 0 {
            write!(f, "{}:{}", self.id, self.position)
        } else {
            write!(f, "{}", self.position)
        }
    }
}
