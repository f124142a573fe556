//! graph builders shared by tests. providers for production use are a
//! caller concern; these exist so tests can assert against known shapes.

use crate::model::network::{Anchor, Edge, Graph, Vertex};
use crate::util::geo::Position;

/// the key of the vertex a mock builder places at `(x, y)`.
pub fn key_at(x: f64, y: f64) -> i64 {
    Anchor::new(Position::new(x, y)).key()
}

/// a `columns` x `rows` grid with unit-length edges in both directions
/// between 4-connected neighbors. vertices sit at integer coordinates and
/// carry no explicit id, so identity is positional.
pub fn grid_graph(columns: usize, rows: usize) -> Graph {
    let mut graph = Graph::new();
    for row in 0..rows {
        for column in 0..columns {
            let position = Position::new(column as f64, row as f64);
            let mut vertex = Vertex::new(position);
            let anchor = vertex.anchor();

            let mut neighbors: Vec<Position> = vec![];
            if column > 0 {
                neighbors.push(Position::new(column as f64 - 1.0, row as f64));
            }
            if column + 1 < columns {
                neighbors.push(Position::new(column as f64 + 1.0, row as f64));
            }
            if row > 0 {
                neighbors.push(Position::new(column as f64, row as f64 - 1.0));
            }
            if row + 1 < rows {
                neighbors.push(Position::new(column as f64, row as f64 + 1.0));
            }
            for neighbor in neighbors {
                let edge = Edge::new(anchor, Anchor::new(neighbor));
                vertex.add_edge(edge.clone());
                graph.add_edge(edge);
            }
            graph.add_vertex(vertex);
        }
    }
    graph
}

/// a complete graph over the given locations, with a directed edge between
/// every ordered pair.
pub fn complete_graph(positions: &[(f64, f64)]) -> Graph {
    let mut graph = Graph::new();
    for (i, &(x, y)) in positions.iter().enumerate() {
        let mut vertex = Vertex::new(Position::new(x, y));
        let anchor = vertex.anchor();
        for (j, &(ox, oy)) in positions.iter().enumerate() {
            if i == j {
                continue;
            }
            let edge = Edge::new(anchor, Anchor::new(Position::new(ox, oy)));
            vertex.add_edge(edge.clone());
            graph.add_edge(edge);
        }
        graph.add_vertex(vertex);
    }
    graph
}
