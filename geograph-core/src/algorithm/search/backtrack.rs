use crate::model::network::{Edge, Graph};

use super::{RoutingError, SearchNode};

/// reconstruct the route to `terminal` by walking predecessor links back to
/// the start, asking each predecessor vertex for its edge to the node it
/// discovered. the walk stops at a node with no predecessor or one whose
/// predecessor shares its key. edges are returned in start-to-terminal
/// order.
pub fn backtrack(
    arena: &[SearchNode],
    graph: &Graph,
    terminal: usize,
) -> Result<Vec<Edge>, RoutingError> {
    let mut edges: Vec<Edge> = vec![];
    let mut current = arena.get(terminal).ok_or_else(|| {
        RoutingError::InternalError(format!("node index {} missing from search arena", terminal))
    })?;
    while let Some(previous_index) = current.previous {
        let previous = arena.get(previous_index).ok_or_else(|| {
            RoutingError::InternalError(format!(
                "predecessor index {} missing from search arena",
                previous_index
            ))
        })?;
        if previous.key == current.key {
            break;
        }
        let edge = graph
            .get_vertex(previous.key)
            .ok()
            .and_then(|vertex| vertex.edge_to(current.key))
            .ok_or_else(|| {
                RoutingError::InternalError(format!(
                    "no edge from {} to {} while backtracking",
                    previous.key, current.key
                ))
            })?;
        edges.push(edge.clone());
        current = previous;
    }
    edges.reverse();
    Ok(edges)
}
