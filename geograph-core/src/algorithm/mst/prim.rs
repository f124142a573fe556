use std::collections::{HashMap, HashSet};

use rand::Rng;

use crate::model::network::{Edge, Graph};

use super::{attach, MstRequest, MstResponse};

/// prim's construction: repeatedly close over the cheapest not-yet-visited
/// vertex, adding the edge that provided its cheapest connection, then relax
/// its unvisited neighbors. when no unvisited vertex has been priced (the
/// start, or the first vertex of a new component), the pick is random.
pub(super) fn run<R: Rng>(request: &MstRequest, rng: &mut R) -> MstResponse {
    let graph = request.graph;
    let mut cheapest_cost: HashMap<i64, f64> = graph
        .vertices()
        .map(|vertex| (vertex.key(), f64::INFINITY))
        .collect();
    let mut providing_edge: HashMap<i64, Edge> = HashMap::new();
    let mut not_visited: Vec<i64> = graph.vertices().map(|vertex| vertex.key()).collect();
    let mut not_visited_set: HashSet<i64> = not_visited.iter().copied().collect();

    let mut forest = Graph::new();
    while !not_visited.is_empty() {
        let mut to_remove: Option<usize> = None;
        let mut lowest = f64::INFINITY;
        for (position, key) in not_visited.iter().enumerate() {
            if cheapest_cost[key] < lowest {
                lowest = cheapest_cost[key];
                to_remove = Some(position);
            }
        }
        let position = to_remove.unwrap_or_else(|| rng.random_range(0..not_visited.len()));
        let removed = not_visited.swap_remove(position);
        not_visited_set.remove(&removed);

        if let Some(edge) = providing_edge.remove(&removed) {
            attach(&mut forest, Edge::new(*edge.from(), *edge.to()));
        }

        let Ok(vertex) = graph.get_vertex(removed) else {
            continue;
        };
        for edge in vertex.edges() {
            let neighbor = edge.to().key();
            if !not_visited_set.contains(&neighbor) {
                continue;
            }
            let length = edge.length_cached(request.metric);
            if length < cheapest_cost[&neighbor] {
                cheapest_cost.insert(neighbor, length);
                providing_edge.insert(neighbor, edge.clone());
            }
        }
    }

    MstResponse { graph: forest }
}

#[cfg(test)]
mod tests {
    use super::super::{MstAlgorithm, MstRequest};
    use crate::testing::mock;
    use crate::util::geo::DistanceMetric;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_prim_on_unit_square() {
        let graph = mock::complete_graph(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let mut rng = StdRng::seed_from_u64(7);
        let response = MstAlgorithm::Prim.run(&MstRequest::new(&graph), &mut rng);

        assert_eq!(response.graph.n_edges(), 3);
        let total: f64 = response
            .graph
            .edges()
            .map(|edge| edge.length(DistanceMetric::Euclidean))
            .sum();
        assert_relative_eq!(total, 3.0);
    }

    #[test]
    fn test_prim_spans_the_connected_component() {
        let graph = mock::grid_graph(5, 3);
        let mut rng = StdRng::seed_from_u64(7);
        let response = MstAlgorithm::Prim.run(&MstRequest::new(&graph), &mut rng);

        let spanned: HashSet<i64> = response.graph.vertices().map(|v| v.key()).collect();
        let expected: HashSet<i64> = graph.vertices().map(|v| v.key()).collect();
        assert_eq!(spanned, expected);
        assert_eq!(response.graph.n_edges(), graph.n_vertices() - 1);
    }
}
