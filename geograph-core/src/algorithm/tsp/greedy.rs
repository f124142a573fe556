use std::collections::HashSet;

use ordered_float::OrderedFloat;
use rand::Rng;

use crate::model::network::{Anchor, Edge, Vertex};
use crate::model::Path;

use super::{close_tour, TspRequest, TspResponse};

/// greedy nearest-neighbor tour: follow the shortest adjacency edge to an
/// unvisited vertex; when none exists, jump straight to the globally nearest
/// unvisited vertex over a synthesized edge.
pub(super) fn run<R: Rng>(request: &TspRequest, rng: &mut R) -> TspResponse {
    let graph = request.graph;
    let metric = request.metric;
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
        let closest = adjacency
            .iter()
            .filter(|edge| !visited.contains(&edge.to().key()))
            .min_by_key(|edge| OrderedFloat(edge.length_cached(metric)));
        match closest {
            Some(edge) => {
                let to = *edge.to();
                tour.push(edge.clone());
                visited.insert(to.key());
                current = to;
            }
            None => {
                let nearest = vertices
                    .iter()
                    .filter(|vertex| !visited.contains(&vertex.key()))
                    .min_by_key(|vertex| {
                        OrderedFloat(current.position.distance_to(&vertex.position, metric))
                    });
                let Some(nearest) = nearest else {
                    break;
                };
                tour.push(Edge::new(current, nearest.anchor()));
                visited.insert(nearest.key());
                current = nearest.anchor();
            }
        }
    }

    close_tour(graph, &mut tour, current, start);
    TspResponse {
        path: Path::new(tour),
    }
}

#[cfg(test)]
mod tests {
    use super::super::{TspAlgorithm, TspRequest};
    use crate::testing::mock;
    use crate::util::geo::DistanceMetric;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_greedy_tour_visits_every_vertex_once() {
        let graph = mock::complete_graph(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let mut rng = StdRng::seed_from_u64(3);
        let response = TspAlgorithm::Greedy.run(&TspRequest::new(&graph), &mut rng);

        let path = response.path;
        assert_eq!(path.len(), 4, "closed tour over four vertices");
        let froms: HashSet<i64> = path.edges().iter().map(|e| e.from().key()).collect();
        assert_eq!(froms.len(), 4);
        // the tour closes back on its start
        assert_eq!(
            path.edges()[0].from().key(),
            path.edges()[path.len() - 1].to().key()
        );
    }

    #[test]
    fn test_greedy_tour_on_unit_square_takes_the_perimeter() {
        let graph = mock::complete_graph(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let mut rng = StdRng::seed_from_u64(3);
        let response = TspAlgorithm::Greedy.run(&TspRequest::new(&graph), &mut rng);
        // nearest-neighbor from any corner walks the sides
        let total = response.path.total_distance(DistanceMetric::Euclidean);
        approx::assert_relative_eq!(total, 4.0);
    }

    #[test]
    fn test_degenerate_graphs_yield_empty_tours() {
        let mut rng = StdRng::seed_from_u64(3);
        let empty = mock::complete_graph(&[]);
        assert!(TspAlgorithm::Greedy
            .run(&TspRequest::new(&empty), &mut rng)
            .path
            .is_empty());
        let single = mock::complete_graph(&[(0.0, 0.0)]);
        assert!(TspAlgorithm::Greedy
            .run(&TspRequest::new(&single), &mut rng)
            .path
            .is_empty());
    }
}
