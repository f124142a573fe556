use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::model::network::{Edge, Graph};
use crate::util::union_find::UnionFind;

use super::{attach, MstRequest, MstResponse};

/// kruskal's construction: the unique edge multiset sorted by cached length
/// ascending, accepted whenever the endpoints belong to distinct vertex
/// sets. a disjoint input yields a spanning forest rather than a tree.
pub(super) fn run(request: &MstRequest) -> MstResponse {
    let graph = request.graph;
    let index: HashMap<i64, usize> = graph
        .vertices()
        .enumerate()
        .map(|(i, vertex)| (vertex.key(), i))
        .collect();
    let mut subgraphs = UnionFind::new(index.len());

    let mut seen: HashSet<i64> = HashSet::new();
    let mut edges: Vec<&Edge> = vec![];
    for vertex in graph.vertices() {
        for edge in vertex.edges() {
            if seen.insert(edge.key()) {
                edges.push(edge);
            }
        }
    }

    let mut forest = Graph::new();
    let sorted = edges
        .into_iter()
        .sorted_by_key(|edge| OrderedFloat(edge.length_cached(request.metric) + 1.0));
    for edge in sorted {
        let (Some(&from), Some(&to)) = (
            index.get(&edge.from().key()),
            index.get(&edge.to().key()),
        ) else {
            // an endpoint outside the vertex set cannot join two sets
            continue;
        };
        if subgraphs.union(from, to) {
            attach(&mut forest, Edge::new(*edge.from(), *edge.to()));
        }
    }

    if !index.is_empty() && subgraphs.component_count() > 1 {
        log::info!("input graph is disjoint, returning a spanning forest");
    }
    MstResponse { graph: forest }
}
