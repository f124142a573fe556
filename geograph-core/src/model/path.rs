use std::fmt::Display;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::algorithm::search::SearchNode;
use crate::model::cost::{cost_ops, CostEntry, CostError, CostFunctionMap, CostMap};
use crate::model::network::Edge;
use crate::util::geo::DistanceMetric;
use crate::util::hashing;

/// an ordered edge sequence, as produced by routing and the TSP heuristics.
/// an empty path is valid.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Path {
    edges: Vec<Edge>,
    id: i64,
}

impl Path {
    pub fn new(edges: Vec<Edge>) -> Self {
        Self { edges, id: -1 }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn key(&self) -> i64 {
        hashing::hash_or_id(self.id, || {
            hashing::hash_keys(self.edges.iter().map(Edge::key))
        })
    }

    /// per-dimension cost of walking the path from its first endpoint,
    /// re-evaluated with the given cost functions (euclidean distance when
    /// none are given). edge preset costs short-circuit as they do during
    /// routing.
    pub fn cost(&self, cost_functions: Option<CostFunctionMap>) -> Result<CostMap, CostError> {
        let (functions, initial) = cost_ops::initial_costs(cost_functions)?;
        let Some(first) = self.edges.first() else {
            return Ok(initial);
        };
        let start = first.from();
        let mut current = SearchNode::new(start.key(), start.position, initial, CostEntry::ZERO);
        for edge in &self.edges {
            let to = edge.to();
            let next = cost_ops::next_costs(
                &current,
                std::slice::from_ref(edge),
                to.key(),
                &to.position,
                &functions,
            );
            current = SearchNode::new(to.key(), to.position, next, CostEntry::ZERO);
        }
        Ok(current.costs)
    }

    /// total geometric length of the path under the given metric.
    pub fn total_distance(&self, metric: DistanceMetric) -> f64 {
        self.edges.iter().map(|edge| edge.length(metric)).sum()
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.edges.iter().map(Edge::to_string).join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cost::DISTANCE;
    use crate::model::network::Anchor;
    use crate::util::geo::Position;
    use approx::assert_relative_eq;

    fn l_path() -> Path {
        let a = Anchor::new(Position::new(0.0, 0.0));
        let b = Anchor::new(Position::new(3.0, 4.0));
        let c = Anchor::new(Position::new(3.0, 10.0));
        Path::new(vec![Edge::new(a, b), Edge::new(b, c)])
    }

    #[test]
    fn test_total_distance() {
        assert_relative_eq!(l_path().total_distance(DistanceMetric::Euclidean), 11.0);
    }

    #[test]
    fn test_cost_re_walk_matches_geometry() {
        let costs = l_path().cost(None).unwrap();
        let entry = costs[DISTANCE];
        assert_relative_eq!(entry.total.as_f64(), 11.0);
        assert_relative_eq!(entry.accumulated.as_f64(), 5.0);
        assert_relative_eq!(entry.current.as_f64(), 6.0);
    }

    #[test]
    fn test_empty_path_cost_is_initial() {
        let costs = Path::empty().cost(None).unwrap();
        assert_eq!(costs[DISTANCE], CostEntry::ZERO);
        assert_eq!(Path::empty().len(), 0);
    }
}
