use std::collections::HashMap;
use std::fmt::Display;
use std::sync::OnceLock;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::util::geo::{DistanceMetric, Position};

use super::{Anchor, NetworkError};

/// a directed edge between two anchored locations. the set of shapes is
/// closed: a straight segment, or a polyline of three or more points whose
/// endpoints are the first and last.
///
/// identity is the explicit id when positive, otherwise an XOR fold of the
/// endpoint keys. the fold is commutative, so an edge and its reversal share
/// a key; undirected modeling relies on this.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Edge {
    Simple(SimpleEdge),
    Polyline(PolylineEdge),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimpleEdge {
    from: Anchor,
    to: Anchor,
    id: i64,
    #[serde(skip)]
    distance: OnceLock<f64>,
    preset_costs: Option<HashMap<String, f64>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PolylineEdge {
    points: Vec<Anchor>,
    id: i64,
    #[serde(skip)]
    distance: OnceLock<f64>,
}

const UNKEYED: i64 = -1;

impl Edge {
    /// straight segment with no explicit id.
    pub fn new(from: Anchor, to: Anchor) -> Edge {
        Edge::with_id(from, to, UNKEYED)
    }

    pub fn with_id(from: Anchor, to: Anchor, id: i64) -> Edge {
        Edge::Simple(SimpleEdge {
            from,
            to,
            id,
            distance: OnceLock::new(),
            preset_costs: None,
        })
    }

    /// edge through an ordered point sequence: a segment for two points, a
    /// polyline for three or more. fewer than two points is degenerate.
    pub fn from_points(points: Vec<Anchor>) -> Result<Edge, NetworkError> {
        match points.len() {
            0 | 1 => Err(NetworkError::DegenerateEdge(points.len())),
            2 => Ok(Edge::new(points[0], points[1])),
            _ => Ok(Edge::Polyline(PolylineEdge {
                points,
                id: UNKEYED,
                distance: OnceLock::new(),
            })),
        }
    }

    /// attach preset per-dimension step costs, letting searches skip cost
    /// function evaluation for those dimensions. polyline edges carry no
    /// preset costs and are returned unchanged.
    pub fn with_preset_costs(self, costs: HashMap<String, f64>) -> Edge {
        match self {
            Edge::Simple(mut edge) => {
                edge.preset_costs = Some(costs);
                Edge::Simple(edge)
            }
            other => other,
        }
    }

    pub fn from(&self) -> &Anchor {
        match self {
            Edge::Simple(edge) => &edge.from,
            Edge::Polyline(edge) => &edge.points[0],
        }
    }

    pub fn to(&self) -> &Anchor {
        match self {
            Edge::Simple(edge) => &edge.to,
            Edge::Polyline(edge) => &edge.points[edge.points.len() - 1],
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Edge::Simple(edge) => edge.id,
            Edge::Polyline(edge) => edge.id,
        }
    }

    pub fn key(&self) -> i64 {
        if self.id() > 0 {
            return self.id();
        }
        match self {
            Edge::Simple(edge) => 31 ^ edge.from.key() ^ edge.to.key(),
            Edge::Polyline(edge) => edge
                .points
                .iter()
                .fold(31, |hash, point| hash ^ point.key()),
        }
    }

    /// preset step cost for one dimension, when present.
    pub fn preset_cost(&self, dimension: &str) -> Option<f64> {
        match self {
            Edge::Simple(edge) => edge
                .preset_costs
                .as_ref()
                .and_then(|costs| costs.get(dimension).copied()),
            Edge::Polyline(_) => None,
        }
    }

    /// the same edge walked in the opposite direction. the id is kept, the
    /// cached length is not.
    pub fn reverse(&self) -> Edge {
        match self {
            Edge::Simple(edge) => Edge::with_id(edge.to, edge.from, edge.id),
            Edge::Polyline(edge) => Edge::Polyline(PolylineEdge {
                points: edge.points.iter().rev().copied().collect(),
                id: edge.id,
                distance: OnceLock::new(),
            }),
        }
    }

    /// geometric length under the given metric.
    pub fn length(&self, metric: DistanceMetric) -> f64 {
        match self {
            Edge::Simple(edge) => edge.from.position.distance_to(&edge.to.position, metric),
            Edge::Polyline(edge) => edge
                .points
                .windows(2)
                .map(|pair| pair[0].position.distance_to(&pair[1].position, metric))
                .sum(),
        }
    }

    /// geometric length, computed at most once. the metric of the first call
    /// wins; later calls return the cached value regardless of metric.
    pub fn length_cached(&self, metric: DistanceMetric) -> f64 {
        let cache = match self {
            Edge::Simple(edge) => &edge.distance,
            Edge::Polyline(edge) => &edge.distance,
        };
        *cache.get_or_init(|| self.length(metric))
    }

    /// the location a fraction `t` of the way along the edge, by arc length.
    /// `t` is clamped to [0, 1].
    pub fn point_at(&self, t: f64, metric: DistanceMetric) -> Position {
        if t <= 0.0 {
            return self.from().position;
        }
        if t >= 1.0 {
            return self.to().position;
        }
        match self {
            Edge::Simple(edge) => lerp(&edge.from.position, &edge.to.position, t),
            Edge::Polyline(edge) => {
                let total = self.length(metric);
                if total == 0.0 {
                    return edge.points[0].position;
                }
                let mut offset = 0.0;
                for pair in edge.points.windows(2) {
                    let segment = pair[0].position.distance_to(&pair[1].position, metric);
                    let end = offset + segment;
                    if t * total <= end && segment > 0.0 {
                        let local = (t * total - offset) / segment;
                        return lerp(&pair[0].position, &pair[1].position, local);
                    }
                    offset = end;
                }
                self.to().position
            }
        }
    }

    /// cut the edge into `n` consecutive segments of equal arc length. the
    /// produced edges are simple and unkeyed.
    pub fn split(&self, n: usize, metric: DistanceMetric) -> Vec<Edge> {
        if n == 0 {
            return vec![];
        }
        if n == 1 {
            return vec![self.clone()];
        }
        let delta = 1.0 / n as f64;
        let mut previous = self.from().position;
        (1..=n)
            .map(|i| {
                let current = self.point_at(i as f64 * delta, metric);
                let segment = Edge::new(Anchor::new(previous), Anchor::new(current));
                previous = current;
                segment
            })
            .collect()
    }

    /// merge this edge with a chain of continuation edges into one polyline,
    /// keeping this edge's id. each continuation contributes its endpoint.
    pub fn contract(&self, rest: &[Edge]) -> Edge {
        if rest.is_empty() {
            return self.clone();
        }
        let mut points = vec![*self.from(), *self.to()];
        points.extend(rest.iter().map(|edge| *edge.to()));
        Edge::Polyline(PolylineEdge {
            points,
            id: self.id(),
            distance: OnceLock::new(),
        })
    }
}

fn lerp(from: &Position, to: &Position, t: f64) -> Position {
    Position::new(
        from.x() + (to.x() - from.x()) * t,
        from.y() + (to.y() - from.y()) * t,
    )
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let body = match self {
            Edge::Simple(edge) => format!("{} -> {}", edge.from, edge.to),
            Edge::Polyline(edge) => edge.points.iter().map(Anchor::to_string).join(" -> "),
        };
        if self.id() > 0 {
            write!(f, "[{}]:{}", body, self.id())
        } else {
            write!(f, "[{}]", body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn anchor(x: f64, y: f64) -> Anchor {
        Anchor::new(Position::new(x, y))
    }

    #[test]
    fn test_degenerate_edge_rejected() {
        assert!(Edge::from_points(vec![]).is_err());
        assert!(Edge::from_points(vec![anchor(0.0, 0.0)]).is_err());
        assert!(Edge::from_points(vec![anchor(0.0, 0.0), anchor(1.0, 0.0)]).is_ok());
    }

    #[test]
    fn test_reverse_shares_key() {
        let edge = Edge::new(anchor(0.0, 0.0), anchor(2.0, 1.0));
        let reversed = edge.reverse();
        assert_eq!(edge.key(), reversed.key());
        assert_eq!(reversed.from().position, edge.to().position);
    }

    #[test]
    fn test_double_reverse_restores_endpoints() {
        let edge = Edge::from_points(vec![
            anchor(0.0, 0.0),
            anchor(1.0, 1.0),
            anchor(2.0, 0.0),
        ])
        .unwrap();
        let back = edge.reverse().reverse();
        assert_eq!(back.from().position, edge.from().position);
        assert_eq!(back.to().position, edge.to().position);
    }

    #[test]
    fn test_length_and_cache() {
        let edge = Edge::new(anchor(0.0, 0.0), anchor(3.0, 4.0));
        assert_relative_eq!(edge.length(DistanceMetric::Euclidean), 5.0);
        assert_relative_eq!(edge.length_cached(DistanceMetric::Euclidean), 5.0);
        // first computation wins
        assert_relative_eq!(edge.length_cached(DistanceMetric::Manhattan), 5.0);
    }

    #[test]
    fn test_polyline_length() {
        let edge = Edge::from_points(vec![
            anchor(0.0, 0.0),
            anchor(3.0, 4.0),
            anchor(3.0, 9.0),
        ])
        .unwrap();
        assert_relative_eq!(edge.length(DistanceMetric::Euclidean), 10.0);
    }

    #[test]
    fn test_point_at_simple() {
        let edge = Edge::new(anchor(0.0, 0.0), anchor(4.0, 0.0));
        let mid = edge.point_at(0.5, DistanceMetric::Euclidean);
        assert_relative_eq!(mid.x(), 2.0);
        assert_relative_eq!(mid.y(), 0.0);
        assert_eq!(edge.point_at(-0.5, DistanceMetric::Euclidean), Position::new(0.0, 0.0));
        assert_eq!(edge.point_at(1.5, DistanceMetric::Euclidean), Position::new(4.0, 0.0));
    }

    #[test]
    fn test_point_at_polyline_by_arc_length() {
        let edge = Edge::from_points(vec![
            anchor(0.0, 0.0),
            anchor(2.0, 0.0),
            anchor(2.0, 2.0),
        ])
        .unwrap();
        let quarter = edge.point_at(0.25, DistanceMetric::Euclidean);
        assert_relative_eq!(quarter.x(), 1.0);
        assert_relative_eq!(quarter.y(), 0.0);
        let three_quarters = edge.point_at(0.75, DistanceMetric::Euclidean);
        assert_relative_eq!(three_quarters.x(), 2.0);
        assert_relative_eq!(three_quarters.y(), 1.0);
    }

    #[test]
    fn test_split() {
        let edge = Edge::new(anchor(0.0, 0.0), anchor(4.0, 0.0));
        let parts = edge.split(4, DistanceMetric::Euclidean);
        assert_eq!(parts.len(), 4);
        for part in &parts {
            assert_relative_eq!(part.length(DistanceMetric::Euclidean), 1.0);
            assert_eq!(part.id(), -1);
        }
        assert_eq!(parts[0].from().position, Position::new(0.0, 0.0));
        assert_eq!(parts[3].to().position, Position::new(4.0, 0.0));
        assert!(edge.split(0, DistanceMetric::Euclidean).is_empty());
    }

    #[test]
    fn test_contract_chain() {
        let a = Edge::with_id(anchor(0.0, 0.0), anchor(1.0, 0.0), 12);
        let b = Edge::new(anchor(1.0, 0.0), anchor(2.0, 0.0));
        let c = Edge::new(anchor(2.0, 0.0), anchor(3.0, 0.0));
        let merged = a.contract(&[b, c]);
        assert_eq!(merged.id(), 12);
        assert_eq!(merged.from().position, Position::new(0.0, 0.0));
        assert_eq!(merged.to().position, Position::new(3.0, 0.0));
        assert_relative_eq!(merged.length(DistanceMetric::Euclidean), 3.0);
    }

    #[test]
    fn test_preset_cost_lookup() {
        let edge = Edge::new(anchor(0.0, 0.0), anchor(1.0, 0.0))
            .with_preset_costs(HashMap::from([(String::from("time"), 30.0)]));
        assert_eq!(edge.preset_cost("time"), Some(30.0));
        assert_eq!(edge.preset_cost("distance"), None);
    }
}
