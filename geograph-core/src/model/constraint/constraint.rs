use std::collections::HashMap;

use geo::{Contains, Geometry};

use crate::algorithm::search::SearchNode;
use crate::model::cost::{Cost, CostMap};

/// a predicate over a candidate step, scoped to a named cost dimension.
/// the variant set is closed; user-defined admission logic is expressed by
/// composing these shapes.
#[derive(Clone, Debug)]
pub enum Constraint {
    /// accepts while both the path-level and the step-level cost stay within
    /// the bound.
    MaximumCost { dimension: String, maximum: Cost },
    /// accepts while the current vertex lies inside the shape.
    WithinShape { shape: Geometry<f64> },
    /// logical NOT of the inner constraint.
    Not(Box<Constraint>),
    /// conjunction over constraints for one dimension.
    All {
        dimension: String,
        constraints: Vec<Constraint>,
    },
    /// disjunction over constraints for one dimension.
    Any {
        dimension: String,
        constraints: Vec<Constraint>,
    },
}

/// constraint lists keyed by the cost dimension they gate.
pub type ConstraintMap = HashMap<String, Vec<Constraint>>;

impl Constraint {
    /// decide whether the step from `current` with the given candidate costs
    /// is admissible. total: always produces a decision, never an error.
    pub fn check(&self, current: &SearchNode, candidate: &CostMap) -> bool {
        match self {
            Constraint::MaximumCost { dimension, maximum } => {
                match candidate.get(dimension) {
                    Some(entry) => entry.total <= *maximum && entry.current <= *maximum,
                    None => true,
                }
            }
            Constraint::WithinShape { shape } => {
                shape.contains(&current.position.to_point())
            }
            Constraint::Not(inner) => !inner.check(current, candidate),
            Constraint::All {
                dimension,
                constraints,
            } => {
                let scoped = scope(candidate, dimension);
                constraints.iter().all(|c| c.check(current, &scoped))
            }
            Constraint::Any {
                dimension,
                constraints,
            } => {
                let scoped = scope(candidate, dimension);
                constraints.iter().any(|c| c.check(current, &scoped))
            }
        }
    }
}

/// restrict a candidate cost map to one dimension.
fn scope(candidate: &CostMap, dimension: &str) -> CostMap {
    candidate
        .get(dimension)
        .map(|entry| HashMap::from([(dimension.to_string(), *entry)]))
        .unwrap_or_default()
}

/// engine-side admission test: a dimension is checked only when both its
/// constraint list and its candidate cost entry exist; every constraint in a
/// checked list must accept. missing lists accept.
pub fn check_all(current: &SearchNode, candidate: &CostMap, constraints: &ConstraintMap) -> bool {
    constraints
        .iter()
        .filter(|(dimension, _)| candidate.contains_key(dimension.as_str()))
        .all(|(_, list)| list.iter().all(|c| c.check(current, candidate)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cost::CostEntry;
    use crate::util::geo::Position;
    use geo::{coord, Rect};

    fn candidate(accumulated: f64, current: f64) -> CostMap {
        HashMap::from([(
            String::from("distance"),
            CostEntry::new(Cost::new(accumulated), Cost::new(current)),
        )])
    }

    fn node() -> SearchNode {
        SearchNode::detached(-1, Position::new(0.5, 0.5))
    }

    #[test]
    fn test_maximum_cost_bounds_total_and_current() {
        let constraint = Constraint::MaximumCost {
            dimension: String::from("distance"),
            maximum: Cost::new(3.0),
        };
        assert!(constraint.check(&node(), &candidate(1.0, 1.0)));
        // total over the bound
        assert!(!constraint.check(&node(), &candidate(2.5, 1.0)));
        // step over the bound
        assert!(!constraint.check(&node(), &candidate(0.0, 3.5)));
        // missing dimension accepts
        assert!(constraint.check(&node(), &CostMap::new()));
    }

    #[test]
    fn test_within_shape() {
        let unit_square = Geometry::Rect(Rect::new(
            coord! {x: 0.0, y: 0.0},
            coord! {x: 1.0, y: 1.0},
        ));
        let constraint = Constraint::WithinShape {
            shape: unit_square.clone(),
        };
        assert!(constraint.check(&node(), &CostMap::new()));

        let outside = SearchNode::detached(-1, Position::new(5.0, 5.0));
        assert!(!constraint.check(&outside, &CostMap::new()));

        let negated = Constraint::Not(Box::new(Constraint::WithinShape { shape: unit_square }));
        assert!(negated.check(&outside, &CostMap::new()));
    }

    #[test]
    fn test_all_and_any() {
        let tight = Constraint::MaximumCost {
            dimension: String::from("distance"),
            maximum: Cost::new(1.0),
        };
        let loose = Constraint::MaximumCost {
            dimension: String::from("distance"),
            maximum: Cost::new(10.0),
        };
        let all = Constraint::All {
            dimension: String::from("distance"),
            constraints: vec![tight.clone(), loose.clone()],
        };
        let any = Constraint::Any {
            dimension: String::from("distance"),
            constraints: vec![tight, loose],
        };
        let costs = candidate(2.0, 1.0);
        assert!(!all.check(&node(), &costs));
        assert!(any.check(&node(), &costs));
    }

    #[test]
    fn test_check_all_skips_unpriced_dimensions() {
        let constraints: ConstraintMap = HashMap::from([(
            String::from("time"),
            vec![Constraint::MaximumCost {
                dimension: String::from("time"),
                maximum: Cost::new(0.0),
            }],
        )]);
        // candidate has no "time" entry, so the list is not checked
        assert!(check_all(&node(), &candidate(9.0, 9.0), &constraints));
    }
}
