use std::collections::HashMap;
use std::sync::Arc;

use crate::algorithm::search::SearchNode;
use crate::util::geo::{DistanceMetric, Position};

/// step cost of moving from the search node `from` to the location `to`.
///
/// implementations must be pure for the duration of one routing call; the
/// engine evaluates them once per candidate edge and once per heuristic
/// estimate, in no guaranteed order. the node argument exposes the costs
/// accumulated so far for functions that want path-dependent pricing.
pub trait CostFunction: Send + Sync {
    fn evaluate(&self, from: &SearchNode, to: &Position) -> f64;
}

/// cost dimensions keyed by name. names must be non-empty; `"distance"` and
/// `"time"` are well-known, arbitrary names are permitted.
pub type CostFunctionMap = HashMap<String, Arc<dyn CostFunction>>;

/// the well-known name of the default cost dimension.
pub const DISTANCE: &str = "distance";

impl CostFunction for DistanceMetric {
    fn evaluate(&self, from: &SearchNode, to: &Position) -> f64 {
        self.distance(&from.position, to)
    }
}

pub struct ConstantCost(pub f64);

impl CostFunction for ConstantCost {
    fn evaluate(&self, _from: &SearchNode, _to: &Position) -> f64 {
        self.0
    }
}

pub struct AdditiveCost(pub Vec<Arc<dyn CostFunction>>);

impl CostFunction for AdditiveCost {
    fn evaluate(&self, from: &SearchNode, to: &Position) -> f64 {
        self.0.iter().map(|f| f.evaluate(from, to)).sum()
    }
}

pub struct MultiplicativeCost(pub Vec<Arc<dyn CostFunction>>);

impl CostFunction for MultiplicativeCost {
    fn evaluate(&self, from: &SearchNode, to: &Position) -> f64 {
        self.0.iter().map(|f| f.evaluate(from, to)).product()
    }
}

pub struct PowerCost {
    pub base: Arc<dyn CostFunction>,
    pub exponent: Arc<dyn CostFunction>,
}

impl CostFunction for PowerCost {
    fn evaluate(&self, from: &SearchNode, to: &Position) -> f64 {
        self.base
            .evaluate(from, to)
            .powf(self.exponent.evaluate(from, to))
    }
}

pub struct AbsoluteCost(pub Arc<dyn CostFunction>);

impl CostFunction for AbsoluteCost {
    fn evaluate(&self, from: &SearchNode, to: &Position) -> f64 {
        self.0.evaluate(from, to).abs()
    }
}
