use derive_more::{Add, Div, Mul, Neg, Sum};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the scalar cost of some traversal step or accumulation. carries no unit;
/// cost dimensions give meaning to the values they accumulate.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    PartialOrd,
    Ord,
    Add,
    Mul,
    Div,
    Sum,
    Neg,
    Serialize,
    Deserialize,
)]
pub struct Cost(OrderedFloat<f64>);

impl Cost {
    /// zero cost, unit of the addition operation
    pub const ZERO: Cost = Cost(OrderedFloat(0.0));

    /// one cost, unit of the multiplication operation
    pub const ONE: Cost = Cost(OrderedFloat(1.0));

    /// unreachable sentinel. comparisons against INFINITY are well-defined
    /// under the total order provided by [`OrderedFloat`].
    pub const INFINITY: Cost = Cost(OrderedFloat(f64::INFINITY));

    pub fn new(value: f64) -> Cost {
        Cost(OrderedFloat(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0 .0
    }

    pub fn is_infinite(&self) -> bool {
        self.0 .0.is_infinite()
    }
}

impl From<f64> for Cost {
    fn from(f: f64) -> Self {
        Cost(OrderedFloat(f))
    }
}

impl From<Cost> for f64 {
    fn from(val: Cost) -> Self {
        val.0.into_inner()
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
