mod cost;
mod cost_combiner;
mod cost_entry;
mod cost_error;
mod cost_function;
pub mod cost_ops;

use std::collections::HashMap;

pub use cost::Cost;
pub use cost_combiner::CostCombiner;
pub use cost_entry::CostEntry;
pub use cost_error::CostError;
pub use cost_function::{
    AbsoluteCost, AdditiveCost, ConstantCost, CostFunction, CostFunctionMap, MultiplicativeCost,
    PowerCost, DISTANCE,
};

/// cost dimension state keyed by dimension name.
pub type CostMap = HashMap<String, CostEntry>;
