use std::collections::HashMap;
use std::sync::Arc;

use crate::algorithm::search::SearchNode;
use crate::model::network::Edge;
use crate::util::geo::{DistanceMetric, Position};

use super::{Cost, CostEntry, CostError, CostFunctionMap, CostMap, DISTANCE};

/// resolve the cost dimensions for one routing call. when the caller supplies
/// no functions the single `"distance"` dimension under euclidean distance is
/// used. every dimension starts from a zeroed [`CostEntry`].
pub fn initial_costs(
    cost_functions: Option<CostFunctionMap>,
) -> Result<(CostFunctionMap, CostMap), CostError> {
    let functions = match cost_functions {
        Some(functions) => functions,
        None => HashMap::from([(
            String::from(DISTANCE),
            Arc::new(DistanceMetric::Euclidean) as Arc<_>,
        )]),
    };
    if functions.keys().any(|name| name.is_empty()) {
        return Err(CostError::EmptyDimensionName);
    }
    let costs = functions
        .keys()
        .map(|name| (name.clone(), CostEntry::ZERO))
        .collect();
    Ok((functions, costs))
}

/// per-dimension costs of stepping from `current` to the location identified
/// by `to_key` / `to_position`.
///
/// when `adjacency` holds an edge to `to_key` whose preset cost map prices a
/// dimension, that value short-circuits the cost function. each produced
/// entry rolls the dimension's prior `total` into `accumulated`.
pub fn next_costs(
    current: &SearchNode,
    adjacency: &[Edge],
    to_key: i64,
    to_position: &Position,
    functions: &CostFunctionMap,
) -> CostMap {
    let connecting = adjacency.iter().find(|edge| edge.to().key() == to_key);
    functions
        .iter()
        .map(|(name, function)| {
            let step = connecting
                .and_then(|edge| edge.preset_cost(name))
                .unwrap_or_else(|| function.evaluate(current, to_position));
            let accumulated = current
                .costs
                .get(name)
                .map(|entry| entry.total)
                .unwrap_or(Cost::ZERO);
            (name.clone(), CostEntry::new(accumulated, Cost::new(step)))
        })
        .collect()
}

/// component-wise absolute difference per dimension, over the dimensions the
/// two maps share.
pub fn cost_difference(a: &CostMap, b: &CostMap) -> CostMap {
    a.iter()
        .filter_map(|(name, lhs)| {
            b.get(name).map(|rhs| {
                let entry = CostEntry::from_parts(
                    Cost::new((lhs.accumulated.as_f64() - rhs.accumulated.as_f64()).abs()),
                    Cost::new((lhs.current.as_f64() - rhs.current.as_f64()).abs()),
                    Cost::new((lhs.total.as_f64() - rhs.total.as_f64()).abs()),
                );
                (name.clone(), entry)
            })
        })
        .collect()
}
