use serde::{Deserialize, Serialize};

use super::{Cost, CostEntry, CostMap};

/// collapses a multi-dimensional cost map into one [`CostEntry`] by reducing
/// the `accumulated`, `current`, and `total` components independently with a
/// monoidal operation. an empty map combines to [`CostEntry::ZERO`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCombiner {
    Sum,
    Min,
    Max,
    #[default]
    Multiplicative,
}

impl CostCombiner {
    pub fn combine(&self, costs: &CostMap) -> CostEntry {
        if costs.is_empty() {
            return CostEntry::ZERO;
        }
        let accumulated = self.fold(costs.values().map(|c| c.accumulated));
        let current = self.fold(costs.values().map(|c| c.current));
        let total = self.fold(costs.values().map(|c| c.total));
        CostEntry::from_parts(accumulated, current, total)
    }

    fn fold(&self, values: impl Iterator<Item = Cost>) -> Cost {
        match self {
            CostCombiner::Sum => values.sum(),
            CostCombiner::Min => values.min().unwrap_or(Cost::ZERO),
            CostCombiner::Max => values.max().unwrap_or(Cost::ZERO),
            CostCombiner::Multiplicative => {
                values.fold(Cost::ONE, |acc, c| Cost::new(acc.as_f64() * c.as_f64()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn costs() -> CostMap {
        HashMap::from([
            (
                String::from("distance"),
                CostEntry::new(Cost::new(4.0), Cost::new(2.0)),
            ),
            (
                String::from("time"),
                CostEntry::new(Cost::new(1.0), Cost::new(3.0)),
            ),
        ])
    }

    #[test]
    fn test_sum_component_wise() {
        let combined = CostCombiner::Sum.combine(&costs());
        assert_eq!(combined.accumulated, Cost::new(5.0));
        assert_eq!(combined.current, Cost::new(5.0));
        assert_eq!(combined.total, Cost::new(10.0));
    }

    #[test]
    fn test_min_max() {
        let combined = CostCombiner::Min.combine(&costs());
        assert_eq!(combined.accumulated, Cost::new(1.0));
        assert_eq!(combined.current, Cost::new(2.0));

        let combined = CostCombiner::Max.combine(&costs());
        assert_eq!(combined.accumulated, Cost::new(4.0));
        assert_eq!(combined.total, Cost::new(6.0));
    }

    #[test]
    fn test_multiplicative() {
        let combined = CostCombiner::Multiplicative.combine(&costs());
        assert_eq!(combined.accumulated, Cost::new(4.0));
        assert_eq!(combined.current, Cost::new(6.0));
        assert_eq!(combined.total, Cost::new(24.0));
    }

    #[test]
    fn test_empty_map_combines_to_zero() {
        let empty = CostMap::new();
        assert_eq!(
            CostCombiner::Multiplicative.combine(&empty),
            CostEntry::ZERO
        );
        assert_eq!(CostCombiner::Min.combine(&empty), CostEntry::ZERO);
    }

    #[test]
    fn test_single_dimension_multiplicative_is_identity() {
        let mut costs = CostMap::new();
        costs.insert(
            String::from("distance"),
            CostEntry::new(Cost::new(2.0), Cost::new(1.5)),
        );
        let combined = CostCombiner::Multiplicative.combine(&costs);
        assert_eq!(combined, costs["distance"]);
    }
}
