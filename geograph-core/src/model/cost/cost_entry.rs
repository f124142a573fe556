use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::Cost;

/// the state of one cost dimension at one search node.
///
/// `accumulated` is the summed cost up to (not including) the most recent
/// step, `current` is that step's incremental cost, and `total` is their sum.
/// all three are carried so combiners and constraints can inspect local or
/// path-level values.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEntry {
    pub accumulated: Cost,
    pub current: Cost,
    pub total: Cost,
}

impl CostEntry {
    pub const ZERO: CostEntry = CostEntry {
        accumulated: Cost::ZERO,
        current: Cost::ZERO,
        total: Cost::ZERO,
    };

    /// entry for one step, maintaining `total = accumulated + current`.
    pub fn new(accumulated: Cost, current: Cost) -> CostEntry {
        CostEntry {
            accumulated,
            current,
            total: accumulated + current,
        }
    }

    /// entry with independently-reduced components, as produced by a
    /// combiner. `total` is not recomputed here.
    pub fn from_parts(accumulated: Cost, current: Cost, total: Cost) -> CostEntry {
        CostEntry {
            accumulated,
            current,
            total,
        }
    }
}

impl Display for CostEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "acc:{} cur:{} tot:{}",
            self.accumulated, self.current, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_maintains_total() {
        let entry = CostEntry::new(Cost::new(3.0), Cost::new(2.0));
        assert_eq!(entry.total, Cost::new(5.0));
    }
}
