use crate::model::cost::{CostEntry, CostMap};
use crate::util::geo::Position;

/// transient search-time record around a vertex: the costs accumulated on
/// the discovered route to it, the combined (scalar-ready) summary of those
/// costs, and a back-pointer for path reconstruction.
///
/// nodes live in an arena owned by one search call and reference their
/// predecessor by arena index, so predecessor chains stay cheap and acyclic.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub key: i64,
    pub position: Position,
    pub previous: Option<usize>,
    pub costs: CostMap,
    pub combined: CostEntry,
}

impl SearchNode {
    pub fn new(key: i64, position: Position, costs: CostMap, combined: CostEntry) -> Self {
        Self {
            key,
            position,
            previous: None,
            costs,
            combined,
        }
    }

    /// node with no costs and no predecessor, outside any search arena.
    /// used when evaluating cost functions against a bare location, e.g.
    /// when re-pricing an existing path.
    pub fn detached(key: i64, position: Position) -> Self {
        Self::new(key, position, CostMap::new(), CostEntry::ZERO)
    }
}
