use std::collections::HashSet;
use std::fmt::Display;

use serde::Serialize;

use crate::model::cost::CostMap;
use crate::model::Path;

/// result of one routing call. also the payload handed to update listeners
/// while the search runs, in which case `completed` is false and `path`
/// reconstructs the best candidate seen so far.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RoutingResponse {
    /// per-dimension accumulated cost at the terminal node.
    pub costs: CostMap,
    /// edges from the start toward the terminal node. may be empty.
    pub path: Path,
    /// keys of every vertex marked visited during the search.
    pub visited: HashSet<i64>,
    /// true only when the destination was reached.
    pub completed: bool,
}

impl Display for RoutingResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "completed:{} path:{} edges, visited:{} vertices",
            self.completed,
            self.path.len(),
            self.visited.len()
        )
    }
}
