use serde::{Deserialize, Serialize};

use crate::model::cost::Cost;

/// frontier discipline selection for a routing call. breadth-first and
/// depth-first ignore priorities; a* orders its frontier by the priority
/// produced from the accumulated cost and the heuristic estimate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingAlgorithm {
    #[default]
    BreadthFirst,
    DepthFirst,
    #[serde(rename = "a*")]
    AStar,
}

/// how a* folds the heuristic into a frontier priority.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityMode {
    /// `f = g + λ·h`. λ = 1 preserves optimality under an admissible,
    /// consistent heuristic; larger values trade optimality for goal bias.
    #[default]
    Weighted,
    /// `f = g·(h+1)^λ`. experimental: compounds the remaining estimate into
    /// the accumulated cost instead of adding it.
    Compounding,
}

impl PriorityMode {
    pub fn priority(&self, g: Cost, h: Cost, exploration_factor: f64) -> Cost {
        match self {
            PriorityMode::Weighted => Cost::new(g.as_f64() + exploration_factor * h.as_f64()),
            PriorityMode::Compounding => {
                Cost::new(g.as_f64() * (h.as_f64() + 1.0).powf(exploration_factor))
            }
        }
    }
}

/// the exploration factor used when a request leaves it unset: half the
/// start-to-destination estimate, floored at 5. scales the goal bias with
/// the size of the routing problem.
pub fn default_exploration_factor(start_estimate: Cost) -> f64 {
    (start_estimate.as_f64() / 2.0).max(5.0)
}
