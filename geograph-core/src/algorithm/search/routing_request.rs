use std::sync::Arc;

use crate::model::constraint::{Constraint, ConstraintMap};
use crate::model::cost::{CostCombiner, CostFunction, CostFunctionMap};
use crate::model::network::Graph;

use super::{
    best_first, PriorityMode, RoutingAlgorithm, RoutingError, RoutingResponse, UpdateListener,
};

/// one routing problem: a start and destination vertex in a graph, the cost
/// model to accumulate, the constraints to honor, and the observers to keep
/// informed. the graph is borrowed read-only for the duration of the call.
pub struct RoutingRequest<'graph> {
    pub(crate) graph: &'graph Graph,
    pub(crate) start: i64,
    pub(crate) destination: i64,
    pub(crate) cost_functions: Option<CostFunctionMap>,
    pub(crate) constraints: Option<ConstraintMap>,
    pub(crate) combiner: CostCombiner,
    pub(crate) listeners: Vec<Box<dyn UpdateListener>>,
    pub(crate) exploration_factor: f64,
    pub(crate) priority_mode: PriorityMode,
    pub(crate) algorithm: RoutingAlgorithm,
}

impl<'graph> RoutingRequest<'graph> {
    /// build a request between two vertices identified by key. fails fast
    /// when either endpoint is missing from the graph.
    pub fn new(
        graph: &'graph Graph,
        start: i64,
        destination: i64,
    ) -> Result<RoutingRequest<'graph>, RoutingError> {
        if !graph.contains_vertex_key(start) {
            return Err(RoutingError::InvalidRequest(format!(
                "start vertex {} not in graph",
                start
            )));
        }
        if !graph.contains_vertex_key(destination) {
            return Err(RoutingError::InvalidRequest(format!(
                "destination vertex {} not in graph",
                destination
            )));
        }
        Ok(RoutingRequest {
            graph,
            start,
            destination,
            cost_functions: None,
            constraints: None,
            combiner: CostCombiner::default(),
            listeners: vec![],
            exploration_factor: 0.0,
            priority_mode: PriorityMode::default(),
            algorithm: RoutingAlgorithm::default(),
        })
    }

    pub fn with_algorithm(mut self, algorithm: RoutingAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// register a cost dimension. the first registration replaces the
    /// default `{"distance": euclidean}` model.
    pub fn with_cost_function(
        mut self,
        dimension: impl Into<String>,
        function: Arc<dyn CostFunction>,
    ) -> Self {
        self.cost_functions
            .get_or_insert_with(Default::default)
            .insert(dimension.into(), function);
        self
    }

    pub fn with_cost_functions(mut self, functions: CostFunctionMap) -> Self {
        self.cost_functions = Some(functions);
        self
    }

    pub fn with_constraint(mut self, dimension: impl Into<String>, constraint: Constraint) -> Self {
        self.constraints
            .get_or_insert_with(Default::default)
            .entry(dimension.into())
            .or_default()
            .push(constraint);
        self
    }

    pub fn with_constraints(mut self, constraints: ConstraintMap) -> Self {
        self.constraints = Some(constraints);
        self
    }

    pub fn with_combiner(mut self, combiner: CostCombiner) -> Self {
        self.combiner = combiner;
        self
    }

    pub fn with_listener(mut self, listener: Box<dyn UpdateListener>) -> Self {
        self.listeners.push(listener);
        self
    }

    /// weight on the heuristic term of the a* priority. zero (the default)
    /// selects [`default_exploration_factor`] at search time.
    ///
    /// [`default_exploration_factor`]: super::default_exploration_factor
    pub fn with_exploration_factor(mut self, exploration_factor: f64) -> Self {
        self.exploration_factor = exploration_factor;
        self
    }

    pub fn with_priority_mode(mut self, priority_mode: PriorityMode) -> Self {
        self.priority_mode = priority_mode;
        self
    }

    /// run the search to completion.
    pub fn run(self) -> Result<RoutingResponse, RoutingError> {
        best_first::run(self)
    }
}
