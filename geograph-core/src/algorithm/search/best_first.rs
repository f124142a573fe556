use std::collections::{HashMap, HashSet};

use crate::model::constraint;
use crate::model::cost::{cost_ops, Cost, CostCombiner, CostEntry, CostFunctionMap};
use crate::model::network::{Edge, Graph};
use crate::model::Path;
use crate::util::geo::Position;

use super::{
    backtrack, default_exploration_factor, update_listener, Frontier, RoutingAlgorithm,
    RoutingError, RoutingRequest, RoutingResponse, SearchNode,
};

/// the search skeleton shared by all three disciplines.
///
/// each iteration pops a node, tracks the best-so-far candidate by its
/// remaining estimate toward the destination, and expands its outgoing
/// edges through cost evaluation and constraint checks. breadth- and
/// depth-first de-duplicate at push time; a* keeps one node per vertex,
/// relaxes it when a cheaper accumulated cost is found, and skips nodes
/// that were already closed when popped.
pub fn run(mut request: RoutingRequest) -> Result<RoutingResponse, RoutingError> {
    let graph = request.graph;
    let destination_key = request.destination;
    let destination_position = graph.get_vertex(destination_key)?.position;

    let (functions, initial_costs) = cost_ops::initial_costs(request.cost_functions.take())?;
    let combiner = request.combiner;
    let algorithm = request.algorithm;

    let mut arena: Vec<SearchNode> = vec![];
    let mut node_index: HashMap<i64, usize> = HashMap::new();
    let mut visited: HashSet<i64> = HashSet::new();
    let mut frontier = Frontier::new(&algorithm);

    let start_vertex = graph.get_vertex(request.start)?;
    let mut start_node = SearchNode::new(
        start_vertex.key(),
        start_vertex.position,
        initial_costs,
        CostEntry::ZERO,
    );
    let start_estimate = estimate_to_destination(
        &start_node,
        start_vertex.edges(),
        destination_key,
        &destination_position,
        &functions,
        combiner,
    );
    let exploration_factor = if request.exploration_factor > 0.0 {
        request.exploration_factor
    } else {
        default_exploration_factor(start_estimate)
    };
    start_node.combined = if algorithm == RoutingAlgorithm::AStar {
        CostEntry::from_parts(Cost::ZERO, start_estimate, start_estimate)
    } else {
        combiner.combine(&start_node.costs)
    };
    arena.push(start_node);
    node_index.insert(request.start, 0);
    frontier.push(0, start_estimate);

    let mut best_index = 0usize;
    let mut best_combined = Cost::INFINITY;
    let mut terminal: Option<usize> = None;
    let mut iterations: u64 = 0;

    while let Some(index) = frontier.pop() {
        let key = arena[index].key;
        if algorithm == RoutingAlgorithm::AStar && visited.contains(&key) {
            continue;
        }
        visited.insert(key);
        iterations += 1;

        let adjacency = graph.get_vertex(key).map(|v| v.edges()).unwrap_or(&[]);

        let remaining = estimate_to_destination(
            &arena[index],
            adjacency,
            destination_key,
            &destination_position,
            &functions,
            combiner,
        );
        if remaining < best_combined {
            best_index = index;
            best_combined = remaining;
            let progress = build_response(&arena, graph, best_index, &visited, false)?;
            update_listener::notify(&mut request.listeners, &progress);
        }

        if key == destination_key {
            terminal = Some(index);
            break;
        }

        for edge in adjacency {
            let to = *edge.to();
            let to_key = to.key();
            let candidate_costs = cost_ops::next_costs(
                &arena[index],
                adjacency,
                to_key,
                &to.position,
                &functions,
            );
            if let Some(constraints) = &request.constraints {
                if !constraint::check_all(&arena[index], &candidate_costs, constraints) {
                    continue;
                }
            }
            if visited.contains(&to_key) {
                continue;
            }
            match algorithm {
                RoutingAlgorithm::BreadthFirst | RoutingAlgorithm::DepthFirst => {
                    let combined = combiner.combine(&candidate_costs);
                    let mut successor =
                        SearchNode::new(to_key, to.position, candidate_costs, combined);
                    successor.previous = Some(index);
                    arena.push(successor);
                    frontier.push(arena.len() - 1, Cost::ZERO);
                    visited.insert(to_key);
                }
                RoutingAlgorithm::AStar => {
                    let step = combiner.combine(&candidate_costs);
                    let g = arena[index].combined.accumulated + step.current;
                    let known = node_index.get(&to_key).copied();
                    let relax = match known {
                        None => true,
                        Some(existing) => g < arena[existing].combined.accumulated,
                    };
                    if !relax {
                        continue;
                    }
                    let mut successor =
                        SearchNode::new(to_key, to.position, candidate_costs, CostEntry::ZERO);
                    let successor_adjacency =
                        graph.get_vertex(to_key).map(|v| v.edges()).unwrap_or(&[]);
                    let h = estimate_to_destination(
                        &successor,
                        successor_adjacency,
                        destination_key,
                        &destination_position,
                        &functions,
                        combiner,
                    );
                    let f = request.priority_mode.priority(g, h, exploration_factor);
                    successor.combined = CostEntry::from_parts(g, h, f);
                    successor.previous = Some(index);
                    let slot = match known {
                        Some(existing) => {
                            arena[existing] = successor;
                            existing
                        }
                        None => {
                            arena.push(successor);
                            node_index.insert(to_key, arena.len() - 1);
                            arena.len() - 1
                        }
                    };
                    frontier.push(slot, f);
                }
            }
        }
    }

    log::debug!(
        "search finished after {} iterations, {} nodes allocated, {} vertices visited",
        iterations,
        arena.len(),
        visited.len()
    );

    let completed = terminal.is_some();
    if !completed {
        log::info!("no path found, try relaxing the constraints");
    }
    let response = build_response(
        &arena,
        graph,
        terminal.unwrap_or(best_index),
        &visited,
        completed,
    )?;
    update_listener::notify(&mut request.listeners, &response);
    Ok(response)
}

/// combined `current` of the one-hop cost from a node to the destination:
/// the a* heuristic, also used to rank partial results when no complete
/// path exists.
fn estimate_to_destination(
    node: &SearchNode,
    adjacency: &[Edge],
    destination_key: i64,
    destination_position: &Position,
    functions: &CostFunctionMap,
    combiner: CostCombiner,
) -> Cost {
    let costs = cost_ops::next_costs(
        node,
        adjacency,
        destination_key,
        destination_position,
        functions,
    );
    combiner.combine(&costs).current
}

fn build_response(
    arena: &[SearchNode],
    graph: &Graph,
    terminal: usize,
    visited: &HashSet<i64>,
    completed: bool,
) -> Result<RoutingResponse, RoutingError> {
    let node = arena.get(terminal).ok_or_else(|| {
        RoutingError::InternalError(format!("node index {} missing from search arena", terminal))
    })?;
    let edges = backtrack::backtrack(arena, graph, terminal)?;
    Ok(RoutingResponse {
        costs: node.costs.clone(),
        path: Path::new(edges),
        visited: visited.clone(),
        completed,
    })
}
