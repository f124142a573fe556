pub mod backtrack;
pub mod best_first;
mod frontier;
mod routing_algorithm;
mod routing_error;
mod routing_request;
mod routing_response;
mod search_node;
mod update_listener;


pub use frontier::Frontier;
pub use routing_algorithm::default_exploration_factor;
pub use routing_algorithm::PriorityMode;
pub use routing_algorithm::RoutingAlgorithm;
pub use routing_error::RoutingError;
pub use routing_request::RoutingRequest;
pub use routing_response::RoutingResponse;
pub use search_node::SearchNode;
pub use update_listener::UpdateListener;
