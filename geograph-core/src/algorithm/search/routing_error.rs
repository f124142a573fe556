use crate::model::{cost::CostError, network::NetworkError};

#[derive(thiserror::Error, Debug)]
pub enum RoutingError {
    #[error("invalid routing request: {0}")]
    InvalidRequest(String),
    #[error("routing failed due to a network error: {source}")]
    NetworkFailure {
        #[from]
        source: NetworkError,
    },
    #[error("routing failed due to a cost model error: {source}")]
    CostFailure {
        #[from]
        source: CostError,
    },
    #[error("routing update listener failed: {0}")]
    ListenerFailure(String),
    #[error("internal error due to search logic: {0}")]
    InternalError(String),
}
