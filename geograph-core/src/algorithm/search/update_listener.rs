use super::{RoutingError, RoutingResponse};

/// incremental observer of a routing call. the engine fans out synchronously
/// in listener-insertion order: once whenever the best-so-far candidate
/// improves (`completed = false`) and once on termination. listeners must
/// treat the response as read-only and must not mutate engine state.
pub trait UpdateListener {
    fn on_update(&mut self, response: &RoutingResponse) -> Result<(), RoutingError>;
}

/// notify every listener in insertion order. a failing listener is logged
/// and skipped so the search continues.
pub(crate) fn notify(listeners: &mut [Box<dyn UpdateListener>], response: &RoutingResponse) {
    for listener in listeners.iter_mut() {
        if let Err(e) = listener.on_update(response) {
            log::warn!("routing update listener failed: {}", e);
        }
    }
}
