#[derive(thiserror::Error, Debug, Clone)]
pub enum NetworkError {
    #[error("vertex not found for key {0}")]
    VertexNotFound(i64),
    #[error("edge not found for key {0}")]
    EdgeNotFound(i64),
    #[error("an edge requires at least two points, got {0}")]
    DegenerateEdge(usize),
}
