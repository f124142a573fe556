#[derive(thiserror::Error, Debug, Clone)]
pub enum CostError {
    #[error("cost dimension names must be non-empty")]
    EmptyDimensionName,
}
