#[allow(clippy::module_inception)]
mod constraint;

pub use constraint::{check_all, Constraint, ConstraintMap};
