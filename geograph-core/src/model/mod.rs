pub mod constraint;
pub mod cost;
pub mod network;
mod path;

pub use path::Path;
