#![doc = include_str!("doc.md")]

pub mod algorithm;
pub mod model;
pub mod util;

// mock graph builders shared between unit tests; available to downstream
// integration tests as well
pub mod testing;
