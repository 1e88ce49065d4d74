//! General-purpose collections

mod set;

pub use set::{Set, SetError, SetResult};
